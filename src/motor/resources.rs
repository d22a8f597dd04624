//! Motor domain: tuning, input intent and shared defaults.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

use crate::motor::{GameLayer, layer_mask};

/// Per-character motor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorTuning {
    /// Horizontal speed at full axis deflection.
    pub speed: f32,
    pub jump_impulse: f32,
    /// Seconds the attack flag stays raised.
    pub attack_duration: f32,
    pub ground_check_radius: f32,
    /// Probe origins relative to the character, resolved through its transform.
    pub ground_probes: Vec<Vec2>,
    pub ground_layers: LayerMask,
}

impl Default for MotorTuning {
    fn default() -> Self {
        // Mirrors assets/data/motor.ron for the 24x48 unit-mass player
        Self {
            speed: 320.0,
            jump_impulse: 680.0,
            attack_duration: 0.2,
            ground_check_radius: 4.0,
            ground_probes: vec![
                Vec2::new(-10.0, -24.0),
                Vec2::new(0.0, -24.0),
                Vec2::new(10.0, -24.0),
            ],
            ground_layers: layer_mask(&[GameLayer::Ground]),
        }
    }
}

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid motor tuning '{}': {}", self.field, self.message)
    }
}

impl MotorTuning {
    /// Check every field, returning all problems found.
    /// An unchecked tuning never fails at run time; bad probe data just
    /// means the character is never grounded.
    pub fn validate(&self) -> Result<(), Vec<TuningError>> {
        let mut errors = Vec::new();

        let mut non_negative = |field: &'static str, value: f32| {
            if !value.is_finite() || value < 0.0 {
                errors.push(TuningError {
                    field,
                    message: format!("expected a finite value >= 0, got {}", value),
                });
            }
        };
        non_negative("speed", self.speed);
        non_negative("jump_impulse", self.jump_impulse);
        non_negative("attack_duration", self.attack_duration);

        if !self.ground_check_radius.is_finite() || self.ground_check_radius <= 0.0 {
            errors.push(TuningError {
                field: "ground_check_radius",
                message: format!(
                    "expected a finite value > 0, got {}",
                    self.ground_check_radius
                ),
            });
        }

        if self.ground_probes.is_empty() {
            errors.push(TuningError {
                field: "ground_probes",
                message: "at least one probe is required".to_string(),
            });
        }
        for (index, probe) in self.ground_probes.iter().enumerate() {
            if !probe.is_finite() {
                errors.push(TuningError {
                    field: "ground_probes",
                    message: format!("probe {} is not finite: {:?}", index, probe),
                });
            }
        }

        if self.ground_layers.0 == 0 {
            errors.push(TuningError {
                field: "ground_layers",
                message: "layer filter matches nothing".to_string(),
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// What the host wants the character to do this step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputIntent {
    /// Horizontal stick/keys in [-1, 1].
    pub horizontal_axis: f32,
    /// True only on the step the jump button went down.
    pub jump_pressed: bool,
    /// True only on the step the attack button went down.
    pub attack_pressed: bool,
}

/// Sampled player input, consumed by the player's motor.
#[derive(Resource, Debug, Default)]
pub struct MotorInput {
    pub intent: InputIntent,
}

/// Loaded configuration applied to newly spawned characters.
#[derive(Resource, Debug, Clone)]
pub struct MotorDefaults {
    pub tuning: MotorTuning,
    /// Downward acceleration of the physics world.
    pub gravity: f32,
}

impl Default for MotorDefaults {
    fn default() -> Self {
        Self {
            tuning: MotorTuning::default(),
            gravity: 1800.0,
        }
    }
}
