//! Data definitions for motor configuration files.
//!
//! These structs mirror assets/data/motor.ron and are converted into the
//! runtime [`MotorDefaults`] after parsing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motor::{GameLayer, MotorDefaults, MotorTuning, layer_mask};

// ============================================================================
// Motor config (motor.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotorConfigDef {
    pub schema_version: u32,
    /// Downward acceleration applied by the physics world.
    pub gravity: f32,
    pub player: MotorTuningDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotorTuningDef {
    pub speed: f32,
    pub jump_impulse: f32,
    pub attack_duration: f32,
    pub ground_check_radius: f32,
    /// Offsets from the character origin, in local space.
    pub ground_probes: Vec<(f32, f32)>,
    #[serde(default = "default_ground_layers")]
    pub ground_layers: Vec<GameLayer>,
}

fn default_ground_layers() -> Vec<GameLayer> {
    vec![GameLayer::Ground]
}

impl From<&MotorTuningDef> for MotorTuning {
    fn from(def: &MotorTuningDef) -> Self {
        Self {
            speed: def.speed,
            jump_impulse: def.jump_impulse,
            attack_duration: def.attack_duration,
            ground_check_radius: def.ground_check_radius,
            ground_probes: def
                .ground_probes
                .iter()
                .map(|&(x, y)| Vec2::new(x, y))
                .collect(),
            ground_layers: layer_mask(&def.ground_layers),
        }
    }
}

impl From<&MotorConfigDef> for MotorDefaults {
    fn from(def: &MotorConfigDef) -> Self {
        Self {
            tuning: MotorTuning::from(&def.player),
            gravity: def.gravity,
        }
    }
}
