//! Animation flags and state selection.
//!
//! The motor writes boolean flags; this module turns them into a single
//! [`AnimationState`] per character and reflects it on the sprite.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::motor::{AnimFlag, AnimationSink};

/// Vertical speed above which an airborne character counts as rising.
const RISING_THRESHOLD: f32 = 0.1;

/// Boolean animation parameters, as last reported by the motor.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorFlags {
    pub is_grounded: bool,
    pub is_walking: bool,
    pub is_attacking: bool,
}

impl AnimationSink for AnimatorFlags {
    fn set_flag(&mut self, flag: AnimFlag, value: bool) {
        let slot = match flag {
            AnimFlag::IsGrounded => &mut self.is_grounded,
            AnimFlag::IsWalking => &mut self.is_walking,
            AnimFlag::IsAttacking => &mut self.is_attacking,
        };
        if *slot != value {
            trace!("Animator {} = {}", flag.name(), value);
            *slot = value;
        }
    }
}

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    Attack,
}

impl AnimationState {
    /// Attack overrides everything, then airborne states, then ground states.
    pub fn from_flags(flags: &AnimatorFlags, vertical_velocity: f32) -> Self {
        if flags.is_attacking {
            AnimationState::Attack
        } else if !flags.is_grounded {
            if vertical_velocity > RISING_THRESHOLD {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if flags.is_walking {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }

    /// Placeholder tint until sprite sheets exist.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.8, 0.9, 1.0),
            AnimationState::Jump => Color::srgb(0.7, 0.8, 1.0),
            AnimationState::Fall => Color::srgb(0.6, 0.7, 0.9),
            AnimationState::Attack => Color::srgb(1.0, 0.6, 0.5),
        }
    }
}

/// Tracks the selected state and the one before it.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
}

impl AnimationController {
    /// Returns true if the state changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        true
    }
}

pub(crate) fn update_animation_state(
    mut query: Query<(
        &AnimatorFlags,
        Option<&LinearVelocity>,
        &mut AnimationController,
        &mut Sprite,
    )>,
) {
    for (flags, velocity, mut controller, mut sprite) in &mut query {
        let vertical_velocity = velocity.map_or(0.0, |v| v.y);
        let state = AnimationState::from_flags(flags, vertical_velocity);

        if controller.set_state(state) {
            trace!(
                "Animation state {:?} -> {:?}",
                controller.previous_state, controller.state
            );
            sprite.color = state.tint();
        }
    }
}
