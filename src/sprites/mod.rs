//! Sprite-side presentation of character state.

mod animation;

#[cfg(test)]
mod tests;

pub use animation::{AnimationController, AnimatorFlags};

use bevy::prelude::*;

use crate::sprites::animation::update_animation_state;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, update_animation_state);
    }
}
