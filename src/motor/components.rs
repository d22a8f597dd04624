//! Motor domain: markers, facing and physics layers for characters.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

/// Combine a list of layers into a single filter mask.
pub fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sign applied to the x scale of the character transform.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}
