//! Motor domain: character motor core, host systems and plugin wiring.
//!
//! [`CharacterMotor`] knows nothing about Bevy scheduling or avian2d; it talks
//! to the world through [`PhysicsWorld`] and [`AnimationSink`]. The systems
//! in this module bind those seams to the ECS.

mod bootstrap;
mod collaborators;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;


pub use collaborators::{AnimFlag, AnimationSink, MotorLink, PhysicsWorld};
pub use components::{Facing, GameLayer, Ground, Player, layer_mask};
pub use controller::CharacterMotor;
pub use resources::{InputIntent, MotorDefaults, MotorInput, MotorTuning};

use bevy::prelude::*;

use crate::motor::bootstrap::{apply_world_gravity, spawn_player};
use crate::motor::systems::{
    attach_new_motors, drive_player_motor, read_input, tick_attack_timers,
};

pub struct MotorPlugin;

impl Plugin for MotorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotorDefaults>()
            .init_resource::<MotorInput>()
            .add_systems(Startup, (apply_world_gravity, spawn_player))
            .add_systems(
                Update,
                (attach_new_motors, read_input, drive_player_motor).chain(),
            )
            .add_systems(FixedUpdate, tick_attack_timers);

        #[cfg(feature = "dev-tools")]
        {
            app.add_systems(Startup, dev::spawn_test_room)
                .add_systems(Update, dev::draw_ground_probes.after(drive_player_motor));
        }
    }
}
