//! Motor domain: systems that drive character motors from the schedule.

use bevy::prelude::*;

use super::physics::MotorPhysics;
use crate::motor::{CharacterMotor, MotorInput, MotorLink, Player};
use crate::sprites::AnimatorFlags;

/// Lock rotation on bodies whose motor was just added.
pub(crate) fn attach_new_motors(
    mut physics: MotorPhysics,
    query: Query<(Entity, &CharacterMotor), Added<CharacterMotor>>,
) {
    for (entity, motor) in &query {
        motor.attach(&mut physics, entity);
        debug!("Attached motor to {:?}", entity);
    }
}

pub(crate) fn drive_player_motor(
    time: Res<Time>,
    input: Res<MotorInput>,
    mut physics: MotorPhysics,
    mut query: Query<
        (
            Entity,
            &mut CharacterMotor,
            &mut Transform,
            &mut AnimatorFlags,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut motor, mut transform, mut animator) in &mut query {
        let mut link = MotorLink {
            world: &mut physics,
            body: entity,
            transform: &mut *transform,
            animator: &mut *animator,
        };
        motor.on_simulation_step(&mut link, &input.intent, dt);
    }
}

/// Runs in `FixedUpdate`, where `Time` is the fixed clock.
pub(crate) fn tick_attack_timers(
    time: Res<Time>,
    mut query: Query<(&mut CharacterMotor, &mut AnimatorFlags)>,
) {
    let fixed_dt = time.delta_secs();

    for (mut motor, mut animator) in &mut query {
        motor.on_fixed_step(&mut *animator, fixed_dt);
    }
}
