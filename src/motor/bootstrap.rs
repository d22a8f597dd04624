//! Motor domain: player spawn and world setup from loaded defaults.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motor::{CharacterMotor, GameLayer, MotorDefaults, Player};
use crate::sprites::{AnimationController, AnimatorFlags};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn apply_world_gravity(defaults: Res<MotorDefaults>, mut gravity: ResMut<Gravity>) {
    gravity.0 = Vec2::NEG_Y * defaults.gravity;
    info!("World gravity set to {}", defaults.gravity);
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    defaults: Res<MotorDefaults>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let tuning = defaults.tuning.clone();
    info!(
        "Spawning player: speed={}, jump_impulse={}, attack_duration={}, probes={}",
        tuning.speed,
        tuning.jump_impulse,
        tuning.attack_duration,
        tuning.ground_probes.len()
    );

    commands.spawn((
        // Identity & Motor
        (
            Player,
            CharacterMotor::new(tuning),
            AnimatorFlags::default(),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            // Unit mass so configured impulses read as velocity changes
            Mass(1.0),
            NoAutoMass,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
