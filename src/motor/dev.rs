//! Motor domain: debug-only test room and probe visualisation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motor::{CharacterMotor, GameLayer, Ground};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // (center, size, color)
    let slabs = [
        (Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0), ground_color),
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), platform_color),
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), platform_color),
        (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), platform_color),
    ];

    for (center, size, color) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}

/// Draw each ground probe (green while grounded), a facing arrow and a
/// ring that shrinks as the attack timer runs out.
pub(crate) fn draw_ground_probes(
    mut gizmos: Gizmos,
    query: Query<(&CharacterMotor, &Transform)>,
) {
    for (motor, transform) in &query {
        let tuning = motor.tuning();
        let color = if motor.grounded() {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };

        for point in motor.probe_points(transform) {
            gizmos.circle_2d(point, tuning.ground_check_radius, color);
        }

        let origin = transform.translation.truncate();
        gizmos.arrow_2d(
            origin,
            origin + Vec2::X * motor.facing().sign() * 20.0,
            Color::srgb(0.9, 0.9, 0.3),
        );

        if motor.is_attacking() && tuning.attack_duration > 0.0 {
            let remaining = motor.attack_timer() / tuning.attack_duration;
            gizmos.circle_2d(origin, 30.0 * remaining, Color::srgb(1.0, 0.5, 0.4));
        }
    }
}
