//! Motor domain: input sampling for the player character.

use bevy::prelude::*;

use crate::motor::{InputIntent, MotorInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<MotorInput>,
) {
    input.intent = sample_intent(&keyboard, &mouse);
}

/// Build this frame's intent. Jump and attack use `just_pressed`, so holding
/// a button yields a single press.
pub(crate) fn sample_intent(
    keyboard: &ButtonInput<KeyCode>,
    mouse: &ButtonInput<MouseButton>,
) -> InputIntent {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    InputIntent {
        horizontal_axis: x,
        jump_pressed: keyboard.just_pressed(KeyCode::Space)
            || keyboard.just_pressed(KeyCode::KeyK),
        attack_pressed: keyboard.just_pressed(KeyCode::KeyJ)
            || keyboard.just_pressed(KeyCode::ControlLeft)
            || mouse.just_pressed(MouseButton::Left),
    }
}
