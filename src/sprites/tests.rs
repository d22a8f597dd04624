//! Sprites domain: tests for animation flags and state selection.

use super::animation::{AnimationController, AnimationState, AnimatorFlags};
use crate::motor::{AnimFlag, AnimationSink};

#[test]
fn test_flags_round_trip_through_sink() {
    let mut flags = AnimatorFlags::default();

    flags.set_flag(AnimFlag::IsGrounded, true);
    flags.set_flag(AnimFlag::IsAttacking, true);

    assert!(flags.is_grounded);
    assert!(!flags.is_walking);
    assert!(flags.is_attacking);

    flags.set_flag(AnimFlag::IsAttacking, false);
    assert!(!flags.is_attacking);
}

#[test]
fn test_flag_names_match_animation_parameters() {
    assert_eq!(AnimFlag::IsGrounded.name(), "isGrounded");
    assert_eq!(AnimFlag::IsWalking.name(), "isWalking");
    assert_eq!(AnimFlag::IsAttacking.name(), "isAttacking");
}

#[test]
fn test_state_selection_priority() {
    let grounded = AnimatorFlags {
        is_grounded: true,
        ..Default::default()
    };
    assert_eq!(AnimationState::from_flags(&grounded, 0.0), AnimationState::Idle);

    let walking = AnimatorFlags {
        is_walking: true,
        ..grounded
    };
    assert_eq!(AnimationState::from_flags(&walking, 0.0), AnimationState::Walk);

    let airborne = AnimatorFlags {
        is_walking: true,
        ..Default::default()
    };
    assert_eq!(AnimationState::from_flags(&airborne, 300.0), AnimationState::Jump);
    assert_eq!(AnimationState::from_flags(&airborne, -50.0), AnimationState::Fall);

    let attacking = AnimatorFlags {
        is_attacking: true,
        ..airborne
    };
    assert_eq!(AnimationState::from_flags(&attacking, 300.0), AnimationState::Attack);
}

#[test]
fn test_controller_tracks_previous_state() {
    let mut controller = AnimationController::default();

    assert!(!controller.set_state(AnimationState::Idle));
    assert!(controller.set_state(AnimationState::Walk));
    assert_eq!(controller.previous_state, AnimationState::Idle);

    assert!(controller.set_state(AnimationState::Attack));
    assert_eq!(controller.state, AnimationState::Attack);
    assert_eq!(controller.previous_state, AnimationState::Walk);
}
