//! Content domain: tests for motor config parsing and validation.

use bevy::prelude::Vec2;
use std::path::Path;

use super::loader::{MOTOR_SCHEMA_VERSION, load_motor_config, parse_motor_config};
use crate::motor::{GameLayer, MotorDefaults, layer_mask};

const VALID: &str = r#"
(
    schema_version: 1,
    gravity: 1800.0,
    player: (
        speed: 320.0,
        jump_impulse: 680.0,
        attack_duration: 0.2,
        ground_check_radius: 4.0,
        ground_probes: [(-10.0, -24.0), (10.0, -24.0)],
        ground_layers: [Ground],
    ),
)
"#;

#[test]
fn test_parse_valid_config() {
    let defaults = parse_motor_config("motor.ron", VALID).expect("config should parse");

    assert_eq!(defaults.gravity, 1800.0);
    assert_eq!(defaults.tuning.speed, 320.0);
    assert_eq!(defaults.tuning.jump_impulse, 680.0);
    assert_eq!(defaults.tuning.attack_duration, 0.2);
    assert_eq!(defaults.tuning.ground_check_radius, 4.0);
    assert_eq!(
        defaults.tuning.ground_probes,
        vec![Vec2::new(-10.0, -24.0), Vec2::new(10.0, -24.0)]
    );
    assert_eq!(
        defaults.tuning.ground_layers,
        layer_mask(&[GameLayer::Ground])
    );
}

#[test]
fn test_ground_layers_default_to_ground() {
    let contents = VALID.replace("ground_layers: [Ground],", "");
    let defaults = parse_motor_config("motor.ron", &contents).expect("config should parse");

    assert_eq!(
        defaults.tuning.ground_layers,
        layer_mask(&[GameLayer::Ground])
    );
}

#[test]
fn test_multiple_ground_layers_combine() {
    let contents = VALID.replace("[Ground]", "[Ground, Default]");
    let defaults = parse_motor_config("motor.ron", &contents).expect("config should parse");

    assert_eq!(
        defaults.tuning.ground_layers,
        layer_mask(&[GameLayer::Ground, GameLayer::Default])
    );
}

#[test]
fn test_parse_error_reports_file() {
    let errors = parse_motor_config("broken.ron", "(schema_version: 1,").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].file, "broken.ron");
    assert!(errors[0].message.starts_with("Parse error"));
}

#[test]
fn test_schema_version_mismatch_is_rejected() {
    let contents = VALID.replace("schema_version: 1", "schema_version: 7");
    let errors = parse_motor_config("motor.ron", &contents).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("schema_version 7"));
    assert!(
        errors[0]
            .message
            .contains(&MOTOR_SCHEMA_VERSION.to_string())
    );
}

#[test]
fn test_invalid_values_are_all_reported() {
    let contents = VALID
        .replace("gravity: 1800.0", "gravity: -1.0")
        .replace("ground_probes: [(-10.0, -24.0), (10.0, -24.0)]", "ground_probes: []")
        .replace("ground_check_radius: 4.0", "ground_check_radius: 0.0");
    let errors = parse_motor_config("motor.ron", &contents).unwrap_err();

    assert_eq!(errors.len(), 3);
    assert!(errors[0].to_string().contains("gravity"));
    assert!(errors[1].to_string().contains("ground_check_radius"));
    assert!(errors[2].to_string().contains("ground_probes"));
}

#[test]
fn test_missing_file_is_io_error() {
    let errors = load_motor_config(Path::new("does/not/exist")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_is_valid() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let defaults = load_motor_config(&base).expect("shipped motor.ron should load");

    assert!(defaults.tuning.validate().is_ok());
    assert_eq!(defaults.tuning.ground_probes.len(), 3);
}

#[test]
fn test_built_in_defaults_match_shipped_config() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let shipped = load_motor_config(&base).expect("shipped motor.ron should load");
    let built_in = MotorDefaults::default();

    assert_eq!(shipped.tuning, built_in.tuning);
    assert_eq!(shipped.gravity, built_in.gravity);
}
