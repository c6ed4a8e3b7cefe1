//! Config domain: tests for parsing and validating motion tunables.

use std::path::Path;

use bevy::math::Vec2;

use super::{
    load_motion_config, parse_motion_config_json, parse_motion_config_ron,
    validate_motion_config,
};
use crate::movement::{MotionConfig, MotionController};

#[test]
fn test_shipped_config_parses_and_validates() {
    let contents = include_str!("../../assets/data/motion.ron");
    let config = parse_motion_config_ron(contents).expect("shipped config should parse");

    assert_eq!(config, MotionConfig::default());
    assert!(validate_motion_config(&config).is_empty());
}

#[test]
fn test_partial_ron_falls_back_to_defaults() {
    let config = parse_motion_config_ron("(move_speed: 10.0, dash_cooldown: 1.5)")
        .expect("partial config should parse");

    assert_eq!(config.move_speed, 10.0);
    assert_eq!(config.dash_cooldown, 1.5);
    assert_eq!(config.jump_speed, MotionConfig::default().jump_speed);
    assert_eq!(config.max_jumps, 1);
}

#[test]
fn test_json_config_parses() {
    let config = parse_motion_config_json(
        r#"{ "wall_jump_direction": [2.0, 0.0], "dash_shake": { "intensity": 3.0, "duration": 0.5 } }"#,
    )
    .expect("json config should parse");

    assert_eq!(config.wall_jump_direction, Vec2::new(2.0, 0.0));
    assert_eq!(config.dash_shake.intensity, 3.0);
    assert_eq!(config.dash_shake.duration, 0.5);
}

#[test]
fn test_malformed_ron_is_an_error() {
    assert!(parse_motion_config_ron("(move_speed: \"fast\")").is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_motion_config(Path::new("does/not/exist.ron")).unwrap_err();

    assert_eq!(err.file, "does/not/exist.ron");
    assert!(err.message.starts_with("IO error"));
    assert!(err.to_string().contains("does/not/exist.ron"));
}

#[test]
fn test_validation_flags_out_of_range_values() {
    let config = MotionConfig {
        move_speed: -1.0,
        air_drag_multiplier: 1.5,
        movement_smoothing: 0.0,
        wall_jump_direction: Vec2::ZERO,
        max_jumps: 0,
        ..Default::default()
    };

    let fields: Vec<&str> = validate_motion_config(&config)
        .iter()
        .map(|e| e.field)
        .collect();

    assert_eq!(
        fields,
        vec![
            "move_speed",
            "air_drag_multiplier",
            "movement_smoothing",
            "max_jumps",
            "wall_jump_direction",
        ]
    );
}

#[test]
fn test_controller_normalizes_wall_jump_direction() {
    let controller = MotionController::new(MotionConfig {
        wall_jump_direction: Vec2::new(3.0, 4.0),
        ..Default::default()
    });

    let direction = controller.config().wall_jump_direction;
    assert!((direction - Vec2::new(0.6, 0.8)).length() < 1e-6);
}
