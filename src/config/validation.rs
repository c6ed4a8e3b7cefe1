//! Validation for motion tunables.

use crate::movement::MotionConfig;

/// A tunable with a value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a tunable against a predicate
macro_rules! check_field {
    ($errors:expr, $config:expr, $field:ident, $valid:expr, $expected:expr) => {
        let value = $config.$field as f32;
        if !($valid)(value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate every tunable.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_motion_config(config: &MotionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;

    check_field!(errors, config, move_speed, non_negative, "non-negative");
    check_field!(errors, config, jump_speed, non_negative, "non-negative");
    check_field!(errors, config, wall_slide_speed, non_negative, "non-negative");
    check_field!(
        errors,
        config,
        air_drag_multiplier,
        |v: f32| (0.0..=1.0).contains(&v),
        "within [0, 1]"
    );
    check_field!(errors, config, fall_multiplier, |v: f32| v >= 1.0, "at least 1");
    check_field!(errors, config, low_jump_multiplier, |v: f32| v >= 1.0, "at least 1");
    check_field!(errors, config, wall_jump_force, non_negative, "non-negative");
    check_field!(errors, config, wall_check_distance, non_negative, "non-negative");
    check_field!(errors, config, dash_distance, non_negative, "non-negative");
    check_field!(errors, config, dash_cooldown, non_negative, "non-negative");
    check_field!(errors, config, turn_lock_duration, non_negative, "non-negative");
    check_field!(errors, config, movement_smoothing, |v: f32| v > 0.0, "positive");
    check_field!(errors, config, max_jumps, |v: f32| v >= 1.0, "at least 1");

    if config.wall_jump_direction.length_squared() == 0.0 {
        errors.push(ValidationError {
            field: "wall_jump_direction",
            value: 0.0,
            expected: "a non-zero vector",
        });
    }

    let shake = config.dash_shake;
    if shake.intensity < 0.0 {
        errors.push(ValidationError {
            field: "dash_shake.intensity",
            value: shake.intensity,
            expected: "non-negative",
        });
    }
    if shake.duration < 0.0 {
        errors.push(ValidationError {
            field: "dash_shake.duration",
            value: shake.duration,
            expected: "non-negative",
        });
    }

    errors
}
