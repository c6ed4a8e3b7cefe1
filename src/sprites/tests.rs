//! Sprites module: tests for animation state selection and the dash trail.

use super::{AnimationController, AnimationParams, AnimationState, DashTrail};

fn params(
    speed: f32,
    is_grounded: bool,
    y_velocity: f32,
    is_wall_sliding: bool,
) -> AnimationParams {
    AnimationParams {
        speed,
        is_grounded,
        y_velocity,
        is_wall_sliding,
    }
}

// -----------------------------------------------------------------------------
// Animation state tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_states() {
    assert_eq!(
        AnimationState::from_params(&params(0.0, true, 0.0, false)),
        AnimationState::Idle
    );
    assert_eq!(
        AnimationState::from_params(&params(1.0, true, 0.0, false)),
        AnimationState::Run
    );
}

#[test]
fn test_airborne_states() {
    assert_eq!(
        AnimationState::from_params(&params(0.0, false, 200.0, false)),
        AnimationState::Jump
    );
    assert_eq!(
        AnimationState::from_params(&params(1.0, false, -50.0, false)),
        AnimationState::Fall
    );
}

#[test]
fn test_wall_slide_wins_over_fall() {
    assert_eq!(
        AnimationState::from_params(&params(1.0, false, -100.0, true)),
        AnimationState::WallSlide
    );
}

#[test]
fn test_set_state_resets_frames_only_on_change() {
    let mut controller = AnimationController::default();
    controller.advance(0.35);
    assert_eq!(controller.current_frame, 2);

    assert!(!controller.set_state(AnimationState::Idle));
    assert_eq!(controller.current_frame, 2);

    assert!(controller.set_state(AnimationState::Run));
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.previous_state, AnimationState::Idle);
    assert_eq!(controller.total_frames, 6);
}

#[test]
fn test_frames_loop() {
    let mut controller = AnimationController::default();
    for _ in 0..5 {
        controller.advance(0.15);
    }
    assert!(controller.current_frame < controller.total_frames);
}

// -----------------------------------------------------------------------------
// Dash trail tests
// -----------------------------------------------------------------------------

#[test]
fn test_trail_disables_after_visible_duration() {
    let mut trail = DashTrail {
        visible_duration: 0.5,
        ..Default::default()
    };

    trail.enable();
    assert!(trail.emitting);

    trail.tick(0.25);
    assert!(trail.emitting);

    trail.tick(0.25);
    assert!(!trail.emitting);
    assert_eq!(trail.remaining, 0.0);
}

#[test]
fn test_trail_reenable_restarts_countdown() {
    let mut trail = DashTrail {
        visible_duration: 0.5,
        ..Default::default()
    };

    trail.enable();
    trail.tick(0.375);
    trail.enable();
    trail.tick(0.375);

    assert!(trail.emitting);
}
