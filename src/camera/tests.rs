//! Camera domain: tests for shake timing and the amplitude knob.

use super::{CameraNoise, ShakeEffect, ShakeRequest};

fn dash_shake() -> ShakeRequest {
    ShakeRequest {
        intensity: 5.0,
        duration: 0.2,
    }
}

#[test]
fn test_trigger_sets_amplitude_immediately() {
    let mut shake = ShakeEffect::default();
    let mut noise = CameraNoise::default();

    shake.trigger(dash_shake(), &mut noise);

    assert_eq!(noise.amplitude_gain, 5.0);
    assert_eq!(shake.state().current_amplitude, 5.0);
    assert_eq!(shake.state().remaining_time, 0.2);
    assert!(shake.is_active());
}

#[test]
fn test_shake_silences_after_duration() {
    let mut shake = ShakeEffect::default();
    let mut noise = CameraNoise::default();

    shake.trigger(dash_shake(), &mut noise);
    shake.tick(0.2, &mut noise);

    assert_eq!(noise.amplitude_gain, 0.0);
    assert!(!shake.is_active());

    // Further ticks stay silent
    shake.tick(0.2, &mut noise);
    assert_eq!(noise.amplitude_gain, 0.0);
}

#[test]
fn test_shake_holds_amplitude_before_duration() {
    let mut shake = ShakeEffect::default();
    let mut noise = CameraNoise::default();

    shake.trigger(dash_shake(), &mut noise);
    for _ in 0..3 {
        shake.tick(0.05, &mut noise);
    }

    assert_eq!(noise.amplitude_gain, 5.0);
    assert!(shake.is_active());
}

#[test]
fn test_retrigger_overwrites_instead_of_accumulating() {
    let mut shake = ShakeEffect::default();
    let mut noise = CameraNoise::default();

    shake.trigger(dash_shake(), &mut noise);
    shake.tick(0.15, &mut noise);
    shake.trigger(
        ShakeRequest {
            intensity: 2.0,
            duration: 0.5,
        },
        &mut noise,
    );

    assert_eq!(noise.amplitude_gain, 2.0);
    assert_eq!(shake.state().remaining_time, 0.5);

    shake.tick(0.25, &mut noise);
    assert_eq!(noise.amplitude_gain, 2.0);
    shake.tick(0.25, &mut noise);
    assert_eq!(noise.amplitude_gain, 0.0);
}

#[test]
fn test_tick_without_shake_leaves_knob_alone() {
    let mut shake = ShakeEffect::default();
    let mut noise = CameraNoise {
        amplitude_gain: 1.5,
        ..Default::default()
    };

    shake.tick(1.0, &mut noise);

    assert_eq!(noise.amplitude_gain, 1.5);
}
