//! Camera domain: timed shake driving the camera noise amplitude.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A shake to start: amplitude and how long it lasts, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ShakeRequest {
    pub intensity: f32,
    pub duration: f32,
}

/// Something exposing a single amplitude gain to write.
pub trait AmplitudeKnob {
    fn set_amplitude_gain(&mut self, gain: f32);
}

/// Positional camera noise. `ShakeEffect` is the only writer of `amplitude_gain`.
#[derive(Component, Debug, Clone, Default)]
pub struct CameraNoise {
    pub amplitude_gain: f32,
    /// Offset applied on the last frame
    pub offset: Vec2,
}

impl AmplitudeKnob for CameraNoise {
    fn set_amplitude_gain(&mut self, gain: f32) {
        self.amplitude_gain = gain;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShakeState {
    pub remaining_time: f32,
    pub current_amplitude: f32,
}

#[derive(Component, Debug, Clone, Default)]
pub struct ShakeEffect {
    state: ShakeState,
}

impl ShakeEffect {
    pub fn state(&self) -> ShakeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.remaining_time > 0.0
    }

    /// Start a shake, replacing any shake in progress.
    pub fn trigger(&mut self, request: ShakeRequest, knob: &mut impl AmplitudeKnob) {
        self.state.current_amplitude = request.intensity;
        self.state.remaining_time = request.duration;
        knob.set_amplitude_gain(request.intensity);
    }

    /// Count down, silencing the knob once when the shake runs out.
    pub fn tick(&mut self, dt: f32, knob: &mut impl AmplitudeKnob) {
        if self.state.remaining_time <= 0.0 {
            return;
        }

        self.state.remaining_time -= dt;
        if self.state.remaining_time <= 0.0 {
            self.state.remaining_time = 0.0;
            self.state.current_amplitude = 0.0;
            knob.set_amplitude_gain(0.0);
        }
    }
}
