//! Camera domain: the follow camera and its dash shake.

mod shake;
mod systems;

#[cfg(test)]
mod tests;

use bevy::ecs::message::Message;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use shake::{AmplitudeKnob, CameraNoise, ShakeEffect, ShakeRequest, ShakeState};

use systems::{apply_camera_noise, follow_player, handle_shake_requests, setup_camera, tick_shake};

/// Seed of the camera noise generator, so shakes replay identically.
const NOISE_SEED: u64 = 0x5EED_CA3E;

/// Point the camera looks at before noise is added.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CameraFocus(pub Vec2);

/// Random source for camera noise.
#[derive(Resource, Debug)]
pub struct NoiseRng(pub ChaCha8Rng);

impl Default for NoiseRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(NOISE_SEED))
    }
}

/// Event requesting a shake on a specific camera
#[derive(Debug)]
pub struct ShakeRequestEvent {
    pub camera: Entity,
    pub request: ShakeRequest,
}

impl Message for ShakeRequestEvent {}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NoiseRng>()
            .add_message::<ShakeRequestEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    handle_shake_requests,
                    tick_shake,
                    follow_player,
                    apply_camera_noise,
                )
                    .chain(),
            );
    }
}
