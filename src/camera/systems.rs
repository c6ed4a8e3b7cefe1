//! Camera domain: camera setup, player follow, shake and noise systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::camera::{CameraFocus, CameraNoise, NoiseRng, ShakeEffect, ShakeRequestEvent};
use crate::movement::Player;

/// World units of offset per unit of amplitude gain.
const NOISE_UNITS_PER_GAIN: f32 = 2.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        CameraFocus::default(),
        ShakeEffect::default(),
        CameraNoise::default(),
    ));
}

pub(crate) fn follow_player(
    player: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut CameraFocus>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    for mut focus in &mut cameras {
        focus.0 = player_transform.translation.truncate();
    }
}

pub(crate) fn handle_shake_requests(
    mut requests: MessageReader<ShakeRequestEvent>,
    mut cameras: Query<(&mut ShakeEffect, &mut CameraNoise)>,
) {
    for event in requests.read() {
        match cameras.get_mut(event.camera) {
            Ok((mut shake, mut noise)) => {
                shake.trigger(event.request, &mut *noise);
                debug!(
                    "Camera shake: intensity={}, duration={}",
                    event.request.intensity, event.request.duration
                );
            }
            Err(_) => {
                warn!(
                    "Shake requested for {:?}, which has no ShakeEffect; skipping",
                    event.camera
                );
            }
        }
    }
}

pub(crate) fn tick_shake(
    time: Res<Time>,
    mut cameras: Query<(&mut ShakeEffect, &mut CameraNoise)>,
) {
    let dt = time.delta_secs();

    for (mut shake, mut noise) in &mut cameras {
        shake.tick(dt, &mut *noise);
    }
}

pub(crate) fn apply_camera_noise(
    mut rng: ResMut<NoiseRng>,
    mut cameras: Query<(&CameraFocus, &mut CameraNoise, &mut Transform)>,
) {
    for (focus, mut noise, mut transform) in &mut cameras {
        noise.offset = if noise.amplitude_gain > 0.0 {
            let reach = noise.amplitude_gain * NOISE_UNITS_PER_GAIN;
            Vec2::new(
                rng.0.random_range(-1.0..=1.0),
                rng.0.random_range(-1.0..=1.0),
            ) * reach
        } else {
            Vec2::ZERO
        };

        let position = focus.0 + noise.offset;
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
