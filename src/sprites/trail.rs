//! Dash trail: after-images left behind while the trail is emitting.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::DashEvent;

/// Trail on a dashing actor. Enabled by a dash and switched off again once
/// `visible_duration` has elapsed.
#[derive(Component, Debug, Clone)]
pub struct DashTrail {
    pub emitting: bool,
    pub visible_duration: f32,
    pub remaining: f32,
}

impl Default for DashTrail {
    fn default() -> Self {
        Self {
            emitting: false,
            visible_duration: 0.3,
            remaining: 0.0,
        }
    }
}

impl DashTrail {
    /// Start emitting. A second dash restarts the countdown.
    pub fn enable(&mut self) {
        self.emitting = true;
        self.remaining = self.visible_duration;
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.emitting {
            return;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.emitting = false;
        }
    }
}

/// A fading copy of the actor's sprite.
#[derive(Component, Debug)]
pub struct AfterImage {
    pub lifetime: f32,
    pub remaining: f32,
}

pub(crate) fn enable_trail_on_dash(
    mut dashes: MessageReader<DashEvent>,
    mut trails: Query<&mut DashTrail>,
) {
    for dash in dashes.read() {
        if let Ok(mut trail) = trails.get_mut(dash.actor) {
            trail.enable();
        }
    }
}

pub(crate) fn tick_trails(time: Res<Time>, mut trails: Query<&mut DashTrail>) {
    let dt = time.delta_secs();

    for mut trail in &mut trails {
        trail.tick(dt);
    }
}

pub(crate) fn emit_after_images(
    mut commands: Commands,
    trails: Query<(&DashTrail, &Transform, &Sprite)>,
) {
    for (trail, transform, sprite) in &trails {
        if !trail.emitting {
            continue;
        }

        let mut ghost = sprite.clone();
        ghost.color = ghost.color.with_alpha(0.5);
        commands.spawn((
            ghost,
            Transform::from_translation(transform.translation - Vec3::Z * 0.1),
            AfterImage {
                lifetime: trail.visible_duration,
                remaining: trail.visible_duration,
            },
        ));
    }
}

pub(crate) fn fade_after_images(
    mut commands: Commands,
    time: Res<Time>,
    mut images: Query<(Entity, &mut AfterImage, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut image, mut sprite) in &mut images {
        image.remaining -= dt;
        if image.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        let alpha = 0.5 * image.remaining / image.lifetime;
        sprite.color = sprite.color.with_alpha(alpha);
    }
}
