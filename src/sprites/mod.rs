//! Sprites module: observational presentation of the player.
//!
//! This module handles:
//! - Publishing animation parameters and picking the animation state
//! - The dash trail and its after-images

pub mod animation;
pub mod trail;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use trail::{AfterImage, DashTrail};

use trail::{emit_after_images, enable_trail_on_dash, fade_after_images, tick_trails};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            Update,
            (
                (publish_animation_params, update_animation).chain(),
                (
                    enable_trail_on_dash,
                    tick_trails,
                    emit_after_images,
                    fade_after_images,
                )
                    .chain(),
            ),
        );
    }
}
