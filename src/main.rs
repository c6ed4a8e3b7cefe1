use avian2d::prelude::*;
use bevy::prelude::*;

use wallrun::{CameraPlugin, ConfigPlugin, MovementPlugin, SpritesPlugin};

/// Downward acceleration in world units per second squared.
const GRAVITY: f32 = 1800.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wallrun".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .add_plugins((ConfigPlugin, CameraPlugin, MovementPlugin, SpritesPlugin))
        .run();
}
