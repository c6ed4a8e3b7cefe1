//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::ShakeEffect;
use crate::movement::{
    GameLayer, MotionController, Player, ProbeAnchors, ProbeReadings, ShakeTarget,
};
use crate::sprites::{AnimationController, AnimationParams, DashTrail};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player wired to the shake camera, if one exists.
/// Runs after startup so the camera is already spawned.
pub(crate) fn spawn_player(
    mut commands: Commands,
    controller: Res<MotionController>,
    existing_player: Query<Entity, With<Player>>,
    cameras: Query<Entity, With<ShakeEffect>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let half = PLAYER_SIZE / 2.0;
    let anchors = ProbeAnchors {
        ground: Some(Vec2::new(0.0, -half.y)),
        wall: Some(Vec2::new(half.x, 0.0)),
    };

    let mut player = commands.spawn((
        // Identity & Movement
        (
            Player,
            controller.spawn_state(),
            anchors,
            ProbeReadings::default(),
        ),
        // Presentation
        (
            AnimationParams::default(),
            AnimationController::default(),
            DashTrail::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    match cameras.single() {
        Ok(camera) => {
            player.insert(ShakeTarget(camera));
        }
        Err(_) => warn!("No shake camera found; dashes will not shake the screen"),
    }

    info!(
        "Spawned player: move_speed={}, jump_speed={}, max_jumps={}",
        controller.config().move_speed,
        controller.config().jump_speed,
        controller.config().max_jumps
    );
}
