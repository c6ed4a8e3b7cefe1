//! Movement domain: debug-only test room and probe visualization.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::{GROUND_PROBE_RADIUS, probe_origins};
use crate::movement::{ActorState, GameLayer, Ground, MotionController, ProbeAnchors};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Walls share the ground layer; the wall probe tells them apart by direction
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let mut block = |color: Color, size: Vec2, position: Vec2| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor
    block(ground_color, Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0));

    // Side walls
    block(wall_color, Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0));
    block(wall_color, Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0));

    // Platforms
    block(platform_color, Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0));
    block(platform_color, Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0));

    // Pillar for wall jumping and dash clamping practice
    block(wall_color, Vec2::new(30.0, 200.0), Vec2::new(-100.0, -80.0));
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    controller: Res<MotionController>,
    query: Query<(&Transform, &ActorState, Option<&ProbeAnchors>)>,
) {
    let config = controller.config();

    for (transform, state, anchors) in &query {
        let Some((ground_origin, wall_origin)) =
            anchors.and_then(|anchors| probe_origins(transform, anchors, state.facing))
        else {
            continue;
        };

        let ground_color = if state.is_grounded {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.9, 0.9)
        };
        gizmos.circle_2d(ground_origin, GROUND_PROBE_RADIUS, ground_color);

        let direction = Vec2::X * state.facing.sign();
        gizmos.line_2d(
            wall_origin,
            wall_origin + direction * config.dash_distance,
            Color::srgb(0.3, 0.5, 0.9),
        );
        gizmos.line_2d(
            wall_origin,
            wall_origin + direction * config.wall_check_distance,
            Color::srgb(0.9, 0.3, 0.3),
        );
    }
}
