//! Movement domain: ground and wall probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ActorState, Facing, GameLayer, MotionController, ProbeAnchors, ProbeReadings, Readings,
};

/// Radius of the ground overlap circle at the foot anchor.
pub const GROUND_PROBE_RADIUS: f32 = 4.0;

/// World-space probe origins for an actor, or `None` when an anchor is missing.
pub fn probe_origins(
    transform: &Transform,
    anchors: &ProbeAnchors,
    facing: Facing,
) -> Option<(Vec2, Vec2)> {
    let position = transform.translation.truncate();
    let ground = anchors.ground?;
    let wall = anchors.wall?;
    let wall = Vec2::new(wall.x * facing.sign(), wall.y);

    Some((position + ground, position + wall))
}

pub(crate) fn probe_surroundings(
    spatial_query: SpatialQuery,
    controller: Res<MotionController>,
    mut query: Query<(
        Entity,
        &Transform,
        &ActorState,
        Option<&ProbeAnchors>,
        &mut ProbeReadings,
    )>,
) {
    // Walls and floors share the ground layer
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let foot_shape = Collider::circle(GROUND_PROBE_RADIUS);
    let wall_range = controller.config().wall_probe_range();

    for (entity, transform, state, anchors, mut readings) in &mut query {
        let Some((ground_origin, wall_origin)) =
            anchors.and_then(|anchors| probe_origins(transform, anchors, state.facing))
        else {
            if readings.mark_anchors_missing() {
                warn!("Actor {:?} is missing probe anchors; motion paused", entity);
            }
            continue;
        };

        let grounded = !spatial_query
            .shape_intersections(&foot_shape, ground_origin, 0.0, &ground_filter)
            .is_empty();

        let direction = match state.facing {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        };
        let wall_hit = spatial_query
            .cast_ray(wall_origin, direction, wall_range, true, &ground_filter)
            .map(|hit| hit.distance);

        readings.record(Readings { grounded, wall_hit });
    }
}
