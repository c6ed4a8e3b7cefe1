//! Movement domain: fixed-tick glue between the motion controller and the physics body.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::ShakeRequestEvent;
use crate::movement::{
    ActorState, DashEvent, DashIntent, Facing, JumpEvent, MotionController, MovementInput, Player,
    ProbeReadings, ShakeTarget, TurnEvent,
};

/// Teleport the body by the dash offset. Returns the x it started from.
pub fn apply_dash(position: &mut Position, dash: DashIntent) -> f32 {
    let from_x = position.x;
    position.x += dash.offset_x;
    from_x
}

pub(crate) fn sense_and_decide(
    time: Res<Time>,
    controller: Res<MotionController>,
    mut input: ResMut<MovementInput>,
    mut dash_events: MessageWriter<DashEvent>,
    mut shake_events: MessageWriter<ShakeRequestEvent>,
    mut query: Query<
        (
            Entity,
            &mut ActorState,
            &ProbeReadings,
            &LinearVelocity,
            &mut Position,
            Option<&ShakeTarget>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut state, readings, velocity, mut position, shake_target) in &mut query {
        let Some(readings) = readings.latest else {
            continue;
        };

        let sensors = input.snapshot(readings.grounded, readings.wall_hit);
        let outcome = controller.sense_and_decide(&mut state, &sensors, velocity.0, dt);

        if let Some(dash) = outcome.dash {
            let from_x = apply_dash(&mut position, dash);

            dash_events.write(DashEvent {
                actor: entity,
                from_x,
                offset_x: dash.offset_x,
                clamped: dash.clamped,
            });
        }

        if let Some(request) = outcome.shake {
            match shake_target {
                Some(target) => {
                    shake_events.write(ShakeRequestEvent {
                        camera: target.0,
                        request,
                    });
                }
                None => debug!("Actor {:?} has no shake target", entity),
            }
        }
    }

    input.clear_edges();
}

pub(crate) fn apply_motion(
    time: Res<Time>,
    gravity: Res<Gravity>,
    controller: Res<MotionController>,
    mut jump_events: MessageWriter<JumpEvent>,
    mut turn_events: MessageWriter<TurnEvent>,
    mut query: Query<
        (
            Entity,
            &mut ActorState,
            &ProbeReadings,
            &mut LinearVelocity,
            Option<&ComputedMass>,
            Option<&mut Sprite>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut state, readings, mut velocity, mass, sprite) in &mut query {
        if readings.latest.is_none() {
            continue;
        }

        let output = controller.apply_motion(&mut state, velocity.0, gravity.0, dt);
        let inverse_mass = mass.map_or(1.0, |mass| mass.inverse());
        velocity.0 = output.velocity + output.impulse * inverse_mass;

        if let Some(kind) = output.jump {
            jump_events.write(JumpEvent {
                actor: entity,
                kind,
            });
        }

        if output.flipped {
            if let Some(mut sprite) = sprite {
                sprite.flip_x = state.facing == Facing::Left;
            }
            turn_events.write(TurnEvent {
                actor: entity,
                facing: state.facing,
            });
        }
    }
}
