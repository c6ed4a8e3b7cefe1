//! Movement domain: player locomotion driven by the motion controller.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod smoothing;
pub mod systems;


use bevy::ecs::message::Message;
use bevy::prelude::*;

pub use components::{
    ActorState, Facing, GameLayer, Ground, Player, ProbeAnchors, ProbeReadings, Readings,
    ShakeTarget,
};
pub use controller::{DashIntent, JumpKind, MotionController, MotionOutput, SenseOutcome};
pub use resources::{MotionConfig, MovementInput, SensorSnapshot};
pub use smoothing::smooth_damp;

use bootstrap::spawn_player;
use systems::{apply_motion, probe_surroundings, read_input, sense_and_decide};

/// Event emitted when an actor dashes
#[derive(Debug)]
pub struct DashEvent {
    pub actor: Entity,
    pub from_x: f32,
    pub offset_x: f32,
    pub clamped: bool,
}

impl Message for DashEvent {}

#[derive(Debug)]
pub struct JumpEvent {
    pub actor: Entity,
    pub kind: JumpKind,
}

impl Message for JumpEvent {}

/// Event emitted on a 180 degree turn
#[derive(Debug)]
pub struct TurnEvent {
    pub actor: Entity,
    pub facing: Facing,
}

impl Message for TurnEvent {}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionController>()
            .init_resource::<MovementInput>()
            .add_message::<DashEvent>()
            .add_message::<JumpEvent>()
            .add_message::<TurnEvent>()
            .add_systems(PostStartup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (probe_surroundings, sense_and_decide, apply_motion).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_probe_gizmos);
    }
}
