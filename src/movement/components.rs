//! Movement domain: per-actor components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Motion state machine memory for one actor.
///
/// Written only by the motion systems. `is_wall_sliding` implies
/// `is_touching_wall && !is_grounded`, and `jumps_remaining` never exceeds
/// the configured `max_jumps`.
#[derive(Component, Debug, Clone)]
pub struct ActorState {
    pub facing: Facing,
    pub is_grounded: bool,
    pub is_touching_wall: bool,
    pub is_wall_sliding: bool,
    pub is_dashing: bool,
    /// Cleared while turn-locked after pressing away from a wall
    pub can_move: bool,
    pub can_flip: bool,
    pub jumps_remaining: u8,
    pub turn_lock_timer: f32,
    pub dash_cooldown_timer: f32,
    /// Edge-triggered jump request, consumed by the next physics pass
    pub jump_requested: bool,
    /// One-shot low jump flag, set while jump is released
    pub low_jump: bool,
    /// Latest horizontal input, read by the physics pass
    pub input_x: f32,
    /// Horizontal input from the previous tick, for direction change detection
    pub previous_input_x: f32,
    /// Carried velocity of the movement smoothing
    pub smoothing_velocity: Vec2,
}

impl ActorState {
    pub fn new(max_jumps: u8) -> Self {
        Self {
            facing: Facing::Right,
            is_grounded: false,
            is_touching_wall: false,
            is_wall_sliding: false,
            is_dashing: false,
            can_move: true,
            can_flip: true,
            jumps_remaining: max_jumps,
            turn_lock_timer: 0.0,
            dash_cooldown_timer: 0.0,
            jump_requested: false,
            low_jump: false,
            input_x: 0.0,
            previous_input_x: 0.0,
            smoothing_velocity: Vec2::ZERO,
        }
    }
}

/// Local offsets of the probe origins, relative to the actor's transform.
///
/// The wall anchor's x offset is mirrored with the facing direction. A missing
/// anchor disables sensing, and with it the motion tick, for that actor.
#[derive(Component, Debug, Clone, Default)]
pub struct ProbeAnchors {
    pub ground: Option<Vec2>,
    pub wall: Option<Vec2>,
}

/// Latest physics probe results, refreshed every fixed tick.
#[derive(Component, Debug, Clone, Default)]
pub struct ProbeReadings {
    /// `None` when the probes could not run (missing anchors)
    pub latest: Option<Readings>,
    anchors_missing: bool,
}

impl ProbeReadings {
    pub fn record(&mut self, readings: Readings) {
        self.latest = Some(readings);
        self.anchors_missing = false;
    }

    /// Clear the readings for a tick without anchors.
    /// Returns true on the first tick of a run of misses.
    pub fn mark_anchors_missing(&mut self) -> bool {
        self.latest = None;
        !std::mem::replace(&mut self.anchors_missing, true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readings {
    pub grounded: bool,
    /// Distance to the first ground-layer hit along the facing axis
    pub wall_hit: Option<f32>,
}

/// Handle to the camera entity whose shake is driven by this actor's dashes.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShakeTarget(pub Entity);
