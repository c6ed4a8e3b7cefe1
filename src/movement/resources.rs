//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::ShakeRequest;

/// Movement tunables. Partial config files fall back to these defaults field by field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    pub move_speed: f32,
    /// Upward impulse of a ground jump
    pub jump_speed: f32,
    pub wall_slide_speed: f32,
    /// Horizontal velocity factor per physics tick while drifting in the air
    pub air_drag_multiplier: f32,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    pub wall_jump_force: f32,
    /// Normalised when the controller is built
    pub wall_jump_direction: Vec2,
    /// Range of the wall probe that counts as touching a wall
    pub wall_check_distance: f32,
    pub dash_distance: f32,
    /// Seconds before another dash is allowed
    pub dash_cooldown: f32,
    pub dash_shake: ShakeRequest,
    /// Seconds of frozen control after pressing away from a wall
    pub turn_lock_duration: f32,
    /// SmoothDamp smoothing time of horizontal movement
    pub movement_smoothing: f32,
    /// Ground jump plus air jumps
    pub max_jumps: u8,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_speed: 680.0,
            wall_slide_speed: 100.0,
            air_drag_multiplier: 0.95,
            fall_multiplier: 2.5,
            low_jump_multiplier: 6.0,
            wall_jump_force: 700.0,
            wall_jump_direction: Vec2::new(1.0, 1.5),
            wall_check_distance: 4.0,
            dash_distance: 180.0,
            dash_cooldown: 5.0,
            dash_shake: ShakeRequest {
                intensity: 5.0,
                duration: 0.2,
            },
            turn_lock_duration: 0.1,
            movement_smoothing: 0.07,
            max_jumps: 1,
        }
    }
}

impl MotionConfig {
    /// How far the wall probe has to reach to serve both wall contact and dash clamping.
    pub fn wall_probe_range(&self) -> f32 {
        self.dash_distance.max(self.wall_check_distance)
    }
}

/// Raw input sampled every frame. Press edges stay latched until a fixed tick consumes them.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    /// Combine the latched input with the actor's probe readings into one tick's snapshot.
    pub fn snapshot(&self, grounded_probe: bool, wall_probe: Option<f32>) -> SensorSnapshot {
        SensorSnapshot {
            move_axis: self.axis,
            jump_pressed: self.jump_just_pressed,
            jump_held: self.jump_held,
            dash_pressed: self.dash_just_pressed,
            grounded_probe,
            wall_probe,
        }
    }

    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
    }
}

/// Everything the controller reads in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSnapshot {
    pub move_axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
    pub grounded_probe: bool,
    pub wall_probe: Option<f32>,
}
