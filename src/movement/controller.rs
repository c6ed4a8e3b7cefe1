//! Movement domain: the motion state machine.
//!
//! Two passes run per fixed tick. `sense_and_decide` folds probes and input into
//! the actor state and starts dashes and turn-locks. `apply_motion` turns that
//! state into a velocity and a one-shot impulse for the physics integrator.
//! Deferred actions (dash cooldown, turn-lock expiry) are countdowns advanced
//! by `sense_and_decide`.

use bevy::prelude::*;

use crate::camera::ShakeRequest;
use crate::movement::smoothing::smooth_damp;
use crate::movement::{ActorState, MotionConfig, SensorSnapshot};

/// Vertical speed below which a wall contact turns into a wall slide.
const WALL_SLIDE_ENTRY_SPEED: f32 = 0.1;

/// Owns the immutable tuning and evaluates the motion rules for any actor.
#[derive(Resource, Debug, Clone)]
pub struct MotionController {
    config: MotionConfig,
}

/// Teleport decided by a dash trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashIntent {
    /// Signed horizontal offset to add to the actor's position
    pub offset_x: f32,
    /// Whether a wall shortened the dash
    pub clamped: bool,
}

/// Discrete results of the sensing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SenseOutcome {
    pub dash: Option<DashIntent>,
    pub shake: Option<ShakeRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
    Air,
}

/// Results of the physics pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutput {
    /// Velocity to set on the body before the impulse
    pub velocity: Vec2,
    pub impulse: Vec2,
    pub jump: Option<JumpKind>,
    /// Facing toggled this tick (180 degree turn)
    pub flipped: bool,
}

impl MotionController {
    pub fn new(mut config: MotionConfig) -> Self {
        config.wall_jump_direction = config.wall_jump_direction.normalize_or_zero();
        Self { config }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Fresh state for a newly spawned actor.
    pub fn spawn_state(&self) -> ActorState {
        ActorState::new(self.config.max_jumps)
    }

    /// Input and sensing pass.
    pub fn sense_and_decide(
        &self,
        state: &mut ActorState,
        sensors: &SensorSnapshot,
        velocity: Vec2,
        dt: f32,
    ) -> SenseOutcome {
        let config = &self.config;
        let mut outcome = SenseOutcome::default();

        let was_grounded = state.is_grounded;
        state.is_grounded = sensors.grounded_probe;
        state.is_touching_wall = sensors
            .wall_probe
            .is_some_and(|distance| distance <= config.wall_check_distance);

        if state.is_grounded && !was_grounded {
            state.jumps_remaining = config.max_jumps;
            debug!("Landed: jumps_remaining={}", state.jumps_remaining);
        } else if was_grounded
            && !state.is_grounded
            && state.jumps_remaining == config.max_jumps
        {
            // Walking off a ledge spends the ground jump
            state.jumps_remaining = state.jumps_remaining.saturating_sub(1);
            debug!("Left ground: jumps_remaining={}", state.jumps_remaining);
        }

        let input_x = sensors.move_axis.x;
        state.previous_input_x = state.input_x;
        state.input_x = input_x;

        if sensors.jump_pressed {
            state.jump_requested = true;
        }

        if !sensors.jump_held {
            state.low_jump = true;
        }

        // Pressing away from a wall in the air freezes control briefly so a wall jump can follow
        let direction_changed =
            input_x != 0.0 && input_x.signum() != axis_sign(state.previous_input_x);
        let turn_locked = direction_changed
            && state.is_touching_wall
            && !state.is_grounded
            && input_x.signum() != state.facing.sign();
        if turn_locked {
            state.can_move = false;
            state.can_flip = false;
            state.turn_lock_timer = config.turn_lock_duration;
            debug!("Turn-locked for {}s", config.turn_lock_duration);
        }

        if sensors.dash_pressed && state.is_grounded && !state.is_dashing {
            let (distance, clamped) = match sensors.wall_probe {
                Some(hit) if hit < config.dash_distance => (hit, true),
                _ => (config.dash_distance, false),
            };

            state.is_dashing = true;
            state.dash_cooldown_timer = config.dash_cooldown;

            outcome.dash = Some(DashIntent {
                offset_x: distance * state.facing.sign(),
                clamped,
            });
            outcome.shake = Some(config.dash_shake);
            debug!("Dash: distance={}, clamped={}", distance, clamped);
        }

        // A countdown does not advance on the tick that starts it
        if !state.can_move && !turn_locked {
            state.turn_lock_timer -= dt;
            if state.turn_lock_timer <= 0.0 {
                state.turn_lock_timer = 0.0;
                state.can_move = true;
                state.can_flip = true;
            }
        }

        if state.is_dashing && outcome.dash.is_none() {
            state.dash_cooldown_timer -= dt;
            if state.dash_cooldown_timer <= 0.0 {
                state.dash_cooldown_timer = 0.0;
                state.is_dashing = false;
            }
        }

        state.is_wall_sliding = state.is_touching_wall
            && velocity.y < -WALL_SLIDE_ENTRY_SPEED
            && !state.is_grounded
            && input_x == state.facing.sign();

        outcome
    }

    /// Physics pass. Consumes the jump request whether or not a jump happened.
    pub fn apply_motion(
        &self,
        state: &mut ActorState,
        velocity: Vec2,
        gravity: Vec2,
        dt: f32,
    ) -> MotionOutput {
        let config = &self.config;
        let mut velocity = velocity;
        let mut impulse = Vec2::ZERO;
        let mut jump = None;
        let input_x = state.input_x;

        if velocity.y < 0.0 {
            velocity.y += gravity.y * (config.fall_multiplier - 1.0) * dt;
        } else if velocity.y > 0.0 && state.low_jump {
            velocity.y += gravity.y * (config.low_jump_multiplier - 1.0) * dt;
            state.low_jump = false;
        }

        if !state.is_grounded && !state.is_wall_sliding && input_x == 0.0 {
            velocity.x *= config.air_drag_multiplier;
        } else if state.can_move {
            let target = Vec2::new(input_x * config.move_speed, velocity.y);
            velocity = smooth_damp(
                velocity,
                target,
                &mut state.smoothing_velocity,
                config.movement_smoothing,
                dt,
            );
        }

        if state.is_wall_sliding && velocity.y < -config.wall_slide_speed {
            velocity.y = -config.wall_slide_speed;
        }

        if state.jump_requested {
            if state.is_grounded {
                impulse = Vec2::new(0.0, config.jump_speed);
                state.jumps_remaining = state.jumps_remaining.saturating_sub(1);
                jump = Some(JumpKind::Ground);
            } else if state.is_wall_sliding || state.is_touching_wall {
                velocity.y = 0.0;
                let direction = config.wall_jump_direction;
                impulse = Vec2::new(
                    config.wall_jump_force * direction.x * -state.facing.sign(),
                    config.wall_jump_force * direction.y,
                );
                state.turn_lock_timer = 0.0;
                state.can_move = true;
                state.can_flip = true;
                state.jumps_remaining = config.max_jumps.saturating_sub(1);
                jump = Some(JumpKind::Wall);
            } else if state.jumps_remaining > 0 {
                velocity.y = 0.0;
                impulse = Vec2::new(0.0, config.jump_speed);
                state.jumps_remaining -= 1;
                jump = Some(JumpKind::Air);
            }

            if let Some(kind) = jump {
                debug!("{:?} jump: jumps_remaining={}", kind, state.jumps_remaining);
            }
        }

        let flipped = axis_sign(input_x) == -state.facing.sign()
            && !state.is_wall_sliding
            && state.can_flip;
        if flipped {
            state.facing = state.facing.flipped();
        }

        state.jump_requested = false;

        MotionOutput {
            velocity,
            impulse,
            jump,
            flipped,
        }
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

/// Sign of an input axis, with zero for no input.
fn axis_sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
