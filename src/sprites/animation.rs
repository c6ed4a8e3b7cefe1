//! Animation parameters and state selection.
//!
//! The motion systems never read anything back from here: each frame the
//! actor's movement state is copied into `AnimationParams`, and the animation
//! state and frame counter are derived from those parameters.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::movement::ActorState;

/// Parameters published to the animation graph every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationParams {
    /// Magnitude of the horizontal input
    pub speed: f32,
    pub is_grounded: bool,
    pub y_velocity: f32,
    pub is_wall_sliding: bool,
}

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
}

impl AnimationState {
    /// Pick the state the parameters call for. Wall sliding wins over airborne states.
    pub fn from_params(params: &AnimationParams) -> Self {
        if params.is_wall_sliding {
            AnimationState::WallSlide
        } else if !params.is_grounded {
            if params.y_velocity > 0.0 {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if params.speed > 0.0 {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    /// Returns whether the state changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::WallSlide => 2,
        };

        self.frame_duration = match state {
            AnimationState::Run => 0.1,
            _ => 0.15,
        };

        true
    }

    /// Advance the looping frame counter.
    pub fn advance(&mut self, dt: f32) {
        self.frame_timer += dt;

        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.total_frames;
        }
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Copy the movement state into the animation parameters.
pub fn publish_animation_params(
    mut query: Query<(&ActorState, &LinearVelocity, &mut AnimationParams)>,
) {
    for (state, velocity, mut params) in &mut query {
        *params = AnimationParams {
            speed: state.input_x.abs(),
            is_grounded: state.is_grounded,
            y_velocity: velocity.y,
            is_wall_sliding: state.is_wall_sliding,
        };
    }
}

/// Select the animation state from the parameters and advance frames.
pub fn update_animation(
    time: Res<Time>,
    mut query: Query<(Entity, &AnimationParams, &mut AnimationController)>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    let dt = time.delta_secs();

    for (entity, params, mut controller) in &mut query {
        let next = AnimationState::from_params(params);
        let from = controller.state;

        if controller.set_state(next) {
            changed_events.write(AnimationStateChanged {
                entity,
                from,
                to: next,
            });
        }

        controller.advance(dt);
    }
}
