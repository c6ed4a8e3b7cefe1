//! Critically damped smoothing toward a moving target.

use bevy::prelude::*;

const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Move `current` toward `target`, reaching it in roughly `smooth_time` seconds.
///
/// `velocity` carries the smoothing state between calls. Uses the cubic
/// approximation of `exp(-omega * dt)` and never overshoots the target: when the
/// step would pass it, the result snaps to the target and `velocity` becomes zero.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}
