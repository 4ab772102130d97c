//! Movement domain: per-tick integration of held input into a position.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;

use crate::movement::collision::{Resolution, resolve};
use crate::movement::{MoveFlags, MovementTuning};

/// Minimum horizontal travel before the facing is updated.
const FACING_EPSILON: f32 = 0.0001;

/// Displacement for one tick. Each held flag contributes `speed * dt` on its
/// own axis, so diagonals cover `sqrt(2)` times the distance.
pub fn frame_velocity(flags: MoveFlags, speed: f32, elapsed: f32) -> Vec3 {
    let step = speed * elapsed;
    let mut velocity = Vec3::ZERO;
    if flags.forward {
        velocity.z -= step;
    }
    if flags.backward {
        velocity.z += step;
    }
    if flags.left {
        velocity.x -= step;
    }
    if flags.right {
        velocity.x += step;
    }
    velocity
}

/// Advance the player one tick and return what the resolver accepted.
pub fn step<I>(
    position: Vec3,
    flags: MoveFlags,
    elapsed: f32,
    tuning: &MovementTuning,
    obstacles: I,
) -> Resolution
where
    I: IntoIterator<Item = Aabb3d>,
{
    let dt = elapsed.clamp(0.0, tuning.max_frame_time);
    let proposed = position + frame_velocity(flags, tuning.speed, dt);
    resolve(
        position,
        proposed,
        tuning.world_limit,
        tuning.body_size,
        obstacles,
    )
}

/// Heading that faces along the horizontal travel between two positions, or
/// `None` when the player did not actually move.
pub fn facing_from_delta(previous: Vec3, current: Vec3) -> Option<f32> {
    let delta = Vec2::new(current.x - previous.x, current.z - previous.z);
    if delta.length() > FACING_EPSILON {
        Some(delta.x.atan2(delta.y))
    } else {
        None
    }
}

/// Heading from `from` toward `target` on the horizontal plane.
pub fn yaw_towards(from: Vec3, target: Vec3) -> f32 {
    (target.x - from.x).atan2(target.z - from.z)
}
