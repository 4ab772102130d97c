//! Movement domain: axis-aligned collision resolution for the player body.
//!
//! The resolver is blunt: the proposed position is clamped to the
//! world boundary, a box the size of the player body is placed there, and the
//! first obstacle box it overlaps rejects the whole displacement. There is no
//! sliding along a free axis, so corners can stick.

use bevy::math::Vec3A;
use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use bevy::prelude::*;

/// Result of resolving one proposed displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Position the controller should commit.
    pub accepted: Vec3,
    /// Index (in feed order) of the obstacle that rejected the move, if any.
    pub blocked_by: Option<usize>,
}

impl Resolution {
    pub fn is_blocked(&self) -> bool {
        self.blocked_by.is_some()
    }
}

/// Clamp the two horizontal axes to `[-limit, +limit]`. Height is untouched.
pub fn clamp_to_bounds(position: Vec3, limit: f32) -> Vec3 {
    Vec3::new(
        position.x.clamp(-limit, limit),
        position.y,
        position.z.clamp(-limit, limit),
    )
}

/// Box occupied by the player body when centered at `center`.
pub fn body_box(center: Vec3, body_size: Vec3) -> Aabb3d {
    Aabb3d::new(Vec3A::from(center), Vec3A::from(body_size * 0.5))
}

/// Resolve a proposed move against the current obstacle feed.
///
/// Obstacle boxes are pulled lazily so hinged parts can be recomputed from
/// their current pose; iteration stops at the first overlap.
pub fn resolve<I>(
    current: Vec3,
    proposed: Vec3,
    limit: f32,
    body_size: Vec3,
    obstacles: I,
) -> Resolution
where
    I: IntoIterator<Item = Aabb3d>,
{
    let clamped = clamp_to_bounds(proposed, limit);
    let body = body_box(clamped, body_size);

    let blocked_by = obstacles
        .into_iter()
        .position(|obstacle| obstacle.intersects(&body));

    match blocked_by {
        Some(index) => Resolution {
            accepted: current,
            blocked_by: Some(index),
        },
        None => Resolution {
            accepted: clamped,
            blocked_by: None,
        },
    }
}
