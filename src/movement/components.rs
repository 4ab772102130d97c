//! Movement domain: components for the player body.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Per-player locomotion bookkeeping. The position itself lives in the
/// entity's `Transform`.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    /// Position at the end of the previous frame, used to derive facing.
    pub last_position: Vec3,
    /// Heading around +Y, in radians. Zero faces +Z.
    pub yaw: f32,
    /// Obstacle that rejected the most recent move, for debugging.
    pub blocked_by: Option<String>,
}

impl MovementState {
    pub fn at(position: Vec3) -> Self {
        Self {
            last_position: position,
            ..default()
        }
    }
}
