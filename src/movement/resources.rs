//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementDefaults;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Units per second along each held axis.
    pub speed: f32,
    /// Upper bound on the elapsed time a single tick may integrate.
    pub max_frame_time: f32,
    /// Symmetric horizontal boundary, a safety net behind the walls.
    pub world_limit: f32,
    /// Extents of the box used for collision tests.
    pub body_size: Vec3,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            max_frame_time: 0.1,
            world_limit: 45.0,
            body_size: Vec3::ONE,
        }
    }
}

impl From<&MovementDefaults> for MovementTuning {
    fn from(defaults: &MovementDefaults) -> Self {
        Self {
            speed: defaults.speed,
            max_frame_time: defaults.max_frame_time,
            world_limit: defaults.world_limit,
            body_size: Vec3::from_array(defaults.body_size),
        }
    }
}

/// The four held movement directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveFlags {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Input sampled once per frame. Triggers are true only on the frame the key
/// went down.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub flags: MoveFlags,
    pub interact_just_pressed: bool,
    pub rest_just_pressed: bool,
}
