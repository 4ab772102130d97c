//! Rooms domain: hinged doors driven by player proximity.
//!
//! A door is open exactly while the player stands in its zone. The angle is
//! recomputed from the player position every frame and nothing else writes it.

use bevy::math::Isometry3d;
use bevy::math::bounding::{Aabb3d, Bounded3d};
use bevy::prelude::*;

/// Distance from the zone threshold, along the zone axis, that still counts
/// as standing in the doorway.
pub const ZONE_TOLERANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneAxis {
    X,
    Z,
}

impl ZoneAxis {
    pub fn coord(self, position: Vec3) -> f32 {
        match self {
            ZoneAxis::X => position.x,
            ZoneAxis::Z => position.z,
        }
    }

    pub fn other(self) -> ZoneAxis {
        match self {
            ZoneAxis::X => ZoneAxis::Z,
            ZoneAxis::Z => ZoneAxis::X,
        }
    }
}

/// Rectangular "near this door" region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorZone {
    pub axis: ZoneAxis,
    pub threshold: f32,
    pub min: f32,
    pub max: f32,
}

impl DoorZone {
    pub fn contains(&self, position: Vec3) -> bool {
        let along = self.axis.coord(position);
        let across = self.axis.other().coord(position);
        (along - self.threshold).abs() < ZONE_TOLERANCE && across >= self.min && across <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoorId(pub usize);

#[derive(Debug, Clone)]
pub struct Door {
    pub label: String,
    /// World position of the hinge at floor level.
    pub hinge: Vec3,
    /// Leaf extents as (thickness, height, width). The leaf extends from the
    /// hinge along its local +Z.
    pub leaf_size: Vec3,
    pub closed_angle: f32,
    pub open_angle: f32,
    pub zone: DoorZone,
    angle: f32,
}

impl Door {
    pub fn new(
        label: impl Into<String>,
        hinge: Vec3,
        leaf_size: Vec3,
        closed_angle: f32,
        open_angle: f32,
        zone: DoorZone,
    ) -> Self {
        Self {
            label: label.into(),
            hinge,
            leaf_size,
            closed_angle,
            open_angle,
            zone,
            angle: closed_angle,
        }
    }

    /// Current hinge rotation around +Y.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_open(&self) -> bool {
        self.angle == self.open_angle
    }

    /// Angle the hinge should hold for a player standing at `position`.
    pub fn target_angle(&self, position: Vec3) -> f32 {
        if self.zone.contains(position) {
            self.open_angle
        } else {
            self.closed_angle
        }
    }

    /// Snap the hinge to its target. Returns true when openness flipped.
    pub fn tick(&mut self, position: Vec3) -> bool {
        let was_open = self.is_open();
        self.angle = self.target_angle(position);
        was_open != self.is_open()
    }

    /// World-space box around the leaf at its current angle.
    pub fn leaf_box(&self) -> Aabb3d {
        let rotation = Quat::from_rotation_y(self.angle);
        let local_center = Vec3::new(0.0, self.leaf_size.y * 0.5, self.leaf_size.z * 0.5);
        let center = self.hinge + rotation * local_center;
        Cuboid::from_size(self.leaf_size).aabb_3d(Isometry3d::new(center, rotation))
    }
}
