//! Rooms domain: toggleable props and the bed.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractableId(pub usize);

/// A named prop the player must secure before resting.
#[derive(Debug, Clone)]
pub struct Interactable {
    pub name: String,
    pub position: Vec3,
    pub interact_distance: f32,
    pub is_safe: bool,
}

impl Interactable {
    pub fn new(name: impl Into<String>, position: Vec3, interact_distance: f32) -> Self {
        Self {
            name: name.into(),
            position,
            interact_distance,
            is_safe: false,
        }
    }

    pub fn with_safe(mut self, is_safe: bool) -> Self {
        self.is_safe = is_safe;
        self
    }

    pub fn in_reach(&self, player: Vec3) -> bool {
        player.distance(self.position) < self.interact_distance
    }

    /// Flip the safety flag and return the new value.
    pub fn toggle_safe(&mut self) -> bool {
        self.is_safe = !self.is_safe;
        self.is_safe
    }
}

#[derive(Debug, Clone)]
pub struct Bed {
    pub position: Vec3,
}

impl Bed {
    pub fn in_reach(&self, player: Vec3, radius: f32) -> bool {
        player.distance(self.position) < radius
    }
}
