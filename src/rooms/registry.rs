//! Rooms domain: the scene registry owned by the simulation.
//!
//! Membership only grows, and only through [`SceneRegistry::register`], which
//! the intake system calls between ticks. The simulation itself only reads the
//! obstacle feed, toggles prop flags and drives door angles.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;

use crate::rooms::doors::{Door, DoorId};
use crate::rooms::events::SceneEntry;
use crate::rooms::props::{Bed, Interactable, InteractableId};

/// How an obstacle's current box is obtained.
#[derive(Debug, Clone)]
pub enum ObstacleShape {
    Fixed(Aabb3d),
    /// Follows the leaf of a hinged door. Only blocks while the door is
    /// closed; the open leaf swings through space the player may occupy.
    DoorLeaf(DoorId),
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Debug label only.
    pub label: String,
    pub shape: ObstacleShape,
}

/// What a call to [`SceneRegistry::register`] added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    Obstacle(usize),
    Door(DoorId),
    Interactable(InteractableId),
    Bed,
}

#[derive(Resource, Debug, Default)]
pub struct SceneRegistry {
    obstacles: Vec<Obstacle>,
    doors: Vec<Door>,
    interactables: Vec<Interactable>,
    bed: Option<Bed>,
}

impl SceneRegistry {
    pub fn register(&mut self, entry: SceneEntry) -> Registered {
        match entry {
            SceneEntry::Obstacle { label, bounds } => {
                Registered::Obstacle(self.register_obstacle(label, ObstacleShape::Fixed(bounds)))
            }
            SceneEntry::Door(door) => Registered::Door(self.register_door(door)),
            SceneEntry::Interactable { prop, bounds } => {
                Registered::Interactable(self.register_interactable(prop, bounds))
            }
            SceneEntry::Bed { bed, bounds } => {
                self.register_bed(bed, bounds);
                Registered::Bed
            }
        }
    }

    pub fn register_obstacle(&mut self, label: impl Into<String>, shape: ObstacleShape) -> usize {
        self.obstacles.push(Obstacle {
            label: label.into(),
            shape,
        });
        self.obstacles.len() - 1
    }

    /// Register a door together with the obstacle that tracks its leaf.
    pub fn register_door(&mut self, door: Door) -> DoorId {
        let id = DoorId(self.doors.len());
        let label = format!("{} leaf", door.label);
        self.doors.push(door);
        self.register_obstacle(label, ObstacleShape::DoorLeaf(id));
        id
    }

    /// Register a prop; it also blocks movement.
    pub fn register_interactable(&mut self, prop: Interactable, bounds: Aabb3d) -> InteractableId {
        let id = InteractableId(self.interactables.len());
        self.register_obstacle(prop.name.clone(), ObstacleShape::Fixed(bounds));
        self.interactables.push(prop);
        id
    }

    pub fn register_bed(&mut self, bed: Bed, bounds: Aabb3d) {
        if self.bed.is_some() {
            warn!("A bed is already registered, replacing it");
        }
        self.register_obstacle("bed", ObstacleShape::Fixed(bounds));
        self.bed = Some(bed);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.interactables.is_empty() && self.bed.is_none()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }

    pub fn interactables(&self) -> &[Interactable] {
        &self.interactables
    }

    pub fn interactable(&self, id: InteractableId) -> Option<&Interactable> {
        self.interactables.get(id.0)
    }

    pub fn bed(&self) -> Option<&Bed> {
        self.bed.as_ref()
    }

    /// Current world box of an obstacle, or `None` while it does not block.
    pub fn obstacle_box(&self, obstacle: &Obstacle) -> Option<Aabb3d> {
        match &obstacle.shape {
            ObstacleShape::Fixed(bounds) => Some(*bounds),
            ObstacleShape::DoorLeaf(id) => self
                .door(*id)
                .filter(|door| !door.is_open())
                .map(Door::leaf_box),
        }
    }

    /// Obstacles that currently block, paired with their box, in registration
    /// order.
    pub fn active_obstacles(&self) -> impl Iterator<Item = (&Obstacle, Aabb3d)> + '_ {
        self.obstacles
            .iter()
            .filter_map(|obstacle| self.obstacle_box(obstacle).map(|bounds| (obstacle, bounds)))
    }

    /// Boxes for every blocking obstacle, recomputed from current door angles.
    pub fn obstacle_boxes(&self) -> impl Iterator<Item = Aabb3d> + '_ {
        self.active_obstacles().map(|(_, bounds)| bounds)
    }

    /// Re-evaluate every door against the player position. Returns the doors
    /// whose openness changed.
    pub fn tick_doors(&mut self, player: Vec3) -> Vec<DoorId> {
        self.doors
            .iter_mut()
            .enumerate()
            .filter_map(|(index, door)| door.tick(player).then_some(DoorId(index)))
            .collect()
    }

    /// First registered prop within its own interact distance.
    pub fn interactable_in_reach(&self, player: Vec3) -> Option<InteractableId> {
        self.interactables
            .iter()
            .position(|prop| prop.in_reach(player))
            .map(InteractableId)
    }

    /// Toggle a prop's safety flag, returning the new value.
    pub fn toggle(&mut self, id: InteractableId) -> Option<bool> {
        self.interactables.get_mut(id.0).map(Interactable::toggle_safe)
    }

    pub fn bed_in_reach(&self, player: Vec3, radius: f32) -> bool {
        self.bed.as_ref().is_some_and(|bed| bed.in_reach(player, radius))
    }

    pub fn unsafe_count(&self) -> usize {
        self.interactables.iter().filter(|prop| !prop.is_safe).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "SceneRegistry: {} obstacles, {} doors, {} interactables, bed: {}",
            self.obstacles.len(),
            self.doors.len(),
            self.interactables.len(),
            self.bed.is_some()
        )
    }
}
