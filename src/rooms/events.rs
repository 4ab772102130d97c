//! Rooms domain: messages that feed the scene registry.

use bevy::ecs::message::Message;
use bevy::math::bounding::Aabb3d;

use crate::rooms::doors::Door;
use crate::rooms::props::{Bed, Interactable};

/// One piece of scene content, as produced by the loader.
#[derive(Debug, Clone)]
pub enum SceneEntry {
    Obstacle { label: String, bounds: Aabb3d },
    Door(Door),
    Interactable { prop: Interactable, bounds: Aabb3d },
    Bed { bed: Bed, bounds: Aabb3d },
}

/// Loader → registry intake. Drained between ticks, never during one.
#[derive(Debug)]
pub struct SceneEntryLoaded(pub SceneEntry);

impl Message for SceneEntryLoaded {}
