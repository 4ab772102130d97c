//! Rooms domain: entity markers for the scene's visible parts.

use bevy::prelude::*;

use crate::rooms::doors::DoorId;
use crate::rooms::props::InteractableId;

/// Anything spawned for the current session; despawned on restart.
#[derive(Component, Debug)]
pub struct SceneEntity;

/// Static wall, lintel or floor piece.
#[derive(Component, Debug)]
pub struct ObstacleVisual;

/// Pivot entity whose Y rotation mirrors a door's hinge angle.
#[derive(Component, Debug)]
pub struct DoorHinge(pub DoorId);

/// Mesh for a toggleable prop.
#[derive(Component, Debug)]
pub struct PropVisual(pub InteractableId);

#[derive(Component, Debug)]
pub struct BedVisual;

/// Shared materials so prop colors can be swapped by handle.
#[derive(Resource, Debug, Clone)]
pub struct SceneMaterials {
    pub wall: Handle<StandardMaterial>,
    pub floor: Handle<StandardMaterial>,
    pub door: Handle<StandardMaterial>,
    pub bed: Handle<StandardMaterial>,
    pub prop_safe: Handle<StandardMaterial>,
    pub prop_unsafe: Handle<StandardMaterial>,
    pub player: Handle<StandardMaterial>,
}

impl SceneMaterials {
    pub fn prop(&self, is_safe: bool) -> Handle<StandardMaterial> {
        if is_safe {
            self.prop_safe.clone()
        } else {
            self.prop_unsafe.clone()
        }
    }
}
