//! Rooms domain: scene registry, doors, props and their wiring into the frame.

mod components;
mod doors;
mod events;
mod interaction;
mod props;
mod registry;
mod spawn;
mod systems;


pub use components::{
    BedVisual, DoorHinge, ObstacleVisual, PropVisual, SceneEntity, SceneMaterials,
};
pub use doors::{Door, DoorId, DoorZone, ZONE_TOLERANCE, ZoneAxis};
pub use events::{SceneEntry, SceneEntryLoaded};
pub use interaction::{InteractionTuning, Trigger, TriggerTarget, resolve_trigger};
pub use props::{Bed, Interactable, InteractableId};
pub use registry::{Obstacle, ObstacleShape, Registered, SceneRegistry};

use bevy::prelude::*;

use crate::animation::movement_allowed;
use crate::core::{GameState, SessionSetupSet, SimulationSet};
use crate::rooms::spawn::{setup_scene_materials, spawn_floors};
use crate::rooms::systems::{
    drain_scene_intake, finish_loading, handle_triggers, sync_door_visuals, sync_prop_visuals,
    tick_doors,
};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneRegistry>()
            .init_resource::<InteractionTuning>()
            .add_message::<SceneEntryLoaded>()
            .add_systems(Startup, setup_scene_materials)
            .add_systems(
                OnEnter(GameState::Loading),
                spawn_floors.in_set(SessionSetupSet::Spawn),
            )
            .add_systems(Update, drain_scene_intake.in_set(SimulationSet::Intake))
            .add_systems(
                Update,
                finish_loading
                    .after(SimulationSet::Intake)
                    .run_if(in_state(GameState::Loading)),
            )
            .add_systems(
                Update,
                handle_triggers
                    .in_set(SimulationSet::Interaction)
                    .run_if(movement_allowed),
            )
            .add_systems(Update, tick_doors.in_set(SimulationSet::Doors))
            .add_systems(
                Update,
                (sync_door_visuals, sync_prop_visuals).in_set(SimulationSet::Presentation),
            );
    }
}
