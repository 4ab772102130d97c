//! Movement domain: input, collision resolution and the player controller.

mod bootstrap;
pub mod collision;
mod components;
pub mod controller;
mod resources;
mod systems;


pub use components::*;
pub use resources::*;

use bevy::prelude::*;

use crate::animation::movement_allowed;
use crate::core::{GameState, SessionSetupSet, SimulationSet};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_movement, read_input, update_facing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                OnEnter(GameState::Loading),
                spawn_player.in_set(SessionSetupSet::Spawn),
            )
            .add_systems(Update, read_input.in_set(SimulationSet::Input))
            .add_systems(
                Update,
                apply_movement
                    .in_set(SimulationSet::Movement)
                    .run_if(movement_allowed),
            )
            .add_systems(
                Update,
                update_facing
                    .in_set(SimulationSet::Animation)
                    .after(crate::animation::systems::drive_animation),
            );
    }
}
