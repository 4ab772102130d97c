//! Core domain: session states, frame ordering, outcome rule and restart.

mod events;
mod outcome;
mod resources;
mod snapshot;
mod state;
mod systems;

mod ui {
    pub(crate) mod outcome;
}

#[cfg(test)]
mod tests;

pub use events::{OutcomeDecidedEvent, RestartRequestedEvent};
pub use outcome::{Outcome, evaluate_outcome};
pub use resources::{RunConfig, SessionOutcome};
pub use snapshot::{DoorView, FrameSnapshot, PropView};
pub use state::{GameState, SessionSetupSet, SimulationSet};
pub use ui::outcome::{OutcomeScreenUI, RestartButton};

use bevy::prelude::*;

use crate::core::systems::{
    evaluate_rest_outcome, handle_outcome_decided, handle_restart, reset_session, setup_camera,
    transition_to_loading,
};
use crate::core::ui::outcome::{
    cleanup_outcome_screen, handle_outcome_input, spawn_outcome_screen, update_restart_button,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<SessionOutcome>()
            .add_message::<OutcomeDecidedEvent>()
            .add_message::<RestartRequestedEvent>()
            .configure_sets(
                OnEnter(GameState::Loading),
                (
                    SessionSetupSet::Reset,
                    SessionSetupSet::Load,
                    SessionSetupSet::Spawn,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (
                    SimulationSet::Intake,
                    SimulationSet::Input,
                    SimulationSet::Movement,
                    SimulationSet::Interaction,
                    SimulationSet::Animation,
                    SimulationSet::Doors,
                    SimulationSet::Presentation,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                SimulationSet::Intake
                    .run_if(in_state(GameState::Loading).or(in_state(GameState::Playing))),
            )
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Movement,
                    SimulationSet::Interaction,
                    SimulationSet::Animation,
                    SimulationSet::Doors,
                    SimulationSet::Presentation,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, (setup_camera, transition_to_loading))
            .add_systems(
                OnEnter(GameState::Loading),
                reset_session.in_set(SessionSetupSet::Reset),
            )
            .add_systems(
                Update,
                (
                    evaluate_rest_outcome.after(SimulationSet::Animation),
                    handle_outcome_decided.after(evaluate_rest_outcome),
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Outcome), spawn_outcome_screen)
            .add_systems(OnExit(GameState::Outcome), cleanup_outcome_screen)
            .add_systems(
                Update,
                (handle_outcome_input, update_restart_button, handle_restart)
                    .chain()
                    .run_if(in_state(GameState::Outcome)),
            );
    }
}
