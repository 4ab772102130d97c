//! Core domain: game state definitions for the session flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Content is loaded and drained into the scene registry.
    Loading,
    Playing,
    /// Rest finished and the outcome is on screen.
    Outcome,
}

/// Per-frame simulation order. Registry membership only changes in `Intake`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Intake,
    Input,
    Movement,
    Interaction,
    Animation,
    Doors,
    Presentation,
}

/// Ordered steps run on entering `GameState::Loading`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionSetupSet {
    Reset,
    Load,
    Spawn,
}
