//! Animation module for the player's state machine.
//!
//! This module handles:
//! - Idle/walk locomotion with cross-fades
//! - One-shot interact and rest actions and their completion messages
//! - The "may the player move" predicate every movement system gates on

pub mod state;
pub mod systems;

use bevy::prelude::*;

pub use state::*;
pub use systems::{AnimationFinished, AnimationStateChanged, movement_allowed};

use crate::core::SimulationSet;
use systems::drive_animation;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationTuning>()
            .add_message::<AnimationStateChanged>()
            .add_message::<AnimationFinished>()
            .add_systems(Update, drive_animation.in_set(SimulationSet::Animation));
    }
}
