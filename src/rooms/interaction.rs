//! Rooms domain: what the interact and rest triggers do at a given position.

use bevy::prelude::*;

use crate::content::InteractionDefaults;
use crate::movement::controller::yaw_towards;
use crate::rooms::props::InteractableId;
use crate::rooms::registry::SceneRegistry;

#[derive(Resource, Debug, Clone)]
pub struct InteractionTuning {
    pub bed_radius: f32,
    pub rest_offset: Vec3,
    pub rest_turn: f32,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self::from(&InteractionDefaults::default())
    }
}

impl From<&InteractionDefaults> for InteractionTuning {
    fn from(defaults: &InteractionDefaults) -> Self {
        Self {
            bed_radius: defaults.bed_radius,
            rest_offset: Vec3::from_array(defaults.rest_offset),
            rest_turn: defaults.rest_turn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Toggle a prop in reach, otherwise rest if the bed is in reach.
    Interact,
    /// Rest if the bed is in reach.
    Rest,
}

/// What a trigger resolved to. Nothing has been mutated yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerTarget {
    Toggle(InteractableId),
    /// Lie down: teleport to `position` facing `yaw`.
    Rest { position: Vec3, yaw: f32 },
    Nothing,
}

pub fn resolve_trigger(
    registry: &SceneRegistry,
    tuning: &InteractionTuning,
    player: Vec3,
    trigger: Trigger,
) -> TriggerTarget {
    if trigger == Trigger::Interact {
        if let Some(id) = registry.interactable_in_reach(player) {
            return TriggerTarget::Toggle(id);
        }
    }

    match registry.bed() {
        Some(bed) if bed.in_reach(player, tuning.bed_radius) => {
            let position = bed.position + tuning.rest_offset;
            let yaw = yaw_towards(position, bed.position) + tuning.rest_turn;
            TriggerTarget::Rest { position, yaw }
        }
        _ => TriggerTarget::Nothing,
    }
}
