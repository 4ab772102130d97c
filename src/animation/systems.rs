//! Animation systems: clip timing, one-shot completion and locomotion blending.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use super::state::{AnimationController, AnimationState, AnimationTrigger, AnimationTuning};
use crate::movement::{MovementInput, Player};

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Message fired when a one-shot animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// Run condition: the player is in a state that accepts movement input.
pub fn movement_allowed(query: Query<&AnimationController, With<Player>>) -> bool {
    query
        .single()
        .is_ok_and(|controller| controller.allows_movement())
}

/// Advance clips, report finished one-shots and derive the locomotion state
/// from the held movement flags.
pub(crate) fn drive_animation(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<AnimationTuning>,
    mut query: Query<(Entity, &mut AnimationController), With<Player>>,
    mut finished_events: MessageWriter<AnimationFinished>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    let moving = input.flags.any();

    for (entity, mut controller) in &mut query {
        let mut changes = Vec::new();

        if let Some(state) = controller.advance(time.delta_secs()) {
            debug!("Animation '{}' finished", state.name());
            finished_events.write(AnimationFinished { entity, state });
            changes.extend(
                controller.transition(AnimationTrigger::ActionFinished { moving }, &tuning),
            );
        }

        if controller.allows_movement() {
            changes.extend(controller.transition(AnimationTrigger::Locomotion { moving }, &tuning));
        }

        for change in changes {
            debug!("Animation {} -> {}", change.from.name(), change.to.name());
            changed_events.write(AnimationStateChanged {
                entity,
                from: change.from,
                to: change.to,
            });
        }
    }
}
