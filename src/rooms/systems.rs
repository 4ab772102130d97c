//! Rooms domain: intake, door automaton, interaction triggers and visual sync.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{
    AnimationController, AnimationStateChanged, AnimationTrigger, AnimationTuning,
};
use crate::core::GameState;
use crate::movement::{MovementInput, MovementState, Player};
use crate::rooms::components::{DoorHinge, PropVisual, SceneMaterials};
use crate::rooms::events::{SceneEntry, SceneEntryLoaded};
use crate::rooms::interaction::{InteractionTuning, Trigger, TriggerTarget, resolve_trigger};
use crate::rooms::registry::{Registered, SceneRegistry};
use crate::rooms::spawn::{
    spawn_bed_visual, spawn_door_visual, spawn_obstacle_visual, spawn_prop_visual,
};

/// Move loaded entries into the registry and give each a visual. Runs before
/// the simulation sets, so membership is fixed for the rest of the frame.
pub(crate) fn drain_scene_intake(
    mut commands: Commands,
    mut intake: MessageReader<SceneEntryLoaded>,
    mut registry: ResMut<SceneRegistry>,
    materials: Option<Res<SceneMaterials>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(materials) = materials else {
        return;
    };

    for SceneEntryLoaded(entry) in intake.read() {
        let bounds = match entry {
            SceneEntry::Obstacle { bounds, .. }
            | SceneEntry::Interactable { bounds, .. }
            | SceneEntry::Bed { bounds, .. } => Some(*bounds),
            SceneEntry::Door(_) => None,
        };

        match (registry.register(entry.clone()), bounds) {
            (Registered::Obstacle(_), Some(bounds)) => {
                spawn_obstacle_visual(&mut commands, &mut meshes, &materials, &bounds);
            }
            (Registered::Door(id), _) => {
                if let Some(door) = registry.door(id) {
                    spawn_door_visual(&mut commands, &mut meshes, &materials, id, door);
                }
            }
            (Registered::Interactable(id), Some(bounds)) => {
                let is_safe = registry.interactable(id).is_some_and(|prop| prop.is_safe);
                spawn_prop_visual(&mut commands, &mut meshes, &materials, id, is_safe, &bounds);
            }
            (Registered::Bed, Some(bounds)) => {
                spawn_bed_visual(&mut commands, &mut meshes, &materials, &bounds);
            }
            (registered, None) => {
                warn!("Registered {:?} without bounds to draw", registered);
            }
        }
    }
}

/// Leave `Loading` once the intake has been drained.
pub(crate) fn finish_loading(
    registry: Res<SceneRegistry>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    info!("{}", registry.summary());
    if registry.is_empty() {
        warn!("Scene registry is empty, starting anyway");
    }
    game_state.set(GameState::Playing);
}

/// Door automaton: every door snaps to the angle its zone dictates.
pub(crate) fn tick_doors(
    mut registry: ResMut<SceneRegistry>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(transform) = player_query.single() else {
        return;
    };

    for id in registry.tick_doors(transform.translation) {
        if let Some(door) = registry.door(id) {
            debug!(
                "Door '{}' {}",
                door.label,
                if door.is_open() { "opened" } else { "closed" }
            );
        }
    }
}

/// Resolve interact/rest presses. Only runs while movement is allowed, so a
/// one-shot can never be interrupted by another.
pub(crate) fn handle_triggers(
    input: Res<MovementInput>,
    interaction: Res<InteractionTuning>,
    animation: Res<AnimationTuning>,
    mut registry: ResMut<SceneRegistry>,
    mut player_query: Query<
        (
            Entity,
            &mut Transform,
            &mut MovementState,
            &mut AnimationController,
        ),
        With<Player>,
    >,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    let trigger = if input.interact_just_pressed {
        Trigger::Interact
    } else if input.rest_just_pressed {
        Trigger::Rest
    } else {
        return;
    };

    let Ok((entity, mut transform, mut state, mut controller)) = player_query.single_mut() else {
        return;
    };

    let animation_trigger = match resolve_trigger(
        &registry,
        &interaction,
        transform.translation,
        trigger,
    ) {
        TriggerTarget::Toggle(id) => {
            let Some(is_safe) = registry.toggle(id) else {
                return;
            };
            if let Some(prop) = registry.interactable(id) {
                info!(
                    "'{}' marked {} ({} still unsafe)",
                    prop.name,
                    if is_safe { "safe" } else { "unsafe" },
                    registry.unsafe_count()
                );
            }
            AnimationTrigger::Interact
        }
        TriggerTarget::Rest { position, yaw } => {
            info!(
                "Resting with {} prop(s) still unsafe",
                registry.unsafe_count()
            );
            transform.translation = position;
            transform.rotation = Quat::from_rotation_y(yaw);
            state.yaw = yaw;
            state.last_position = position;
            AnimationTrigger::Rest
        }
        TriggerTarget::Nothing => {
            debug!("{:?} pressed with nothing in reach", trigger);
            return;
        }
    };

    if let Some(change) = controller.transition(animation_trigger, &animation) {
        changed_events.write(AnimationStateChanged {
            entity,
            from: change.from,
            to: change.to,
        });
    }
}

pub(crate) fn sync_door_visuals(
    registry: Res<SceneRegistry>,
    mut query: Query<(&DoorHinge, &mut Transform)>,
) {
    for (hinge, mut transform) in &mut query {
        if let Some(door) = registry.door(hinge.0) {
            let rotation = Quat::from_rotation_y(door.angle());
            if transform.rotation != rotation {
                transform.rotation = rotation;
            }
        }
    }
}

pub(crate) fn sync_prop_visuals(
    registry: Res<SceneRegistry>,
    materials: Res<SceneMaterials>,
    mut query: Query<(&PropVisual, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for (visual, mut material) in &mut query {
        if let Some(prop) = registry.interactable(visual.0) {
            let wanted = materials.prop(prop.is_safe);
            if material.0 != wanted {
                material.0 = wanted;
            }
        }
    }
}
