//! Core domain: session flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::animation::{AnimationFinished, AnimationState};
use crate::core::events::{OutcomeDecidedEvent, RestartRequestedEvent};
use crate::core::outcome::evaluate_outcome;
use crate::core::resources::{RunConfig, SessionOutcome};
use crate::core::state::GameState;
use crate::movement::MovementInput;
use crate::rooms::{SceneEntity, SceneRegistry};

pub(crate) fn transition_to_loading(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Loading);
}

/// Tear down the previous session, if any. A restart is a full reset: nothing
/// carries over except the camera and lights.
pub(crate) fn reset_session(
    mut commands: Commands,
    mut registry: ResMut<SceneRegistry>,
    mut session_outcome: ResMut<SessionOutcome>,
    mut input: ResMut<MovementInput>,
    scene_entities: Query<Entity, With<SceneEntity>>,
) {
    let despawned = scene_entities.iter().count();
    for entity in &scene_entities {
        commands.entity(entity).despawn();
    }
    registry.clear();
    session_outcome.reset();
    *input = MovementInput::default();

    if despawned > 0 {
        info!("Session reset, despawned {} entities", despawned);
    }
}

/// Evaluate the win condition when the rest action finishes.
pub(crate) fn evaluate_rest_outcome(
    mut finished: MessageReader<AnimationFinished>,
    registry: Res<SceneRegistry>,
    mut session_outcome: ResMut<SessionOutcome>,
    mut decided: MessageWriter<OutcomeDecidedEvent>,
) {
    for event in finished.read() {
        if event.state != AnimationState::Rest {
            continue;
        }

        let outcome = evaluate_outcome(registry.interactables());
        let unsafe_remaining = registry.unsafe_count();
        if session_outcome.decide(outcome, unsafe_remaining) {
            decided.write(OutcomeDecidedEvent {
                outcome,
                unsafe_remaining,
            });
        }
    }
}

pub(crate) fn handle_outcome_decided(
    mut events: MessageReader<OutcomeDecidedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        info!(
            "Rest finished: {:?} ({} prop(s) left unsafe)",
            event.outcome, event.unsafe_remaining
        );
        game_state.set(GameState::Outcome);
    }
}

pub(crate) fn handle_restart(
    mut events: MessageReader<RestartRequestedEvent>,
    mut run_config: ResMut<RunConfig>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().count() == 0 {
        return;
    }

    run_config.seed = rand::rng().random();
    info!("Restarting with seed: {}", run_config.seed);
    game_state.set(GameState::Loading);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 30.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
