//! Core domain: unit tests for the outcome rule and session results.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::systems::evaluate_rest_outcome;
use super::{FrameSnapshot, Outcome, OutcomeDecidedEvent, SessionOutcome, evaluate_outcome};
use crate::animation::{
    AnimationController, AnimationFinished, AnimationState, AnimationTrigger, AnimationTuning,
};
use crate::rooms::{Interactable, SceneRegistry};

fn prop(name: &str, is_safe: bool) -> Interactable {
    Interactable::new(name, Vec3::ZERO, 2.5).with_safe(is_safe)
}

#[test]
fn test_all_safe_wins() {
    let props = vec![prop("Window", true), prop("Switch", true)];
    assert_eq!(evaluate_outcome(&props), Outcome::Win);
}

#[test]
fn test_one_unsafe_loses_until_secured() {
    let mut props = vec![
        prop("Window", true),
        prop("Switch", true),
        prop("Radiator", false),
    ];
    assert_eq!(evaluate_outcome(&props), Outcome::Lose);

    props[2].toggle_safe();
    assert_eq!(evaluate_outcome(&props), Outcome::Win);
}

#[test]
fn test_no_props_counts_as_win() {
    assert!(evaluate_outcome(&[]).is_win());
}

#[test]
fn test_toggling_twice_restores_outcome() {
    let mut props = vec![prop("Window", true), prop("Table", true)];
    assert_eq!(evaluate_outcome(&props), Outcome::Win);

    props[1].toggle_safe();
    assert_eq!(evaluate_outcome(&props), Outcome::Lose);

    props[1].toggle_safe();
    assert_eq!(evaluate_outcome(&props), Outcome::Win);
}

#[test]
fn test_session_outcome_decides_once() {
    let mut session = SessionOutcome::default();
    assert!(session.outcome.is_none());

    assert!(session.decide(Outcome::Lose, 2));
    assert!(!session.decide(Outcome::Win, 0));
    assert_eq!(session.outcome, Some(Outcome::Lose));
    assert_eq!(session.unsafe_remaining, 2);

    session.reset();
    assert!(session.outcome.is_none());
    assert_eq!(session.unsafe_remaining, 0);
    assert!(session.decide(Outcome::Win, 0));
}

#[test]
fn test_snapshot_reflects_registry_and_controller() {
    let mut registry = SceneRegistry::default();
    registry.register_interactable(
        prop("Window", false),
        bevy::math::bounding::Aabb3d::new(Vec3::ZERO, Vec3::splat(0.5)),
    );

    let mut controller = AnimationController::default();
    controller.transition(
        AnimationTrigger::Locomotion { moving: true },
        &AnimationTuning::default(),
    );

    let snapshot = FrameSnapshot::capture(
        &registry,
        Vec3::new(1.0, 0.5, -2.0),
        0.25,
        &controller,
        None,
    );
    assert_eq!(snapshot.player_position, [1.0, 0.5, -2.0]);
    assert_eq!(snapshot.animation_state, "walk");
    assert_eq!(snapshot.props.len(), 1);
    assert!(!snapshot.props[0].is_safe);
    assert!(snapshot.doors.is_empty());
    assert!(snapshot.blend_weight < 1.0);

    let json = snapshot.to_json().expect("snapshot serializes");
    assert!(json.contains("\"Window\""));
}

#[derive(Resource, Default)]
struct DecidedOutcomes(Vec<(Outcome, usize)>);

fn collect_decided(
    mut events: MessageReader<OutcomeDecidedEvent>,
    mut decided: ResMut<DecidedOutcomes>,
) {
    decided
        .0
        .extend(events.read().map(|event| (event.outcome, event.unsafe_remaining)));
}

fn rest_outcome_app(registry: SceneRegistry) -> App {
    let mut app = App::new();
    app.insert_resource(registry)
        .init_resource::<SessionOutcome>()
        .init_resource::<DecidedOutcomes>()
        .add_message::<AnimationFinished>()
        .add_message::<OutcomeDecidedEvent>()
        .add_systems(Update, (evaluate_rest_outcome, collect_decided).chain());
    app
}

#[test]
fn test_rest_completion_decides_exactly_once() {
    let mut registry = SceneRegistry::default();
    registry.register_interactable(
        prop("Radiator", false),
        bevy::math::bounding::Aabb3d::new(Vec3::ZERO, Vec3::splat(0.5)),
    );
    let mut app = rest_outcome_app(registry);
    let player = app.world_mut().spawn_empty().id();

    // Interact completions never decide anything.
    app.world_mut().write_message(AnimationFinished {
        entity: player,
        state: AnimationState::Interact,
    });
    app.update();
    assert!(app.world().resource::<DecidedOutcomes>().0.is_empty());
    assert!(app.world().resource::<SessionOutcome>().outcome.is_none());

    for _ in 0..2 {
        app.world_mut().write_message(AnimationFinished {
            entity: player,
            state: AnimationState::Rest,
        });
    }
    app.update();

    // A later duplicate is ignored as well.
    app.world_mut().write_message(AnimationFinished {
        entity: player,
        state: AnimationState::Rest,
    });
    app.update();

    assert_eq!(
        app.world().resource::<DecidedOutcomes>().0,
        vec![(Outcome::Lose, 1)]
    );
    assert_eq!(
        app.world().resource::<SessionOutcome>().outcome,
        Some(Outcome::Lose)
    );
}

#[test]
fn test_rest_with_everything_safe_decides_win() {
    let mut registry = SceneRegistry::default();
    registry.register_interactable(
        prop("Window", true),
        bevy::math::bounding::Aabb3d::new(Vec3::ZERO, Vec3::splat(0.5)),
    );
    let mut app = rest_outcome_app(registry);
    let player = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(AnimationFinished {
        entity: player,
        state: AnimationState::Rest,
    });
    app.update();

    assert_eq!(
        app.world().resource::<DecidedOutcomes>().0,
        vec![(Outcome::Win, 0)]
    );
}
