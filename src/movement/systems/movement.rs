//! Movement domain: locomotion systems for position and facing.

use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationState};
use crate::movement::controller::{facing_from_delta, step};
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};
use crate::rooms::SceneRegistry;

pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    registry: Res<SceneRegistry>,
    mut query: Query<(&mut Transform, &mut MovementState), With<Player>>,
) {
    if !input.flags.any() {
        return;
    }

    let obstacles: Vec<_> = registry.active_obstacles().collect();

    for (mut transform, mut state) in &mut query {
        let resolution = step(
            transform.translation,
            input.flags,
            time.delta_secs(),
            &tuning,
            obstacles.iter().map(|(_, bounds)| *bounds),
        );

        let blocker = resolution
            .blocked_by
            .and_then(|index| obstacles.get(index))
            .map(|(obstacle, _)| obstacle.label.clone());
        if blocker.is_some() && blocker != state.blocked_by {
            debug!("Movement blocked by {:?}", blocker);
        }
        state.blocked_by = blocker;

        transform.translation = resolution.accepted;
    }
}

/// Face the direction actually travelled this frame, while walking.
pub(crate) fn update_facing(
    mut query: Query<(&mut Transform, &mut MovementState, &AnimationController), With<Player>>,
) {
    for (mut transform, mut state, controller) in &mut query {
        if controller.state == AnimationState::Walk {
            if let Some(yaw) = facing_from_delta(state.last_position, transform.translation) {
                state.yaw = yaw;
                transform.rotation = Quat::from_rotation_y(yaw);
            }
        }
        state.last_position = transform.translation;
    }
}
