//! Debug domain: hotkeys, obstacle gizmos, info overlay and snapshot dumps.

use bevy::prelude::*;

use crate::animation::AnimationController;
use crate::core::{FrameSnapshot, RunConfig, SessionOutcome};
use crate::debug::state::DebugState;
use crate::movement::{MovementState, Player};
use crate::rooms::SceneRegistry;

/// Marker for the debug info overlay
#[derive(Component)]
pub struct DebugInfoOverlay;

/// F1 toggles the info overlay, F3 the obstacle wireframes, F9 logs a snapshot.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    registry: Res<SceneRegistry>,
    session_outcome: Res<SessionOutcome>,
    player_query: Query<(&Transform, &MovementState, &AnimationController), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay: {}", debug_state.show_info);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_obstacles = !debug_state.show_obstacles;
        info!("[DEBUG] Obstacle boxes: {}", debug_state.show_obstacles);
    }

    if keyboard.just_pressed(KeyCode::F9) {
        let Ok((transform, state, controller)) = player_query.single() else {
            warn!("[DEBUG] No player to snapshot");
            return;
        };
        let snapshot = FrameSnapshot::capture(
            &registry,
            transform.translation,
            state.yaw,
            controller,
            session_outcome.outcome,
        );
        match snapshot.to_json() {
            Ok(json) => info!("[DEBUG] Frame snapshot:\n{}", json),
            Err(err) => error!("[DEBUG] Failed to serialize snapshot: {}", err),
        }
    }
}

pub(crate) fn draw_obstacle_gizmos(registry: Res<SceneRegistry>, mut gizmos: Gizmos) {
    for obstacle in registry.obstacles() {
        let Some(bounds) = registry.obstacle_box(obstacle) else {
            continue;
        };
        let min = Vec3::from(bounds.min);
        let max = Vec3::from(bounds.max);
        gizmos.cube(
            Transform::from_translation((min + max) * 0.5).with_scale(max - min),
            Color::srgb(1.0, 0.8, 0.1),
        );
    }

    for prop in registry.interactables() {
        gizmos.sphere(
            Isometry3d::from_translation(prop.position),
            prop.interact_distance,
            Color::srgba(0.3, 0.6, 1.0, 0.4),
        );
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    player_query: Query<(&Transform, &MovementState, &AnimationController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((transform, state, controller)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.1}, {:.1}, {:.1})\nYaw: {:.2}\nAnim: {}\nBlocked by: {}\nSeed: {}",
            pos.x,
            pos.y,
            pos.z,
            state.yaw,
            controller.state.name(),
            state.blocked_by.as_deref().unwrap_or("-"),
            run_config.seed,
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(60.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
