//! Movement domain: player bootstrap from the loaded scene.

use bevy::prelude::*;

use crate::animation::AnimationController;
use crate::content::SceneDef;
use crate::movement::{MovementState, Player};
use crate::rooms::{SceneEntity, SceneMaterials};

const PLAYER_RADIUS: f32 = 0.35;
const PLAYER_HEIGHT: f32 = 1.0;

/// Spawn the single player for this session at the scene's spawn point.
/// Runs on entering `GameState::Loading`, after content has been loaded.
pub(crate) fn spawn_player(
    mut commands: Commands,
    scene: Res<SceneDef>,
    materials: Res<SceneMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn = Vec3::from_array(scene.player_spawn);
    info!("Spawning player at {}", spawn);

    commands
        .spawn((
            Player,
            SceneEntity,
            MovementState::at(spawn),
            AnimationController::default(),
            Transform::from_translation(spawn),
            Visibility::default(),
        ))
        .with_child((
            Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HEIGHT - 2.0 * PLAYER_RADIUS))),
            MeshMaterial3d(materials.player.clone()),
            Transform::from_xyz(0.0, 0.0, 0.0),
        ))
        // Small marker on +Z so the heading is visible from above.
        .with_child((
            Mesh3d(meshes.add(Cuboid::new(0.15, 0.15, 0.3))),
            MeshMaterial3d(materials.player.clone()),
            Transform::from_xyz(0.0, 0.2, PLAYER_RADIUS + 0.1),
        ));
}
