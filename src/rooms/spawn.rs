//! Rooms domain: meshes for registered scene content.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;

use crate::content::SceneDef;
use crate::rooms::components::{
    BedVisual, DoorHinge, ObstacleVisual, PropVisual, SceneEntity, SceneMaterials,
};
use crate::rooms::doors::{Door, DoorId};
use crate::rooms::props::InteractableId;

pub(crate) fn setup_scene_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut solid = |color: Color| {
        materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        })
    };

    commands.insert_resource(SceneMaterials {
        wall: solid(Color::srgb(0.27, 0.27, 0.33)),
        floor: solid(Color::srgb(0.53, 0.53, 0.53)),
        door: solid(Color::srgb(0.33, 0.2, 0.07)),
        bed: solid(Color::srgb(0.53, 0.27, 0.13)),
        prop_safe: solid(Color::srgb(0.27, 1.0, 0.27)),
        prop_unsafe: solid(Color::srgb(1.0, 0.27, 0.27)),
        player: solid(Color::srgb(0.85, 0.85, 0.9)),
    });
}

/// Floors for the hallway and both side rooms. Floors are never obstacles.
pub(crate) fn spawn_floors(
    mut commands: Commands,
    scene: Res<SceneDef>,
    materials: Res<SceneMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let half = scene.hall_size * 0.5;
    let room = &scene.side_room;

    let mut floor = |center: Vec3, width: f32, depth: f32| {
        commands.spawn((
            SceneEntity,
            Mesh3d(meshes.add(Plane3d::default().mesh().size(width, depth))),
            MeshMaterial3d(materials.floor.clone()),
            Transform::from_translation(center),
        ));
    };

    floor(Vec3::ZERO, scene.hall_size, scene.hall_size);
    for side in [-1.0, 1.0] {
        floor(
            Vec3::new(side * (half + room.width * 0.5), 0.0, 0.0),
            room.width,
            room.depth,
        );
    }
}

fn box_center_and_size(bounds: &Aabb3d) -> (Vec3, Vec3) {
    let min = Vec3::from(bounds.min);
    let max = Vec3::from(bounds.max);
    ((min + max) * 0.5, max - min)
}

pub(crate) fn spawn_obstacle_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &SceneMaterials,
    bounds: &Aabb3d,
) {
    let (center, size) = box_center_and_size(bounds);
    commands.spawn((
        SceneEntity,
        ObstacleVisual,
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.wall.clone()),
        Transform::from_translation(center),
    ));
}

/// Spawn a pivot at the hinge with the leaf as its child, so rotating the
/// pivot swings the leaf.
pub(crate) fn spawn_door_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &SceneMaterials,
    id: DoorId,
    door: &Door,
) {
    let leaf = door.leaf_size;
    commands
        .spawn((
            SceneEntity,
            DoorHinge(id),
            Transform::from_translation(door.hinge)
                .with_rotation(Quat::from_rotation_y(door.angle())),
            Visibility::default(),
        ))
        .with_child((
            Mesh3d(meshes.add(Cuboid::from_size(leaf))),
            MeshMaterial3d(materials.door.clone()),
            Transform::from_xyz(0.0, leaf.y * 0.5, leaf.z * 0.5),
        ));
}

pub(crate) fn spawn_prop_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &SceneMaterials,
    id: InteractableId,
    is_safe: bool,
    bounds: &Aabb3d,
) {
    let (center, size) = box_center_and_size(bounds);
    commands.spawn((
        SceneEntity,
        PropVisual(id),
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.prop(is_safe)),
        Transform::from_translation(center),
    ));
}

pub(crate) fn spawn_bed_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &SceneMaterials,
    bounds: &Aabb3d,
) {
    let (center, size) = box_center_and_size(bounds);
    commands.spawn((
        SceneEntity,
        BedVisual,
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.bed.clone()),
        Transform::from_translation(center),
    ));
}
