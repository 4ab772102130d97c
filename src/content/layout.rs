//! Procedural hallway, doorways and side rooms.
//!
//! Turns a [`SceneDef`] into the flat list of entries the scene registry
//! consumes. The hallway is a square centered on the origin; the west and east
//! walls each carry a hinged door leading into a side room.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::math::Vec3A;
use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::data::{InitialSafety, SceneDef};
use crate::rooms::{Bed, Door, DoorZone, Interactable, SceneEntry, ZoneAxis};

fn cuboid(center: Vec3, size: Vec3) -> Aabb3d {
    Aabb3d::new(Vec3A::from(center), Vec3A::from(size * 0.5))
}

fn side_name(side: f32) -> &'static str {
    if side < 0.0 { "west" } else { "east" }
}

/// Build every scene entry in registration order: hallway, doorways, side
/// rooms, props, bed.
pub fn build_scene(
    scene: &SceneDef,
    safety: InitialSafety,
    rng: &mut ChaCha8Rng,
) -> Vec<SceneEntry> {
    let mut entries = Vec::new();
    let half = scene.hall_size * 0.5;
    let t = scene.wall_thickness;
    let h = scene.wall_height;

    let mut wall = |label: String, center: Vec3, size: Vec3| {
        entries.push(SceneEntry::Obstacle {
            label,
            bounds: cuboid(center, size),
        });
    };

    // Hallway north and south walls.
    for (label, z) in [("hall north wall", -half), ("hall south wall", half)] {
        wall(
            label.to_string(),
            Vec3::new(0.0, h * 0.5, z),
            Vec3::new(scene.hall_size, h, t),
        );
    }

    let door_w = scene.doorway.width;
    let door_h = scene.doorway.height;
    let segment_w = (scene.hall_size - door_w) * 0.5;
    let room = &scene.side_room;

    for side in [-1.0_f32, 1.0] {
        let name = side_name(side);
        let x = side * half;

        // Wall segments either side of the doorway, and the lintel above it.
        for (part, z_sign) in [("north", -1.0), ("south", 1.0)] {
            wall(
                format!("{} wall {} segment", name, part),
                Vec3::new(x, h * 0.5, z_sign * (door_w * 0.5 + segment_w * 0.5)),
                Vec3::new(t, h, segment_w),
            );
        }
        if h > door_h {
            wall(
                format!("{} lintel", name),
                Vec3::new(x, door_h + (h - door_h) * 0.5, 0.0),
                Vec3::new(t, h - door_h, door_w),
            );
        }

        // Side room: north/south walls and the outer wall.
        let room_x = side * (half + room.width * 0.5);
        for (part, z_sign) in [("north", -1.0), ("south", 1.0)] {
            wall(
                format!("{} room {} wall", name, part),
                Vec3::new(room_x, room.height * 0.5, z_sign * room.depth * 0.5),
                Vec3::new(room.width, room.height, t),
            );
        }
        wall(
            format!("{} room outer wall", name),
            Vec3::new(room_x + side * room.width * 0.5, room.height * 0.5, 0.0),
            Vec3::new(t, room.height, room.depth),
        );
    }

    // Doors go after the walls so wall indices stay stable across layouts.
    for side in [-1.0_f32, 1.0] {
        let x = side * half;
        // The west hinge sits on the south jamb and the leaf points north;
        // the east one mirrors it. Both swing a quarter turn into their room.
        let closed = if side < 0.0 { PI } else { 0.0 };
        entries.push(SceneEntry::Door(Door::new(
            format!("{} door", side_name(side)),
            Vec3::new(x, 0.0, -side * door_w * 0.5),
            Vec3::new(scene.doorway.leaf_thickness, door_h, door_w),
            closed,
            closed + FRAC_PI_2,
            DoorZone {
                axis: ZoneAxis::X,
                threshold: x,
                min: -door_w * 0.5,
                max: door_w * 0.5,
            },
        )));
    }

    for prop in &scene.props {
        let is_safe = match safety {
            InitialSafety::AllUnsafe => false,
            InitialSafety::Randomized => rng.random_bool(0.5),
        };
        let position = Vec3::from_array(prop.position);
        entries.push(SceneEntry::Interactable {
            prop: Interactable::new(prop.name.clone(), position, prop.interact_distance)
                .with_safe(is_safe),
            bounds: cuboid(position, Vec3::from_array(prop.size)),
        });
    }

    if let Some(bed) = &scene.bed {
        let position = Vec3::from_array(bed.position);
        entries.push(SceneEntry::Bed {
            bed: Bed { position },
            bounds: cuboid(position, Vec3::from_array(bed.size)),
        });
    }

    entries
}
