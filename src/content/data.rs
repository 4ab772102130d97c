use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub movement: MovementDefaults,
    pub animation: AnimationDefaults,
    pub interaction: InteractionDefaults,
    #[serde(default)]
    pub initial_safety: InitialSafety,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            movement: MovementDefaults::default(),
            animation: AnimationDefaults::default(),
            interaction: InteractionDefaults::default(),
            initial_safety: InitialSafety::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDefaults {
    pub speed: f32,
    pub max_frame_time: f32,
    pub world_limit: f32,
    pub body_size: [f32; 3],
}

impl Default for MovementDefaults {
    fn default() -> Self {
        Self {
            speed: 10.0,
            max_frame_time: 0.1,
            world_limit: 45.0,
            body_size: [1.0, 1.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationDefaults {
    /// Idle/Walk blend time.
    pub locomotion_fade: f32,
    /// Blend time into and out of one-shot actions.
    pub action_fade: f32,
    pub interact_duration: f32,
    pub rest_duration: f32,
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            locomotion_fade: 0.2,
            action_fade: 0.1,
            interact_duration: 1.2,
            rest_duration: 2.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InteractionDefaults {
    pub bed_radius: f32,
    /// Where the player is placed relative to the bed when resting.
    pub rest_offset: [f32; 3],
    /// Extra turn applied after facing the bed, in radians.
    pub rest_turn: f32,
}

impl Default for InteractionDefaults {
    fn default() -> Self {
        Self {
            bed_radius: 4.0,
            rest_offset: [-1.0, 0.0, 0.0],
            rest_turn: std::f32::consts::PI,
        }
    }
}

/// Safety state props start a session with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum InitialSafety {
    #[default]
    AllUnsafe,
    /// Fair coin per prop from the session's seeded RNG.
    Randomized,
}

// ============================================================================
// Scene definition (scene.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct SceneDef {
    pub hall_size: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub doorway: DoorwayDef,
    pub side_room: SideRoomDef,
    pub player_spawn: [f32; 3],
    #[serde(default)]
    pub props: Vec<PropDef>,
    #[serde(default)]
    pub bed: Option<BedDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorwayDef {
    pub width: f32,
    pub height: f32,
    pub leaf_thickness: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SideRoomDef {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropDef {
    pub name: String,
    /// Center of the prop's box.
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub interact_distance: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BedDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
}

impl Default for SceneDef {
    fn default() -> Self {
        let prop = |name: &str, position: [f32; 3], size: [f32; 3], interact_distance: f32| {
            PropDef {
                name: name.to_string(),
                position,
                size,
                interact_distance,
            }
        };

        Self {
            hall_size: 30.0,
            wall_height: 10.0,
            wall_thickness: 0.2,
            doorway: DoorwayDef {
                width: 4.0,
                height: 6.0,
                leaf_thickness: 0.2,
            },
            side_room: SideRoomDef {
                width: 15.0,
                depth: 15.0,
                height: 6.0,
            },
            player_spawn: [0.0, 0.5, 0.0],
            props: vec![
                prop("Extinguisher", [14.4, 0.6, -4.0], [0.5, 1.2, 0.5], 2.5),
                prop("Switch", [8.0, 4.0, -14.8], [0.6, 0.6, 0.2], 4.0),
                prop("Window", [-8.0, 2.0, -14.8], [2.0, 1.5, 0.2], 2.5),
                prop("Radiator", [-12.0, 0.6, -14.5], [1.5, 1.2, 0.4], 2.5),
                prop("Back door", [-1.0, 1.5, -14.8], [1.6, 3.0, 0.2], 3.0),
                prop("Table", [-1.0, 0.5, -10.0], [2.0, 1.0, 1.2], 4.0),
            ],
            bed: Some(BedDef {
                position: [25.5, 0.5, 0.2],
                size: [2.2, 1.0, 3.2],
            }),
        }
    }
}
