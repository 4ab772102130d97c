//! Core domain: per-frame view of everything the presentation layer reads.

use bevy::prelude::*;
use serde::Serialize;

use crate::animation::AnimationController;
use crate::core::outcome::Outcome;
use crate::rooms::SceneRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct DoorView {
    pub label: String,
    pub angle: f32,
    pub open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropView {
    pub name: String,
    pub is_safe: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub player_position: [f32; 3],
    pub player_yaw: f32,
    pub animation_state: &'static str,
    pub blend_weight: f32,
    pub doors: Vec<DoorView>,
    pub props: Vec<PropView>,
    pub outcome: Option<Outcome>,
}

impl FrameSnapshot {
    pub fn capture(
        registry: &SceneRegistry,
        player_position: Vec3,
        player_yaw: f32,
        controller: &AnimationController,
        outcome: Option<Outcome>,
    ) -> Self {
        Self {
            player_position: player_position.to_array(),
            player_yaw,
            animation_state: controller.state.name(),
            blend_weight: controller.blend_weight(),
            doors: registry
                .doors()
                .iter()
                .map(|door| DoorView {
                    label: door.label.clone(),
                    angle: door.angle(),
                    open: door.is_open(),
                })
                .collect(),
            props: registry
                .interactables()
                .iter()
                .map(|prop| PropView {
                    name: prop.name.clone(),
                    is_safe: prop.is_safe,
                })
                .collect(),
            outcome,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
