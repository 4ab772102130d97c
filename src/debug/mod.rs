//! Dev tooling, compiled in with the `dev-tools` feature.
//!
//! - F1: position/state overlay
//! - F3: obstacle boxes and prop reach spheres as gizmos
//! - F9: log the current frame snapshot as JSON

mod state;
mod systems;

pub use state::DebugState;
pub use systems::DebugInfoOverlay;

use bevy::prelude::*;

use crate::debug::systems::{draw_obstacle_gizmos, handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_debug_info_overlay).chain())
            .add_systems(
                Update,
                draw_obstacle_gizmos.run_if(|state: Res<DebugState>| state.show_obstacles),
            );
    }
}
