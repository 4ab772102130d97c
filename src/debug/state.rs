//! Debug domain: toggles for the dev overlays.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw every obstacle box as a wireframe
    pub show_obstacles: bool,
    /// Show the position/state overlay
    pub show_info: bool,
}
