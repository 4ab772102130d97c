//! UI domain: in-session HUD.

mod hud_props;
mod hud_status;


pub use hud_props::{PropListUI, PropRow, PropRows, PropSwatch};
pub use hud_status::StatusLineUI;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::ui::hud_props::{spawn_prop_list_ui, update_prop_list};
use crate::ui::hud_status::{spawn_status_line_ui, update_status_line};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_prop_list_ui, spawn_status_line_ui))
            .add_systems(
                Update,
                (update_prop_list, update_status_line).in_set(SimulationSet::Presentation),
            );
    }
}
