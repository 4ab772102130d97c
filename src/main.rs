mod animation;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod rooms;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Safehouse".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        rooms::RoomsPlugin,
        movement::MovementPlugin,
        animation::AnimationPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
