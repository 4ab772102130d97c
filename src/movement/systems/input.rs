//! Movement domain: input sampling for locomotion and triggers.

use bevy::prelude::*;

use crate::movement::{MoveFlags, MovementInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.flags = MoveFlags {
        forward: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
        backward: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
    };

    // Triggers fire once per press, never on key repeat.
    input.interact_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
    input.rest_just_pressed = keyboard.just_pressed(KeyCode::KeyF);
}
