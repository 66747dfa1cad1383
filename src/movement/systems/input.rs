//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis from opposing digital inputs
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = Vec2::new(x, 0.0);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
}

/// Apply the sampled jump edges to the player's input latches. A press
/// arms the buffer window; a release is remembered for the jump-cut check.
pub(crate) fn latch_jump_input(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        if input.jump_just_pressed {
            state.buffer_jump(&tuning);
        } else if input.jump_just_released {
            state.release_jump();
        }
    }
}
