//! Sprites domain: tests for animation selection and playback.

use bevy::prelude::Vec2;

use super::animation::select_animation;
use super::{AnimationController, AnimationDef, AnimationManifest, AnimationState};
use crate::movement::{MovementState, MovementTuning, SurfaceContact};

fn grounded_state() -> MovementState {
    MovementState::grounded(&MovementTuning::default())
}

fn airborne_state() -> MovementState {
    let mut state = grounded_state();
    state.on_ground = false;
    state.in_air = true;
    state
}

// -----------------------------------------------------------------------------
// Selection rules
// -----------------------------------------------------------------------------

#[test]
fn test_run_requires_speed_and_floor() {
    let surface = SurfaceContact {
        on_floor: true,
        on_wall: false,
    };

    assert_eq!(
        select_animation(Vec2::new(100.0, 0.0), &grounded_state(), &surface),
        Some(AnimationState::Run)
    );

    // At or below the snap threshold the character idles instead
    assert_eq!(
        select_animation(Vec2::new(25.0, 0.0), &grounded_state(), &surface),
        Some(AnimationState::Idle)
    );
}

#[test]
fn test_run_suppressed_against_wall() {
    let surface = SurfaceContact {
        on_floor: true,
        on_wall: true,
    };

    assert_eq!(
        select_animation(Vec2::new(100.0, 0.0), &grounded_state(), &surface),
        Some(AnimationState::Idle)
    );
}

#[test]
fn test_rising_airborne_is_jump() {
    let surface = SurfaceContact::default();

    assert_eq!(
        select_animation(Vec2::new(0.0, 150.0), &airborne_state(), &surface),
        Some(AnimationState::Jump)
    );
}

#[test]
fn test_fall_keys_on_horizontal_component() {
    let surface = SurfaceContact::default();

    // Falling while drifting right shows the fall animation
    assert_eq!(
        select_animation(Vec2::new(50.0, -100.0), &airborne_state(), &surface),
        Some(AnimationState::Fall)
    );

    // Falling straight down matches no rule; playback keeps the last label
    assert_eq!(
        select_animation(Vec2::new(0.0, -100.0), &airborne_state(), &surface),
        None
    );
}

#[test]
fn test_grounded_fallback_is_idle() {
    let surface = SurfaceContact::default();

    assert_eq!(
        select_animation(Vec2::ZERO, &grounded_state(), &surface),
        Some(AnimationState::Idle)
    );
}

#[test]
fn test_run_rule_wins_over_jump_rule() {
    // Sensor still reports airborne but the ray probe already sees the
    // floor; the run rule is checked first.
    let surface = SurfaceContact {
        on_floor: true,
        on_wall: false,
    };

    assert_eq!(
        select_animation(Vec2::new(120.0, 80.0), &airborne_state(), &surface),
        Some(AnimationState::Run)
    );
}

// -----------------------------------------------------------------------------
// Controller playback
// -----------------------------------------------------------------------------

#[test]
fn test_set_state_restarts_playback() {
    let mut controller = AnimationController::default();
    controller.current_frame = 3;
    controller.frame_timer = 0.1;

    controller.set_state(
        AnimationState::Run,
        AnimationState::Run.default_def(),
    );

    assert_eq!(controller.state, AnimationState::Run);
    assert_eq!(controller.previous_state, AnimationState::Idle);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert_eq!(controller.total_frames, 6);
}

#[test]
fn test_set_state_same_label_keeps_frame() {
    let mut controller = AnimationController::default();
    controller.current_frame = 2;

    controller.set_state(
        AnimationState::Idle,
        AnimationState::Idle.default_def(),
    );

    assert_eq!(controller.current_frame, 2);
}

#[test]
fn test_manifest_falls_back_to_built_in_frame_data() {
    let manifest = AnimationManifest::default();
    let def = manifest.def(AnimationState::Run);

    assert_eq!(def.frames, 6);
    assert!(def.frame_duration > 0.0);
}

#[test]
fn test_manifest_entry_overrides_built_in() {
    let mut manifest = AnimationManifest::default();
    manifest.animations.insert(
        "run".to_string(),
        AnimationDef {
            frames: 8,
            frame_duration: 0.1,
        },
    );

    let def = manifest.def(AnimationState::Run);
    assert_eq!(def.frames, 8);
    assert_eq!(def.frame_duration, 0.1);
}
