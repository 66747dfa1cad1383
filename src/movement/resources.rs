//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Serializable Vec2 for RON tuning values.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Per-character movement constants. Loaded from `assets/data/movement.ron`
/// at startup and immutable during play.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    /// Horizontal speed gained per physics step while input is held.
    pub acceleration: f32,
    /// Horizontal speed shed per physics step with no input.
    pub deceleration: f32,
    pub ground_friction: f32,
    pub air_friction: f32,
    pub air_control: f32,
    pub jump_velocity: f32,
    /// Total jump budget (1 = single jump, 2 = double jump, etc.)
    pub max_jumps: u32,
    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    /// Extra velocity granted once at the top of a jump arc.
    /// The x component is signed by the current horizontal velocity.
    pub apex_speed_bonus: Vec2Def,
    /// Fastest allowed fall speed, as a positive magnitude.
    pub terminal_velocity: f32,
    pub gravity_scale: f32,
    pub gravity_scale_on_fall: f32,
    pub gravity_scale_on_jump_cut: f32,
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 200.0,
            acceleration: 100.0,
            deceleration: 100.0,
            ground_friction: 0.75,
            air_friction: 0.95,
            air_control: 0.75,
            jump_velocity: 400.0,
            max_jumps: 1,
            jump_buffer_time: 0.15,
            coyote_time: 0.05,
            apex_speed_bonus: Vec2Def::default(),
            terminal_velocity: 400.0,
            gravity_scale: 1.0,
            gravity_scale_on_fall: 2.0,
            gravity_scale_on_jump_cut: 4.0,
            gravity: 980.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub jump_just_released: bool,
}
