//! Movement domain: player state, contact signals, and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// The ground trigger sensor under the player's feet
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Which gravity multiplier is currently in effect. Rising jumps use
/// `Base`, the post-apex descent uses `Fall`, and an early button release
/// before the apex switches to the heavier `JumpCut`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityPhase {
    #[default]
    Base,
    Fall,
    JumpCut,
}

impl GravityPhase {
    pub fn scale(self, tuning: &MovementTuning) -> f32 {
        match self {
            GravityPhase::Base => tuning.gravity_scale,
            GravityPhase::Fall => tuning.gravity_scale_on_fall,
            GravityPhase::JumpCut => tuning.gravity_scale_on_jump_cut,
        }
    }
}

/// Overlap-counting trigger volume under the player's feet. Lives on a
/// child entity with a `Sensor` collider; `player` is the entity whose
/// `MovementState` the tracked transitions are applied to.
#[derive(Component, Debug)]
pub struct GroundSensor {
    pub player: Entity,
    pub overlaps: u32,
}

impl GroundSensor {
    pub fn new(player: Entity) -> Self {
        Self {
            player,
            overlaps: 0,
        }
    }
}

/// Ray-cast floor/wall contact. This is a separate signal from the
/// sensor-driven `MovementState::on_ground` and only feeds animation
/// selection; the two may briefly disagree around takeoff and landing.
#[derive(Component, Debug, Default)]
pub struct SurfaceContact {
    pub on_floor: bool,
    pub on_wall: bool,
}

/// Per-player jump and ground state. `on_ground` is driven by the ground
/// sensor while `in_air` flips true at jump execution, before the sensor
/// reports the exit; `can_jump` and the coyote gravity freeze rely on
/// that window where the two disagree.
#[derive(Component, Debug)]
pub struct MovementState {
    pub on_ground: bool,
    pub in_air: bool,
    /// True from jump execution until landing; gates apex detection.
    pub jumping: bool,
    pub apex_reached: bool,
    pub jumps_remaining: u32,
    /// Seconds of grace left for a late jump after leaving the ground.
    /// Drains on the logic tick while vertical velocity points down.
    pub coyote_time_remaining: f32,
    /// Seconds left before a buffered jump press goes stale. Counts down
    /// regardless of ground state once armed.
    pub jump_buffer_time_remaining: f32,
    pub gravity_phase: GravityPhase,
    pub jump_requested: bool,
    pub jump_held: bool,
    pub jump_released: bool,
    pub facing: Facing,
}

impl MovementState {
    /// State for a character standing on the ground at spawn.
    pub fn grounded(tuning: &MovementTuning) -> Self {
        Self {
            on_ground: true,
            in_air: false,
            jumping: false,
            apex_reached: false,
            jumps_remaining: tuning.max_jumps,
            coyote_time_remaining: tuning.coyote_time,
            jump_buffer_time_remaining: 0.0,
            gravity_phase: GravityPhase::Base,
            jump_requested: false,
            jump_held: false,
            jump_released: false,
            facing: Facing::Right,
        }
    }

    /// Register a jump press edge. A press that arrives while a previous
    /// request is still pending is ignored; otherwise the request is
    /// latched and the buffer window armed.
    pub fn buffer_jump(&mut self, tuning: &MovementTuning) {
        if self.jump_requested {
            return;
        }
        self.jump_requested = true;
        self.jump_held = true;
        self.jump_released = false;
        self.jump_buffer_time_remaining = tuning.jump_buffer_time;
    }

    /// Register a jump release edge.
    pub fn release_jump(&mut self) {
        self.jump_held = false;
        self.jump_released = true;
    }

    /// Whether a requested jump may execute right now. Requires grace
    /// time and budget, and either a clean grounded state or a clean
    /// airborne-from-jump state; the mixed states during takeoff are
    /// excluded so a ground jump cannot double-fire.
    pub fn can_jump(&self) -> bool {
        self.coyote_time_remaining > 0.0
            && self.jumps_remaining > 0
            && ((!self.in_air && self.on_ground) || (self.in_air && !self.on_ground))
    }

    /// Ground sensor transition: feet overlap went zero to nonzero.
    pub fn land(&mut self, tuning: &MovementTuning) {
        self.gravity_phase = GravityPhase::Base;
        self.apex_reached = false;
        self.in_air = false;
        self.jumping = false;
        self.on_ground = true;
        self.jumps_remaining = tuning.max_jumps;
        self.coyote_time_remaining = tuning.coyote_time;

        // Bunny hop: a buffered press with the button still held fires
        // again on the next jump-handling pass.
        if self.jump_buffer_time_remaining > 0.0 && self.jump_held {
            self.jump_requested = true;
        }

        self.jump_buffer_time_remaining = 0.0;
    }

    /// Ground sensor transition: feet overlap went nonzero to zero.
    pub fn leave_ground(&mut self, tuning: &MovementTuning) {
        self.in_air = true;
        self.on_ground = false;

        // Walking off a ledge with the coyote window already drained
        // consumes the first jump slot instead of granting a free air jump.
        if self.jumps_remaining == tuning.max_jumps
            && self.jumps_remaining > 0
            && self.coyote_time_remaining <= 0.0
        {
            self.jumps_remaining -= 1;
        }
    }
}
