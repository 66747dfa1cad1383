//! Movement domain: the jump state machine and velocity integration.
//!
//! The pure `*_step` helpers hold the per-tick rules; the systems below
//! are thin wrappers that run them against the ECS. Fixed-step order is
//! gravity, then horizontal movement, then jump handling, after which the
//! physics engine moves the body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Facing, GravityPhase, MovementInput, MovementState, MovementTuning, Player,
};

/// Below this horizontal speed the character is treated as standing:
/// deceleration snaps velocity to exactly zero, and the run animation
/// cuts off.
pub(crate) const SPEED_SNAP_THRESHOLD: f32 = 25.0;

/// Discrete sign in {-1, 0, 1}. Unlike `f32::signum`, zero maps to zero,
/// which makes deceleration a no-op on a standing character and withholds
/// the horizontal apex bonus when there is no horizontal motion.
pub(crate) fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Gravity accumulation with phase scaling, the coyote ledge hang, and
/// the terminal velocity clamp.
pub(crate) fn gravity_step(
    velocity: &mut Vec2,
    state: &MovementState,
    tuning: &MovementTuning,
    dt: f32,
) {
    if !state.on_ground {
        // The ledge-hang check reads the velocity from before this
        // step's accumulation. A walk-off fall therefore alternates
        // between one accumulated step and one frozen step, which keeps
        // the descent slow while still letting the coyote timer drain.
        let was_falling = velocity.y < 0.0;

        velocity.y -= tuning.gravity * state.gravity_phase.scale(tuning) * dt;

        if state.in_air && !state.jumping && was_falling && state.coyote_time_remaining > 0.0 {
            velocity.y = 0.0;
        }
    }

    velocity.y = velocity.y.max(-tuning.terminal_velocity);
}

/// Horizontal acceleration, deceleration, and the max-speed clamp.
/// Acceleration terms are per-step quantities scaled by the active
/// friction, not by elapsed time.
pub(crate) fn horizontal_step(
    velocity: &mut Vec2,
    state: &mut MovementState,
    axis_x: f32,
    tuning: &MovementTuning,
) {
    let friction = if state.on_ground {
        tuning.ground_friction
    } else {
        tuning.air_friction * tuning.air_control
    };

    if axis_x == 0.0 {
        velocity.x -= sign(velocity.x) * tuning.deceleration * friction;

        if velocity.x.abs() <= SPEED_SNAP_THRESHOLD {
            velocity.x = 0.0;
        }
    } else {
        velocity.x += axis_x * tuning.acceleration * friction;

        if velocity.x.abs() >= tuning.max_speed {
            velocity.x = sign(axis_x) * tuning.max_speed;
        }

        state.facing = if axis_x < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        };
    }
}

/// One pass of the jump state machine: apex detection, then execution of
/// a pending request, then the jump-cut gravity switch.
pub(crate) fn jump_step(velocity: &mut Vec2, state: &mut MovementState, tuning: &MovementTuning) {
    // Apex: the rise has ended and the fall phase takes over, with the
    // one-shot speed bonus. Checked before execution so a fresh jump's
    // upward velocity cannot be mistaken for its own apex.
    if state.in_air && state.jumping && !state.apex_reached && sign(velocity.y) != 1.0 {
        state.apex_reached = true;
        state.gravity_phase = GravityPhase::Fall;
        velocity.x += sign(velocity.x) * tuning.apex_speed_bonus.x;
        velocity.y += tuning.apex_speed_bonus.y;
        debug!("Apex reached: velocity=({:.1}, {:.1})", velocity.x, velocity.y);
    }

    if state.jump_requested {
        state.jump_requested = false;

        if state.can_jump() {
            state.jumps_remaining -= 1;
            state.in_air = true;
            state.jumping = true;
            state.apex_reached = false;
            state.gravity_phase = GravityPhase::Base;
            velocity.y = tuning.jump_velocity;
            debug!("Jump executed: jumps_remaining={}", state.jumps_remaining);
        }
    }

    // Releasing the button before the apex switches to the heavier
    // jump-cut gravity for a shorter arc.
    if !state.apex_reached && !state.on_ground && state.jump_released {
        state.gravity_phase = GravityPhase::JumpCut;
    }
}

/// Logic-tick timer decay. Coyote time drains only while vertical
/// velocity points down; the jump buffer drains whenever armed.
pub(crate) fn tick_timers(state: &mut MovementState, vertical_velocity: f32, dt: f32) {
    if vertical_velocity < 0.0 {
        state.coyote_time_remaining = (state.coyote_time_remaining - dt).max(0.0);
    }

    if state.jump_buffer_time_remaining > 0.0 {
        state.jump_buffer_time_remaining = (state.jump_buffer_time_remaining - dt).max(0.0);
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        gravity_step(&mut velocity.0, state, &tuning, dt);
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        horizontal_step(&mut velocity.0, &mut state, input.axis.x, &tuning);
    }
}

pub(crate) fn handle_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        jump_step(&mut velocity.0, &mut state, &tuning);
    }
}

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, velocity) in &mut query {
        tick_timers(&mut state, velocity.y, dt);
    }
}
