//! Animation selection and playback.
//!
//! `select_animation` is a pure mapping from movement observations to a
//! label; it never feeds back into the state machine. The controller is
//! a thin playback shell that advances frames for whatever label was
//! last selected.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Facing, MovementState, Player, SPEED_SNAP_THRESHOLD, SurfaceContact};

use super::manifest::{AnimationDef, AnimationManifest};

/// Animation labels for the player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

impl AnimationState {
    /// Manifest key and playback label.
    pub fn label(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
        }
    }

    /// Built-in frame data used when the manifest has no entry.
    pub fn default_def(self) -> AnimationDef {
        let frames = match self {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
        };
        AnimationDef {
            frames,
            frame_duration: 0.15,
        }
    }
}

/// Pick the animation for the current frame, first matching rule wins.
/// Returns `None` when no rule matches, which leaves the running
/// animation untouched.
///
/// The run rule reads the ray-cast `SurfaceContact` while the airborne
/// rules read the sensor-driven `on_ground`; the two signals disagree
/// briefly around takeoff and landing and each rule keys on a specific
/// one. The fall rule tests the horizontal component.
pub(crate) fn select_animation(
    velocity: Vec2,
    state: &MovementState,
    surface: &SurfaceContact,
) -> Option<AnimationState> {
    if velocity.x.abs() > SPEED_SNAP_THRESHOLD && surface.on_floor && !surface.on_wall {
        Some(AnimationState::Run)
    } else if velocity.y > 0.0 && !state.on_ground {
        Some(AnimationState::Jump)
    } else if velocity.x > 0.0 && !state.on_ground {
        Some(AnimationState::Fall)
    } else if state.on_ground {
        Some(AnimationState::Idle)
    } else {
        None
    }
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
    pub current_frame: u32,
    pub total_frames: u32,
    pub frame_timer: f32,
    pub frame_duration: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        let def = AnimationState::Idle.default_def();
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: def.frames,
            frame_timer: 0.0,
            frame_duration: def.frame_duration,
        }
    }
}

impl AnimationController {
    /// Transition to a new label, restarting playback if it changed.
    pub fn set_state(&mut self, state: AnimationState, def: AnimationDef) {
        if self.state == state {
            return;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.total_frames = def.frames.max(1);
        self.frame_duration = def.frame_duration;
    }
}

/// System that applies the selected animation label every frame.
pub(crate) fn update_animation_state(
    manifest: Res<AnimationManifest>,
    mut query: Query<
        (
            &MovementState,
            &SurfaceContact,
            &LinearVelocity,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    for (state, surface, velocity, mut controller) in &mut query {
        if let Some(next) = select_animation(velocity.0, state, surface) {
            let def = manifest.def(next);
            controller.set_state(next, def);
        }
    }
}

/// System that advances playback frames based on time. All player
/// animations loop.
pub(crate) fn advance_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    for mut controller in &mut query {
        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;
            controller.current_frame = (controller.current_frame + 1) % controller.total_frames;
        }
    }
}

/// Mirror the sprite horizontally to match movement facing.
pub(crate) fn sync_sprite_facing(
    mut query: Query<(&MovementState, &mut Sprite), With<Player>>,
) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}
