//! Movement domain: plugin wiring and public exports.
//!
//! The fixed-step chain runs gravity, then horizontal movement, then
//! jump handling, with the physics engine integrating the result
//! afterwards. Input sampling and timer decay run on the per-frame tick.

mod components;
mod resources;
mod systems;


pub use components::{
    Facing, GameLayer, GravityPhase, Ground, GroundSensor, MovementState, Player, SurfaceContact,
    Wall,
};
pub use resources::{MovementInput, MovementTuning, Vec2Def};
pub(crate) use systems::movement::SPEED_SNAP_THRESHOLD;

use bevy::prelude::*;

use crate::movement::systems::{
    apply_gravity, apply_horizontal_movement, detect_floor, detect_walls, handle_jump,
    latch_jump_input, read_input, track_ground_contact, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                FixedUpdate,
                (apply_gravity, apply_horizontal_movement, handle_jump).chain(),
            )
            .add_systems(
                Update,
                (read_input, latch_jump_input, update_timers).chain(),
            )
            .add_systems(Update, (track_ground_contact, detect_floor, detect_walls));
    }
}
