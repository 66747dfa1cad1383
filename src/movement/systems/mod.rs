//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod contact;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_floor, detect_walls};
pub(crate) use contact::track_ground_contact;
pub(crate) use input::{latch_jump_input, read_input};
pub(crate) use movement::{apply_gravity, apply_horizontal_movement, handle_jump, update_timers};
