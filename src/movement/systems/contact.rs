//! Movement domain: ground sensor overlap tracking.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{GroundSensor, MovementState, MovementTuning, Player};

/// Fold collision begin/end messages into the sensor's overlap count and
/// fire the land / leave-ground transitions on the zero boundary. The
/// messages arrive from the physics step of the same frame, so the state
/// is settled before the next fixed tick reads it.
pub(crate) fn track_ground_contact(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    tuning: Res<MovementTuning>,
    mut sensors: Query<&mut GroundSensor>,
    mut players: Query<&mut MovementState, With<Player>>,
) {
    for event in started.read() {
        for entity in [event.collider1, event.collider2] {
            let Ok(mut sensor) = sensors.get_mut(entity) else {
                continue;
            };

            sensor.overlaps += 1;
            if sensor.overlaps == 1 {
                let Ok(mut state) = players.get_mut(sensor.player) else {
                    continue;
                };
                state.land(&tuning);
                debug!(
                    "Landed: jumps_remaining={}, buffered_jump={}",
                    state.jumps_remaining, state.jump_requested
                );
            }
        }
    }

    for event in ended.read() {
        for entity in [event.collider1, event.collider2] {
            let Ok(mut sensor) = sensors.get_mut(entity) else {
                continue;
            };

            sensor.overlaps = sensor.overlaps.saturating_sub(1);
            if sensor.overlaps == 0 {
                let Ok(mut state) = players.get_mut(sensor.player) else {
                    continue;
                };
                state.leave_ground(&tuning);
                debug!(
                    "Left ground: jumps_remaining={}, coyote={:.3}",
                    state.jumps_remaining, state.coyote_time_remaining
                );
            }
        }
    }
}
