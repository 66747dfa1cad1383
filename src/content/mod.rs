//! Content domain: RON-backed movement tuning.

mod loader;

pub use loader::ContentLoadError;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so spawn systems in Startup see the loaded values.
        app.add_systems(PreStartup, load_movement_tuning);
    }
}

fn load_movement_tuning(mut commands: Commands) {
    match loader::load_single_file::<MovementTuning>(Path::new(MOVEMENT_TUNING_PATH)) {
        Ok(tuning) => {
            info!(
                "Loaded movement tuning: max_speed={}, jump_velocity={}, max_jumps={}",
                tuning.max_speed, tuning.jump_velocity, tuning.max_jumps
            );
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            commands.insert_resource(MovementTuning::default());
        }
    }
}
