//! Core domain: app-level setup shared by every other plugin.

use bevy::prelude::*;

/// Marker for the camera that follows the player.
#[derive(Component, Debug)]
pub struct MainCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}
