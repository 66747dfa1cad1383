//! Sprites domain: animation selection and the playback shell.

mod animation;
mod manifest;

#[cfg(test)]
mod tests;

pub use animation::{AnimationController, AnimationState};
pub use manifest::{AnimationDef, AnimationManifest};

use bevy::prelude::*;

use animation::{advance_animation_frames, sync_sprite_facing, update_animation_state};
use manifest::load_animation_manifest;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationManifest>()
            .add_systems(Startup, load_animation_manifest)
            .add_systems(
                Update,
                (
                    update_animation_state,
                    advance_animation_frames,
                    sync_sprite_facing,
                ),
            );
    }
}
