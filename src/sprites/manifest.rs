//! Animation manifest loading.
//!
//! Loads the animation manifest JSON which defines frame counts and
//! frame timing per animation label. Playback falls back to built-in
//! defaults when the manifest is absent or malformed.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::animation::AnimationState;

/// Frame data for one animation label.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AnimationDef {
    /// Number of frames in the cycle.
    pub frames: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

/// Resource containing frame data for every animation label.
#[derive(Resource, Debug, Default)]
pub struct AnimationManifest {
    pub version: u32,
    pub animations: HashMap<String, AnimationDef>,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    animations: HashMap<String, AnimationDef>,
}

impl AnimationManifest {
    /// Load the manifest from a JSON file, keeping defaults on failure.
    pub fn load_from_file(&mut self, path: &str) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Animation manifest not found at {:?}, using built-in frame data",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read animation manifest: {}", e);
                return;
            }
        };

        let manifest_json: ManifestJson = match serde_json::from_str(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse animation manifest: {}", e);
                return;
            }
        };

        self.version = manifest_json.version;
        self.animations = manifest_json.animations;

        info!(
            "Loaded animation manifest v{} with {} animations",
            self.version,
            self.animations.len()
        );
    }

    /// Frame data for a state, from the manifest or the built-in default.
    pub fn def(&self, state: AnimationState) -> AnimationDef {
        self.animations
            .get(state.label())
            .copied()
            .unwrap_or_else(|| state.default_def())
    }
}

/// System to load the animation manifest at startup.
pub(crate) fn load_animation_manifest(mut manifest: ResMut<AnimationManifest>) {
    manifest.load_from_file("assets/sprites/animations.json");
}
