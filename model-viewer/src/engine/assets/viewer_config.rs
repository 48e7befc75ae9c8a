use bevy::prelude::*;
use constants::animation::{MOVE_ANIMATION_END_FRAME, MOVE_ANIMATION_FPS};
use constants::model::{DEFAULT_MODEL_FILE, MODEL_SCALE, STATUS_ELEMENT_ID};
use constants::scene::GROUND_HEIGHT;
use serde::{Deserialize, Serialize};

/// Runtime viewer settings read from `viewer.json`.
/// Missing fields fall back to the compiled-in defaults.
#[derive(Resource, Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Model path relative to the asset root. Must end in `.gltf` or `.glb`.
    pub model_file: String,
    pub model_scale: f32,
    pub ground_height: f32,
    pub animation_fps: f32,
    pub animation_end_frame: f32,
    pub status_element_id: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_file: DEFAULT_MODEL_FILE.to_string(),
            model_scale: MODEL_SCALE,
            ground_height: GROUND_HEIGHT,
            animation_fps: MOVE_ANIMATION_FPS,
            animation_end_frame: MOVE_ANIMATION_END_FRAME,
            status_element_id: STATUS_ELEMENT_ID.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Replace values that would break placement or animation with defaults.
    pub fn sanitised(mut self) -> Self {
        let defaults = Self::default();
        if !(self.model_scale.is_finite() && self.model_scale > 0.0) {
            warn!(
                "Ignoring model_scale {}, using {}",
                self.model_scale, defaults.model_scale
            );
            self.model_scale = defaults.model_scale;
        }
        if !self.ground_height.is_finite() {
            self.ground_height = defaults.ground_height;
        }
        if !(self.animation_fps.is_finite() && self.animation_fps > 0.0) {
            self.animation_fps = defaults.animation_fps;
        }
        if !(self.animation_end_frame.is_finite() && self.animation_end_frame > 0.0) {
            self.animation_end_frame = defaults.animation_end_frame;
        }
        self
    }
}
