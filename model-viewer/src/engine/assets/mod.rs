//! Asset types describing the viewer configuration and the loaded model.

/// Hierarchy bounds of the loaded model and the ground-relative offset rule.
pub mod model_bounds;

/// `viewer.json` configuration asset with compiled-in defaults.
pub mod viewer_config;
