//! Model loading pipeline.
//!
//! Resolves the viewer config, gates the model file on its extension,
//! imports it through the glTF loader and places it on the ground.

/// `viewer.json` loading with fallback to compiled-in defaults.
pub mod config_loader;

/// Extension gate, glTF import and scene spawning.
pub mod model_loader;

/// Ground-relative placement of the spawned model hierarchy.
pub mod placement;
