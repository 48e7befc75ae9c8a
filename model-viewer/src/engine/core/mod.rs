//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with scene, model loading and interaction systems.
pub mod app_setup;

/// Application state machine from configuration through model placement.
pub mod app_state;

/// Errors raised while resolving and loading the model.
pub mod error;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
