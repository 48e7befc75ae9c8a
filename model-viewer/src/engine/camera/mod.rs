//! Orbit camera for model inspection.
//!
//! Provides arc-rotate controls around a target with wheel zoom limits,
//! retargeted onto the model once it has been placed.

/// Orbit camera resource, spawn helper and input controller.
pub mod orbit_camera;
