//! Static scene content: ground plane, lights and shadows.

/// Shadow-receiving ground plane that acts as the click target.
pub mod ground;

/// Fill and sun lights with directional shadow configuration.
pub mod lighting;
