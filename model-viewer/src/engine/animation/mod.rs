//! Key-framed movement of the model across the ground.

/// Two-key position track and the system that plays it.
pub mod move_animation;
