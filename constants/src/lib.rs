//! Shared tunables for the model viewer.
//!
//! Values mirror the scene the viewer was designed around: a 10 x 10 ground
//! one unit below the origin, an orbit camera looking down at it, and a
//! model scaled up so it reads at that distance.

pub mod animation;
pub mod camera;
pub mod lighting;
pub mod model;
pub mod scene;
