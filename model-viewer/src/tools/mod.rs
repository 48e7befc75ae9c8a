//! Interactive tools driven by pointer input.
//!
//! ## Click To Move
//!
//! ```text
//! Left press
//!   └─> camera ray through cursor
//!       └─> nearest mesh hit is the ground?
//!           └─> GroundClickEvent
//!               └─> MoveAnimation on the loaded model (0.5 s, y held on ground)
//! ```
//!
//! Clicks that hit the model, miss every mesh, or arrive before a model is
//! loaded are dropped.

/// Ground picking and model move animation.
pub mod click_to_move;
