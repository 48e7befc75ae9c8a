/// Key frame rate of the move animation.
pub const MOVE_ANIMATION_FPS: f32 = 60.0;

/// Index of the destination key. With the rate above a move lasts half a second.
pub const MOVE_ANIMATION_END_FRAME: f32 = 30.0;
