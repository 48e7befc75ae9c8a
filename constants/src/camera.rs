use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

/// Initial longitudinal rotation around the target, in radians.
pub const CAMERA_ALPHA: f32 = FRAC_PI_2;

/// Initial latitudinal rotation, measured from the +Y axis.
pub const CAMERA_BETA: f32 = FRAC_PI_3;

pub const CAMERA_RADIUS: f32 = 5.0;
pub const CAMERA_LOWER_RADIUS_LIMIT: f32 = 0.5;
pub const CAMERA_UPPER_RADIUS_LIMIT: f32 = 10.0;

/// Keeps the camera off the poles so `looking_at` never degenerates.
pub const CAMERA_LOWER_BETA_LIMIT: f32 = 0.01;
pub const CAMERA_UPPER_BETA_LIMIT: f32 = PI - 0.01;

/// Wheel units per radius unit. Higher is slower.
pub const CAMERA_WHEEL_PRECISION: f32 = 50.0;

/// Browser wheel delta of one notch, used to turn line scrolls into deltas.
pub const WHEEL_DELTA_PER_LINE: f32 = 120.0;

/// Pixels of drag per radian of rotation.
pub const CAMERA_ANGULAR_SENSIBILITY: f32 = 1000.0;

/// Pixels of drag per world unit of pan at radius 1.
pub const CAMERA_PANNING_SENSIBILITY: f32 = 1000.0;
