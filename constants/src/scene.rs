use bevy::color::Color;

/// Background colour behind the scene.
pub const CLEAR_COLOUR: Color = Color::srgb(0.1, 0.1, 0.12);

/// Name given to the ground entity. Picking checks the marker component,
/// the name is for inspectors and logs.
pub const GROUND_NAME: &str = "ground";

/// World-space height of the ground plane surface.
pub const GROUND_HEIGHT: f32 = -1.0;

/// Ground plane extent along X and Z.
pub const GROUND_WIDTH: f32 = 10.0;
pub const GROUND_DEPTH: f32 = 10.0;

pub const GROUND_ALBEDO: Color = Color::srgb(0.8, 0.8, 0.85);
pub const GROUND_METALLIC: f32 = 0.1;
pub const GROUND_ROUGHNESS: f32 = 0.6;
