use bevy::color::Color;

/// Sky-side colour of the fill light.
pub const HEMI_LIGHT_COLOUR: Color = Color::WHITE;

/// Ground-side colour of the fill light.
pub const HEMI_LIGHT_GROUND_COLOUR: Color = Color::srgb(0.8, 0.8, 0.8);

/// Sky-side fill brightness in cd/m^2.
pub const HEMI_LIGHT_BRIGHTNESS: f32 = 600.0;

/// Illuminance of the upward bounce light carrying the ground-side colour, in lux.
pub const HEMI_LIGHT_GROUND_ILLUMINANCE: f32 = 800.0;

pub const DIR_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 5.0];
pub const DIR_LIGHT_DIRECTION: [f32; 3] = [-1.0, -2.0, -1.0];

/// Direct light illuminance in lux.
pub const DIR_LIGHT_ILLUMINANCE: f32 = 4_000.0;

/// Edge length of the directional shadow map in texels.
pub const SHADOW_MAP_SIZE: usize = 1024;

/// Far edge of the single shadow cascade. The scene fits in a few metres.
pub const SHADOW_MAXIMUM_DISTANCE: f32 = 40.0;
