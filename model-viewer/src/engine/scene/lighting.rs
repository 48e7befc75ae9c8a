use bevy::pbr::{CascadeShadowConfigBuilder, DirectionalLightShadowMap};
use bevy::prelude::*;
use constants::lighting::*;

/// Hemispheric fill plus a single shadow-casting sun.
///
/// Bevy has no hemispheric light, so the fill is split in two: ambient light
/// in the sky colour and a shadowless light shining up in the ground colour.
pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: HEMI_LIGHT_COLOUR,
        brightness: HEMI_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            color: HEMI_LIGHT_GROUND_COLOUR,
            illuminance: HEMI_LIGHT_GROUND_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::Y, Vec3::Z),
        Name::new("hemiLightGround"),
    ));

    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIR_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(DIR_LIGHT_POSITION))
            .looking_to(Vec3::from_array(DIR_LIGHT_DIRECTION), Vec3::Y),
        CascadeShadowConfigBuilder {
            num_cascades: 1,
            maximum_distance: SHADOW_MAXIMUM_DISTANCE,
            ..default()
        }
        .build(),
        Name::new("dirLight"),
    ));
}
