use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use constants::scene::*;

use crate::engine::assets::viewer_config::ViewerConfig;

/// The clickable ground plane. Pointer hits on it move the model.
#[derive(Component)]
pub struct Ground;

/// Flat shadow-receiving ground at the configured height.
pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: GROUND_ALBEDO,
        metallic: GROUND_METALLIC,
        perceptual_roughness: GROUND_ROUGHNESS,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_WIDTH, GROUND_DEPTH))),
        MeshMaterial3d(ground_material),
        Transform::from_xyz(0.0, config.ground_height, 0.0),
        NotShadowCaster,
        Name::new(GROUND_NAME),
        Ground,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_spawns_at_configured_height() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(ViewerConfig {
                ground_height: -2.5,
                ..default()
            })
            .add_systems(Startup, spawn_ground);

        app.update();

        let world = app.world_mut();
        let (transform, name) = world
            .query_filtered::<(&Transform, &Name), With<Ground>>()
            .single(world)
            .unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, -2.5, 0.0));
        assert_eq!(name.as_str(), GROUND_NAME);
    }
}
