use bevy::math::Affine3A;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use super::model_loader::{LoadedModel, ModelRoot, SceneReady};
use crate::engine::assets::model_bounds::{ModelBounds, ground_offset};
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::systems::status::ViewerStatus;

/// Rest the freshly spawned model on the ground, let it cast shadows, and
/// point the camera at it.
pub fn place_loaded_model(
    mut commands: Commands,
    config: Res<ViewerConfig>,
    mut models: Query<
        (Entity, &mut Transform, &mut Visibility),
        (With<ModelRoot>, With<SceneReady>, Without<ModelBounds>),
    >,
    children: Query<&Children>,
    parents: Query<&ChildOf>,
    local_transforms: Query<&Transform, Without<ModelRoot>>,
    mesh_handles: Query<&Mesh3d>,
    shadowless: Query<(), With<NotShadowCaster>>,
    meshes: Res<Assets<Mesh>>,
    mut orbit_camera: ResMut<OrbitCamera>,
    mut status: ResMut<ViewerStatus>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok((root, mut transform, mut visibility)) = models.single_mut() else {
        return;
    };

    let bounds = hierarchy_bounds(
        root,
        &children,
        &parents,
        &local_transforms,
        &mesh_handles,
        &meshes,
    );
    let bounds = bounds.unwrap_or_else(|| {
        warn!("Model has no mesh geometry, resting its origin on the ground");
        ModelBounds {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    });

    transform.translation = Vec3::new(
        0.0,
        ground_offset(bounds.min.y, transform.scale.y, config.ground_height),
        0.0,
    );
    *visibility = Visibility::Inherited;

    // Imported meshes already cast shadows; this only clears markers a
    // scene may carry. Shadows are enabled by the lights and the ground.
    for entity in children.iter_descendants(root) {
        if shadowless.contains(entity) {
            commands.entity(entity).remove::<NotShadowCaster>();
        }
    }

    orbit_camera.target = transform.translation;

    commands.entity(root).insert(bounds);
    commands.insert_resource(LoadedModel { entity: root });

    info!("Model position: {}", transform.translation);
    info!("Bounding info: min {} max {}", bounds.min, bounds.max);
    status.set("Model loaded");
    next_state.set(AppState::Running);
}

/// Bounds of every mesh below `root`, expressed in the root's local space.
pub fn hierarchy_bounds(
    root: Entity,
    children: &Query<&Children>,
    parents: &Query<&ChildOf>,
    local_transforms: &Query<&Transform, Without<ModelRoot>>,
    mesh_handles: &Query<&Mesh3d>,
    meshes: &Assets<Mesh>,
) -> Option<ModelBounds> {
    children
        .iter_descendants(root)
        .filter_map(|entity| {
            let mesh = meshes.get(&mesh_handles.get(entity).ok()?.0)?;
            let to_root = transform_to_root(entity, root, parents, local_transforms)?;
            ModelBounds::of_mesh(mesh, to_root)
        })
        .reduce(ModelBounds::merge)
}

/// Compose local transforms from `entity` up to, but excluding, `root`.
fn transform_to_root(
    entity: Entity,
    root: Entity,
    parents: &Query<&ChildOf>,
    local_transforms: &Query<&Transform, Without<ModelRoot>>,
) -> Option<Affine3A> {
    let mut affine = Affine3A::IDENTITY;
    let mut current = entity;
    while current != root {
        affine = local_transforms.get(current).ok()?.compute_affine() * affine;
        current = parents.get(current).ok()?.parent();
    }
    Some(affine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn placement_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<AppState>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<ViewerConfig>()
            .init_resource::<ViewerStatus>()
            .init_resource::<OrbitCamera>()
            .add_systems(Update, place_loaded_model);
        app
    }

    fn spawn_model(app: &mut App, child_offset: Vec3, ready: bool) -> (Entity, Entity) {
        let mesh = app
            .world_mut()
            .resource_mut::<Assets<Mesh>>()
            .add(Cuboid::new(1.0, 2.0, 1.0));
        let mut root = app.world_mut().spawn((
            ModelRoot,
            Transform::from_scale(Vec3::splat(10.0)),
            Visibility::Hidden,
        ));
        if ready {
            root.insert(SceneReady);
        }
        let root = root.id();
        let node = app
            .world_mut()
            .spawn((Transform::from_translation(child_offset), ChildOf(root)))
            .id();
        let leaf = app
            .world_mut()
            .spawn((
                Mesh3d(mesh),
                Transform::IDENTITY,
                NotShadowCaster,
                ChildOf(node),
            ))
            .id();
        (root, leaf)
    }

    #[test]
    fn model_bottom_rests_on_ground() {
        let mut app = placement_app();
        let (root, _) = spawn_model(&mut app, Vec3::new(0.0, 0.5, 0.0), true);

        app.update();

        let ground = app.world().resource::<ViewerConfig>().ground_height;
        let transform = *app.world().get::<Transform>(root).unwrap();
        let bounds = *app.world().get::<ModelBounds>(root).unwrap();
        assert!((bounds.min.y - -0.5).abs() < 1e-5);
        let bottom = transform.translation.y + bounds.min.y * transform.scale.y;
        assert!((bottom - ground).abs() < 1e-4, "bottom {bottom} ground {ground}");
        assert_eq!(transform.translation.x, 0.0);
        assert_eq!(transform.translation.z, 0.0);
    }

    #[test]
    fn placement_registers_model_and_casts_shadows() {
        let mut app = placement_app();
        let (root, leaf) = spawn_model(&mut app, Vec3::ZERO, true);

        app.update();
        app.update();

        assert_eq!(
            app.world().resource::<LoadedModel>(),
            &LoadedModel { entity: root }
        );
        assert!(app.world().get::<NotShadowCaster>(leaf).is_none());
        assert_eq!(
            app.world().get::<Visibility>(root),
            Some(&Visibility::Inherited)
        );
        let target = app.world().resource::<OrbitCamera>().target;
        assert_eq!(target, app.world().get::<Transform>(root).unwrap().translation);
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Running
        );
    }

    #[test]
    fn waits_for_scene_to_be_ready() {
        let mut app = placement_app();
        let (root, _) = spawn_model(&mut app, Vec3::ZERO, false);

        app.update();

        assert!(app.world().get::<ModelBounds>(root).is_none());
        assert!(app.world().get_resource::<LoadedModel>().is_none());
    }
}
