use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::animation::move_animation::{MoveAnimation, animate_model_moves};
use crate::engine::assets::model_bounds::{ModelBounds, ground_offset};
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::LoadedModel;
use crate::engine::scene::ground::Ground;

/// A pointer press landed on the ground at `point`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroundClickEvent {
    pub point: Vec3,
}

/// Registers ground picking and the model move animation.
pub struct ClickToMovePlugin;

impl Plugin for ClickToMovePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GroundClickEvent>().add_systems(
            Update,
            (
                pick_ground_on_press,
                move_model_to_ground_click,
                animate_model_moves,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        );
    }
}

/// The nearest hit counts only if it is the ground; anything in front of
/// the ground, the model included, swallows the click.
pub fn first_ground_hit(
    nearest: Option<(Entity, Vec3)>,
    is_ground: impl Fn(Entity) -> bool,
) -> Option<Vec3> {
    let (entity, point) = nearest?;
    is_ground(entity).then_some(point)
}

pub fn pick_ground_on_press(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    grounds: Query<(), With<Ground>>,
    mut ray_cast: MeshRayCast,
    mut ground_clicks: EventWriter<GroundClickEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else { return; };
    let Some(cursor_pos) = window.cursor_position() else { return; };
    let Ok((camera, camera_transform)) = cameras.single() else { return; };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else { return; };

    if let Some(point) = pick_ground(ray, &mut ray_cast, &grounds) {
        ground_clicks.write(GroundClickEvent { point });
    }
}

/// Where `ray` meets the ground, unless another mesh is in the way.
pub fn pick_ground(
    ray: Ray3d,
    ray_cast: &mut MeshRayCast,
    grounds: &Query<(), With<Ground>>,
) -> Option<Vec3> {
    let nearest = ray_cast
        .cast_ray(ray, &MeshRayCastSettings::default())
        .first()
        .map(|(entity, hit)| (*entity, hit.point));

    first_ground_hit(nearest, |entity| grounds.contains(entity))
}

/// Animate the loaded model to the last ground click of the frame, keeping
/// it resting on the ground. A click mid-move restarts from where it is.
pub fn move_model_to_ground_click(
    mut ground_clicks: EventReader<GroundClickEvent>,
    loaded_model: Option<Res<LoadedModel>>,
    config: Res<ViewerConfig>,
    models: Query<(&Transform, &ModelBounds)>,
    mut commands: Commands,
) {
    let Some(click) = ground_clicks.read().last().copied() else {
        return;
    };
    let Some(loaded_model) = loaded_model else {
        debug!("Ground clicked before a model was loaded");
        return;
    };
    let Ok((transform, bounds)) = models.get(loaded_model.entity) else {
        return;
    };

    let destination = Vec3::new(
        click.point.x,
        ground_offset(bounds.min.y, transform.scale.y, config.ground_height),
        click.point.z,
    );

    commands
        .entity(loaded_model.entity)
        .insert(MoveAnimation::between(
            transform.translation,
            destination,
            config.animation_fps,
            config.animation_end_frame,
        ));

    info!("Moving model to: {}", destination);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::render::mesh::MeshAabb;

    fn picking_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>();
        app
    }

    fn spawn_pickable(app: &mut App, mesh: Mesh, at: Vec3) -> Entity {
        let aabb = mesh.compute_aabb().unwrap_or_default();
        let mesh = app.world_mut().resource_mut::<Assets<Mesh>>().add(mesh);
        let mut view_visibility = ViewVisibility::HIDDEN;
        view_visibility.set();
        app.world_mut()
            .spawn((
                Mesh3d(mesh),
                Transform::from_translation(at),
                GlobalTransform::from_translation(at),
                InheritedVisibility::VISIBLE,
                view_visibility,
                aabb,
            ))
            .id()
    }

    fn pick_straight_down(app: &mut App) -> Option<Vec3> {
        let ray = Ray3d::new(Vec3::new(0.0, 5.0, 0.0), Dir3::NEG_Y);
        app.world_mut()
            .run_system_once(
                move |mut ray_cast: MeshRayCast, grounds: Query<(), With<Ground>>| {
                    pick_ground(ray, &mut ray_cast, &grounds)
                },
            )
            .unwrap()
    }

    fn move_app() -> App {
        let mut app = App::new();
        app.init_resource::<ViewerConfig>()
            .add_event::<GroundClickEvent>()
            .add_systems(Update, move_model_to_ground_click);
        app
    }

    fn spawn_placed_model(app: &mut App, at: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(at).with_scale(Vec3::splat(10.0)),
                ModelBounds {
                    min: Vec3::new(-0.5, -0.5, -0.5),
                    max: Vec3::new(0.5, 0.5, 0.5),
                },
            ))
            .id()
    }

    #[test]
    fn only_a_nearest_ground_hit_counts() {
        let ground = Entity::from_raw(1);
        let model = Entity::from_raw(2);
        let point = Vec3::new(1.0, -1.0, 2.0);
        let is_ground = |entity| entity == ground;

        assert_eq!(first_ground_hit(Some((ground, point)), is_ground), Some(point));
        assert_eq!(first_ground_hit(Some((model, point)), is_ground), None);
        assert_eq!(first_ground_hit(None, is_ground), None);
    }

    #[test]
    fn ray_reaches_uncovered_ground() {
        let mut app = picking_app();
        let ground = spawn_pickable(
            &mut app,
            Plane3d::default().mesh().size(10.0, 10.0).build(),
            Vec3::new(0.0, -1.0, 0.0),
        );
        app.world_mut().entity_mut(ground).insert(Ground);

        let point = pick_straight_down(&mut app).unwrap();
        assert!(point.distance(Vec3::new(0.0, -1.0, 0.0)) < 1e-4, "{point}");
    }

    #[test]
    fn mesh_in_front_of_ground_swallows_click() {
        let mut app = picking_app();
        let ground = spawn_pickable(
            &mut app,
            Plane3d::default().mesh().size(10.0, 10.0).build(),
            Vec3::new(0.0, -1.0, 0.0),
        );
        app.world_mut().entity_mut(ground).insert(Ground);
        spawn_pickable(&mut app, Mesh::from(Cuboid::new(1.0, 1.0, 1.0)), Vec3::ZERO);

        assert_eq!(pick_straight_down(&mut app), None);
    }

    #[test]
    fn click_before_model_is_loaded_changes_nothing() {
        let mut app = move_app();
        let model = spawn_placed_model(&mut app, Vec3::new(0.0, 4.0, 0.0));

        app.world_mut().send_event(GroundClickEvent {
            point: Vec3::new(2.0, -1.0, 3.0),
        });
        app.update();

        assert!(app.world().get::<MoveAnimation>(model).is_none());
        assert_eq!(
            app.world().get::<Transform>(model).unwrap().translation,
            Vec3::new(0.0, 4.0, 0.0)
        );
    }

    #[test]
    fn ground_click_animates_to_clicked_xz_on_the_ground() {
        let mut app = move_app();
        let start = Vec3::new(0.0, 4.0, 0.0);
        let model = spawn_placed_model(&mut app, start);
        app.insert_resource(LoadedModel { entity: model });

        app.world_mut().send_event(GroundClickEvent {
            point: Vec3::new(2.0, -1.0, 3.0),
        });
        app.update();

        let animation = app.world().get::<MoveAnimation>(model).unwrap();
        assert_eq!(animation.destination(), Vec3::new(2.0, 4.0, 3.0));
        assert_eq!(
            *animation,
            MoveAnimation::between(start, Vec3::new(2.0, 4.0, 3.0), 60.0, 30.0)
        );
    }

    #[test]
    fn click_mid_move_restarts_from_current_position() {
        let mut app = move_app();
        let midway = Vec3::new(1.0, 4.0, 1.5);
        let model = spawn_placed_model(&mut app, midway);
        app.insert_resource(LoadedModel { entity: model });
        app.world_mut().entity_mut(model).insert(MoveAnimation::between(
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(2.0, 4.0, 3.0),
            60.0,
            30.0,
        ));

        app.world_mut().send_event(GroundClickEvent {
            point: Vec3::new(-4.0, -1.0, 0.0),
        });
        app.update();

        let animation = app.world().get::<MoveAnimation>(model).unwrap();
        assert_eq!(
            *animation,
            MoveAnimation::between(midway, Vec3::new(-4.0, 4.0, 0.0), 60.0, 30.0)
        );
    }
}
