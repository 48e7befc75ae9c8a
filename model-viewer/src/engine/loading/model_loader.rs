use std::path::Path;

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use constants::model::SUPPORTED_MODEL_EXTENSIONS;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::core::app_state::{AppState, report_failure};
use crate::engine::core::error::{ViewerError, ViewerResult};
use crate::engine::systems::status::ViewerStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// JSON glTF with external or embedded buffers.
    Gltf,
    /// Binary glTF container.
    Glb,
}

/// Resolve the model format from the file extension, case-insensitively.
///
/// Only the text after the last `.` of the file name counts, so
/// `scene.backup.GLB` is a GLB file while `scene` and `v2.assets/scene` have
/// no extension at all.
pub fn model_format(filename: &str) -> ViewerResult<ModelFormat> {
    let Some(extension) = Path::new(filename)
        .extension()
        .and_then(|extension| extension.to_str())
    else {
        return Err(ViewerError::MissingExtension(filename.to_string()));
    };
    let extension = extension.to_lowercase();
    if !SUPPORTED_MODEL_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ViewerError::UnsupportedFormat(extension));
    }
    match extension.as_str() {
        "glb" => Ok(ModelFormat::Glb),
        _ => Ok(ModelFormat::Gltf),
    }
}

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub path: Option<String>,
    pub handle: Option<Handle<Gltf>>,
}

/// The model currently in the scene. Absent until it has been placed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedModel {
    pub entity: Entity,
}

/// Marks the entity holding the model's scene root.
#[derive(Component)]
pub struct ModelRoot;

/// Set once every entity of the model's scene has been spawned.
#[derive(Component)]
pub struct SceneReady;

/// Check the configured file and hand it to the glTF importer.
/// Unsupported files never reach the asset server.
pub fn request_model_load(
    config: Res<ViewerConfig>,
    asset_server: Res<AssetServer>,
    mut model_loader: ResMut<ModelLoader>,
    mut status: ResMut<ViewerStatus>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    match model_format(&config.model_file) {
        Ok(format) => {
            info!("Loading {:?} model from: {}", format, config.model_file);
            status.set(format!("Loading {}...", config.model_file));
            model_loader.path = Some(config.model_file.clone());
            model_loader.handle = Some(asset_server.load(config.model_file.clone()));
        }
        Err(err) => report_failure(&err, &mut status, &mut next_state),
    }
}

/// Spawn the model scene once the glTF file has been imported.
pub fn spawn_model_when_loaded(
    model_loader: Res<ModelLoader>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<ViewerConfig>,
    mut commands: Commands,
    mut status: ResMut<ViewerStatus>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = model_loader.handle else {
        return;
    };
    let path = model_loader.path.clone().unwrap_or_default();

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {}
        Some(LoadState::Failed(err)) => {
            let err = ViewerError::LoadFailed {
                path,
                reason: err.to_string(),
            };
            report_failure(&err, &mut status, &mut next_state);
            return;
        }
        _ => return,
    }

    let Some(gltf) = gltfs.get(handle) else {
        return;
    };

    let scene = match model_scene(gltf.default_scene.as_ref(), &gltf.scenes, &path) {
        Ok(scene) => scene,
        Err(err) => {
            report_failure(&err, &mut status, &mut next_state);
            return;
        }
    };

    info!(
        "✓ Model glTF loaded: {} ({} scenes, {} meshes)",
        path,
        gltf.scenes.len(),
        gltf.meshes.len()
    );

    // Hidden until placement has moved it onto the ground.
    commands
        .spawn((
            SceneRoot(scene),
            Transform::from_scale(Vec3::splat(config.model_scale)),
            Visibility::Hidden,
            Name::new("model"),
            ModelRoot,
        ))
        .observe(mark_scene_ready);

    next_state.set(AppState::Placing);
}

/// The file's default scene, falling back to its first one.
pub fn model_scene(
    default_scene: Option<&Handle<Scene>>,
    scenes: &[Handle<Scene>],
    path: &str,
) -> ViewerResult<Handle<Scene>> {
    default_scene
        .or_else(|| scenes.first())
        .cloned()
        .ok_or_else(|| ViewerError::LoadFailed {
            path: path.to_string(),
            reason: "file contains no scenes".to_string(),
        })
}

fn mark_scene_ready(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.entity(trigger.target()).insert(SceneReady);
}
