use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::scene::CLEAR_COLOUR;

// Crate engine modules
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, log_state_transitions};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::model_loader::{
    ModelLoader, request_model_load, spawn_model_when_loaded,
};
use crate::engine::loading::placement::place_loaded_model;
use crate::engine::scene::ground::spawn_ground;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::status::{ViewerStatus, status_element_update_system};
// Crate tools modules
use crate::tools::click_to_move::ClickToMovePlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerConfig>::new(&["json"]))
        .add_plugins(ClickToMovePlugin)
        .insert_resource(ClearColor(CLEAR_COLOUR));

    // Initialise resources early
    app.init_resource::<ConfigLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<ViewerConfig>()
        .init_resource::<ViewerStatus>()
        .init_resource::<OrbitCamera>();

    app.add_systems(Startup, (spawn_camera, start_loading))
        .add_systems(
            Update,
            load_config_system.run_if(in_state(AppState::Configuring)),
        )
        .add_systems(
            OnEnter(AppState::LoadingModel),
            (spawn_lighting, spawn_ground, request_model_load).chain(),
        )
        .add_systems(
            Update,
            spawn_model_when_loaded.run_if(in_state(AppState::LoadingModel)),
        )
        .add_systems(
            Update,
            place_loaded_model.run_if(in_state(AppState::Placing)),
        );

    // The camera and status follow the render loop in every state.
    app.add_systems(
        Update,
        (
            camera_controller,
            log_state_transitions,
            status_element_update_system,
        ),
    );

    // The page shows status in its own element on WASM.
    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::engine::systems::status::{spawn_status_overlay, status_text_update_system};
        app.add_systems(Startup, spawn_status_overlay)
            .add_systems(Update, status_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: "wgpu=error,naga=warn,bevy_render=info".into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
