use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::model::VIEWER_CONFIG_FILE;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::core::app_state::AppState;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ViewerConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading viewer config from: {}", VIEWER_CONFIG_FILE);
    config_loader.handle = Some(asset_server.load(VIEWER_CONFIG_FILE));
}

/// Adopt `viewer.json` once it resolves. A missing or malformed file is not
/// an error for the viewer, it just keeps the defaults.
pub fn load_config_system(
    config_loader: Res<ConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<ViewerConfig>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    if let Some(config) = configs.get(handle) {
        info!("✓ Viewer config loaded, model: {}", config.model_file);
        commands.insert_resource(config.clone().sanitised());
        next_state.set(AppState::LoadingModel);
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!("Viewer config unavailable ({}), using defaults", err);
        commands.insert_resource(ViewerConfig::default());
        next_state.set(AppState::LoadingModel);
    }
}
