use bevy::prelude::*;

use crate::engine::core::error::ViewerError;
use crate::engine::systems::status::ViewerStatus;

/// Viewer lifecycle. The scene renders in every state; only the model
/// pipeline and pointer handling are gated on it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for `viewer.json` (or its absence) to resolve.
    #[default]
    Configuring,
    /// Scene built, glTF requested from the asset server.
    LoadingModel,
    /// Model scene spawned, waiting for its hierarchy to be placed on the ground.
    Placing,
    Running,
    /// Model could not be shown. The empty scene stays interactive.
    Failed,
}

pub fn log_state_transitions(mut transitions: EventReader<StateTransitionEvent<AppState>>) {
    for transition in transitions.read() {
        if let Some(entered) = transition.entered {
            info!("→ Transitioning to {:?} state", entered);
        }
    }
}

/// Log a model pipeline failure, show it on the page and stop the pipeline.
pub fn report_failure(
    err: &ViewerError,
    status: &mut ViewerStatus,
    next_state: &mut NextState<AppState>,
) {
    error!("{err}");
    status.set(err.status_text());
    next_state.set(AppState::Failed);
}
