use constants::model::{STATUS_LOAD_FAILED, STATUS_UNSUPPORTED_FORMAT};
use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

/// Failures surfaced to the user while bringing the model into the scene.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("Model file has no extension: {0}")]
    MissingExtension(String),

    #[error("Failed to load model {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

impl ViewerError {
    /// Short message for the page status element.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) | Self::MissingExtension(_) => STATUS_UNSUPPORTED_FORMAT,
            Self::LoadFailed { .. } => STATUS_LOAD_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_share_the_unsupported_status() {
        assert_eq!(
            ViewerError::UnsupportedFormat("obj".into()).status_text(),
            STATUS_UNSUPPORTED_FORMAT
        );
        assert_eq!(
            ViewerError::MissingExtension("model".into()).status_text(),
            STATUS_UNSUPPORTED_FORMAT
        );
    }

    #[test]
    fn load_failure_mentions_path() {
        let err = ViewerError::LoadFailed {
            path: "scene.gltf".into(),
            reason: "not found".into(),
        };
        assert_eq!(err.status_text(), STATUS_LOAD_FAILED);
        assert_eq!(err.to_string(), "Failed to load model scene.gltf: not found");
    }
}
