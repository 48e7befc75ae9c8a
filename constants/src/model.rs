/// Model file loaded on startup, relative to the asset root.
pub const DEFAULT_MODEL_FILE: &str = "scene.gltf";

/// File extensions the glTF importer accepts, lowercase.
pub const SUPPORTED_MODEL_EXTENSIONS: &[&str] = &["gltf", "glb"];

/// Uniform scale applied to the model after import.
pub const MODEL_SCALE: f32 = 10.0;

/// Runtime configuration overriding the values above.
pub const VIEWER_CONFIG_FILE: &str = "viewer.json";

/// Id of the page element that shows load status.
pub const STATUS_ELEMENT_ID: &str = "modelInfo";

pub const STATUS_UNSUPPORTED_FORMAT: &str = "Format not supported!";
pub const STATUS_LOAD_FAILED: &str = "Failed to load model!";
