//! Runtime systems shared by the whole viewer.

/// Model status reporting to the page element (WASM) or a UI overlay (native).
pub mod status;
