//! Trunk post-build hook: rewrite absolute bundle URLs in the staged page to
//! relative ones so the viewer can be served from any sub-path.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Page name, as set by `html_output` in Trunk.toml.
const STAGED_HTML: &str = "index.html";
const BUNDLE_NAME: &str = "model-viewer";

fn main() -> io::Result<()> {
    //  Environment variable parameter - the distributed directory
    let staging_dir = env::var("TRUNK_STAGING_DIR").map_err(io::Error::other)?;
    let staged_html_path = PathBuf::from(staging_dir).join(STAGED_HTML);

    let html = fs::read_to_string(&staged_html_path)?;
    fs::write(staged_html_path, relative_bundle_paths(&html))
}

fn relative_bundle_paths(html: &str) -> String {
    let mut html = html.to_string();
    for file in [
        format!("{BUNDLE_NAME}.js"),
        format!("{BUNDLE_NAME}_bg.wasm"),
    ] {
        for quote in ['"', '\''] {
            html = html.replace(&format!("{quote}/{file}"), &format!("{quote}./{file}"));
        }
    }
    html
}
