//! Embedded scaffold templates.
//!
//! `rust-embed` compiles the workspace `templates/` directory into the binary,
//! so `openlinkage init` works without any files next to the executable. With
//! the `debug-embed` feature, debug builds embed the files as well instead of
//! reading them from disk at runtime.

use rust_embed::RustEmbed;

/// Files under the workspace `templates/` directory.
///
/// `CARGO_MANIFEST_DIR` is `crates/core`, so the folder is two levels up.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path relative to the templates root.
///
/// # Example
/// ```
/// use ol_core::init::templates::get_template;
///
/// let config = get_template("config.toml").expect("config.toml should exist");
/// assert!(config.contains("agent_timeout_ms"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// Template paths starting with `prefix`, sorted.
pub fn list_templates(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    paths.sort();
    paths
}
