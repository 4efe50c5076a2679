//! Directory structure and file generation for `.openlinkage/`.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates};
use crate::config::CONFIG_DIR;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for initializing a `.openlinkage/` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory that will contain `.openlinkage/`.
    pub target_dir: PathBuf,

    /// Overwrite an existing `.openlinkage/` directory.
    pub force: bool,

    /// Write `config.toml` only.
    pub minimal: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            minimal: false,
        }
    }
}

/// Write the embedded scaffold into `<target_dir>/.openlinkage/`.
///
/// ```text
/// .openlinkage/
/// ├── config.toml
/// ├── agents/          (unless minimal)
/// │   ├── exercise.md
/// │   ├── health-butler.md
/// │   ├── medication.md
/// │   └── nutrition.md
/// └── rules/           (unless minimal)
///     └── custom.yaml
/// ```
///
/// Returns the written paths in write order.
///
/// # Errors
///
/// - [`InitError::DirectoryExists`] when the directory exists and `force` is off
/// - [`InitError::TemplateNotFound`] when an embedded template is missing
/// - I/O failures while creating directories or writing files
pub async fn scaffold_config_dir(options: InitOptions) -> InitResult<Vec<PathBuf>> {
    let config_dir = options.target_dir.join(CONFIG_DIR);

    if config_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(config_dir));
    }

    let mut templates = vec!["config.toml".to_string()];
    if !options.minimal {
        templates.extend(list_templates("agents/"));
        templates.extend(list_templates("rules/"));
    }

    let mut written = Vec::with_capacity(templates.len());
    for template in &templates {
        written.push(write_template_file(&config_dir, template)?);
    }

    tracing::debug!(path = %config_dir.display(), files = written.len(), "scaffold written");
    Ok(written)
}

fn write_template_file(config_dir: &Path, template_path: &str) -> InitResult<PathBuf> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = config_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    Ok(target_path)
}
