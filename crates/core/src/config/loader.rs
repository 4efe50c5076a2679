//! Configuration file loader for the `.openlinkage/` directory structure.
//!
//! This module provides functionality to load and parse all configuration files
//! from the `.openlinkage/` directory, including:
//! - `config.toml`: Global settings
//! - `agents/*.md`: Agent profiles with YAML front matter
//! - `rules/*.yaml`: Additional warning rules

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use crate::config::CONFIG_DIR;
use gray_matter::engine::YAML;
use gray_matter::Matter;
use ol_protocol::agent_models::AgentProfile;
use ol_protocol::config_models::GlobalConfig;
use ol_protocol::warning_models::WarningRuleDef;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loads all configuration from the `.openlinkage/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.openlinkage/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. Missing directories or
/// files fall back to defaults rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid syntax (TOML, YAML, or Markdown front matter)
/// - Values are unacceptable: duplicate agents, a zero timeout, or two
///   profiles for the same agent
///
/// # Example
///
/// ```rust,no_run
/// use ol_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Running {} agents", config.global.agents.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_dir = root.join(CONFIG_DIR);

    if !config_dir.exists() {
        tracing::debug!(path = %config_dir.display(), "no config directory, using defaults");
        return Ok(AppConfig::default());
    }

    let global = load_global_config(&config_dir)?;
    let profiles = load_profiles(&config_dir)?;
    let rules = load_rules(&config_dir)?;

    tracing::debug!(
        agents = global.agents.len(),
        profiles = profiles.len(),
        rules = rules.len(),
        "configuration loaded"
    );

    Ok(AppConfig {
        global,
        profiles,
        rules,
    })
}

/// Loads and checks global configuration from `config.toml`.
fn load_global_config(config_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = config_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    let invalid = |reason: String| ConfigError::InvalidConfig {
        path: config_path.clone(),
        reason,
    };

    if config.agent_timeout_ms == 0 {
        return Err(invalid("agent_timeout_ms must be greater than zero".to_string()));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = config.agents.iter().find(|kind| !seen.insert(**kind)) {
        return Err(invalid(format!("agent '{}' is listed more than once", duplicate.slug())));
    }

    if let Some(backend) = &config.backend {
        if backend.command.trim().is_empty() {
            return Err(invalid("backend.command must not be empty".to_string()));
        }
    }

    Ok(config)
}

/// Files directly inside `dir` with one of `extensions`, sorted by file name.
fn files_with_extension(dir: &Path, extensions: &[&str]) -> ConfigResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        let ext = path.extension().and_then(|s| s.to_str());
        if ext.is_some_and(|ext| extensions.contains(&ext)) {
            paths.push(path.to_path_buf());
        }
    }
    Ok(paths)
}

/// Loads all agent profiles from `agents/*.md`.
fn load_profiles(config_dir: &Path) -> ConfigResult<Vec<AgentProfile>> {
    let mut profiles: Vec<AgentProfile> = Vec::new();
    let matter = Matter::<YAML>::new();

    for path in files_with_extension(&config_dir.join("agents"), &["md"])? {
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
            path: path.clone(),
            source,
        })?;

        let result = matter.parse(&content);

        let mut profile: AgentProfile = result
            .data
            .ok_or_else(|| ConfigError::MarkdownParse {
                path: path.clone(),
                reason: "Missing YAML front matter".to_string(),
            })?
            .deserialize()
            .map_err(|e| ConfigError::MarkdownParse {
                path: path.clone(),
                reason: format!("Failed to deserialize front matter: {}", e),
            })?;

        if profiles.iter().any(|p| p.agent == profile.agent) {
            return Err(ConfigError::InvalidConfig {
                path,
                reason: format!("a profile for '{}' is already defined", profile.agent.slug()),
            });
        }

        // The Markdown body is the system prompt.
        profile.system_prompt = result.content.trim().to_string();
        profiles.push(profile);
    }

    Ok(profiles)
}

/// Loads warning rules from `rules/*.yaml` and `rules/*.yml`, in file-name order.
fn load_rules(config_dir: &Path) -> ConfigResult<Vec<WarningRuleDef>> {
    let mut rules = Vec::new();

    for path in files_with_extension(&config_dir.join("rules"), &["yaml", "yml"])? {
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
            path: path.clone(),
            source,
        })?;

        // An empty file is an empty list.
        if content.trim().is_empty() {
            continue;
        }

        let file_rules: Vec<WarningRuleDef> =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
                path: path.clone(),
                source,
            })?;

        rules.extend(file_rules);
    }

    Ok(rules)
}
