//! Configuration models that aggregate all settings.
//!
//! This module provides the unified `AppConfig` structure that combines
//! global settings, agent profiles, and warning rule files into a single
//! configuration object.

use crate::warnings::builtin_rule_defs;
use ol_protocol::agent_models::{AgentKind, AgentProfile};
use ol_protocol::config_models::GlobalConfig;
use ol_protocol::warning_models::WarningRuleDef;
use std::time::Duration;

/// Unified application configuration loaded from `.openlinkage/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Global settings
/// - `agents/*.md`: Agent profiles
/// - `rules/*.yaml`: Additional warning rules
///
/// # Example
///
/// ```rust,no_run
/// use ol_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} profiles and {} rules",
///          config.profiles.len(),
///          config.rules.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// Agent profiles loaded from `agents/*.md`.
    pub profiles: Vec<AgentProfile>,

    /// Rules loaded from `rules/*.yaml`, in file-name order.
    pub rules: Vec<WarningRuleDef>,
}

impl AppConfig {
    /// Profile configuring `kind`, if one was loaded.
    pub fn profile_for(&self, kind: AgentKind) -> Option<&AgentProfile> {
        self.profiles.iter().find(|profile| profile.agent == kind)
    }

    pub fn agent_timeout(&self) -> Duration {
        Duration::from_millis(self.global.agent_timeout_ms)
    }

    /// The active rule table: built-ins first (unless disabled), then rule files.
    pub fn warning_rules(&self) -> Vec<WarningRuleDef> {
        let mut rules = if self.global.builtin_rules {
            builtin_rule_defs()
        } else {
            Vec::new()
        };
        rules.extend(self.rules.iter().cloned());
        rules
    }
}
