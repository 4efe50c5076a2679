//! Global configuration models for `.openlinkage/config.toml`.
//!
//! This module defines the structure of the global configuration file that
//! controls which agents run, how long they may take, and which model
//! backend (if any) they share.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

use crate::agent_models::AgentKind;

/// Default per-agent timeout in milliseconds.
pub const DEFAULT_AGENT_TIMEOUT_MS: u64 = 10_000;

/// Default bound on concurrent model backend calls.
pub const DEFAULT_MAX_CONCURRENT_CALLS: usize = 2;

/// Represents global settings from `.openlinkage/config.toml`.
///
/// # Example
///
/// ```toml
/// # .openlinkage/config.toml
/// agents = ["health-butler", "nutrition", "exercise", "medication"]
/// agent_timeout_ms = 10000
/// builtin_rules = true
///
/// [backend]
/// command = "ollama"
/// args = ["run", "llama3.2"]
/// max_concurrent_calls = 2
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// Configured agents, in canonical order.
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentKind>,

    /// Per-agent timeout for a single dispatch.
    #[serde(default = "default_agent_timeout_ms")]
    pub agent_timeout_ms: u64,

    /// Register the built-in warning rules ahead of any rule files.
    #[serde(default = "default_builtin_rules")]
    pub builtin_rules: bool,

    /// Optional model backend shared by all agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            agents: default_agents(),
            agent_timeout_ms: default_agent_timeout_ms(),
            builtin_rules: default_builtin_rules(),
            backend: None,
        }
    }
}

/// External model backend invoked as a subprocess.
///
/// The prompt is written to the command's stdin and its stdout is read as
/// the completion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct BackendConfig {
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Upper bound on in-flight backend calls across all agents.
    #[serde(default = "default_max_concurrent_calls")]
    pub max_concurrent_calls: usize,
}

fn default_agents() -> Vec<AgentKind> {
    AgentKind::CANONICAL.to_vec()
}

fn default_agent_timeout_ms() -> u64 {
    DEFAULT_AGENT_TIMEOUT_MS
}

fn default_builtin_rules() -> bool {
    true
}

fn default_max_concurrent_calls() -> usize {
    DEFAULT_MAX_CONCURRENT_CALLS
}
