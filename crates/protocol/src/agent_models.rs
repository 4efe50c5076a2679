//! Agent identity and per-agent result models.
//!
//! Every advisory agent is one variant of the closed [`AgentKind`] set. The
//! result of invoking an agent is normalized into an [`AgentResult`], whether
//! the agent succeeded, failed, or ran out of time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The closed set of advisory agent variants.
///
/// Serialized with the agent's display name (e.g. `"NutritionAgent"`). Config
/// files may also use the short kebab-case form (e.g. `nutrition`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
pub enum AgentKind {
    /// Lifestyle and routine coaching.
    #[serde(rename = "HealthButlerAgent", alias = "health-butler")]
    HealthButler,

    /// Diet and hydration guidance.
    #[serde(rename = "NutritionAgent", alias = "nutrition")]
    Nutrition,

    /// Physical activity planning.
    #[serde(rename = "ExerciseAgent", alias = "exercise")]
    Exercise,

    /// Medication safety reminders and clinician hand-off cues.
    #[serde(rename = "MedicationAgent", alias = "medication")]
    Medication,
}

impl AgentKind {
    /// Default canonical agent order used when configuration does not override it.
    pub const CANONICAL: [AgentKind; 4] = [
        AgentKind::HealthButler,
        AgentKind::Nutrition,
        AgentKind::Exercise,
        AgentKind::Medication,
    ];

    /// Name used in responses and as the prefix of summary segments.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::HealthButler => "HealthButlerAgent",
            Self::Nutrition => "NutritionAgent",
            Self::Exercise => "ExerciseAgent",
            Self::Medication => "MedicationAgent",
        }
    }

    /// Short identifier used in configuration files and CLI output.
    pub fn slug(self) -> &'static str {
        match self {
            Self::HealthButler => "health-butler",
            Self::Nutrition => "nutrition",
            Self::Exercise => "exercise",
            Self::Medication => "medication",
        }
    }

    /// Parse either the display name or the slug, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::CANONICAL.into_iter().find(|kind| {
            kind.slug().eq_ignore_ascii_case(value) || kind.display_name().eq_ignore_ascii_case(value)
        })
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of a single agent invocation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    /// The agent produced advice.
    Ok,

    /// The agent (or its backend) reported an error.
    Failed,

    /// The agent did not answer within the dispatch timeout.
    TimedOut,
}

/// Normalized output of one agent.
///
/// `error_detail` is present exactly when `status` is not [`AgentStatus::Ok`].
/// Use the constructors to keep that invariant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentResult {
    /// Which agent produced this result.
    pub agent_name: AgentKind,

    /// One-line summary of the advice. Empty for non-Ok results.
    pub summary: String,

    /// Ordered recommendations. Empty for non-Ok results.
    #[serde(default)]
    pub recommendations: Vec<String>,

    pub status: AgentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl AgentResult {
    pub fn ok(agent_name: AgentKind, summary: impl Into<String>, recommendations: Vec<String>) -> Self {
        Self {
            agent_name,
            summary: summary.into(),
            recommendations,
            status: AgentStatus::Ok,
            error_detail: None,
        }
    }

    pub fn failed(agent_name: AgentKind, detail: impl Into<String>) -> Self {
        Self::unsuccessful(agent_name, AgentStatus::Failed, detail.into())
    }

    pub fn timed_out(agent_name: AgentKind, detail: impl Into<String>) -> Self {
        Self::unsuccessful(agent_name, AgentStatus::TimedOut, detail.into())
    }

    fn unsuccessful(agent_name: AgentKind, status: AgentStatus, detail: String) -> Self {
        Self {
            agent_name,
            summary: String::new(),
            recommendations: Vec::new(),
            status,
            error_detail: Some(detail),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == AgentStatus::Ok
    }
}

/// Per-agent profile loaded from `.openlinkage/agents/*.md`.
///
/// The front matter carries metadata and the Markdown body is the system
/// prompt handed to the model backend.
///
/// # Example
///
/// ```markdown
/// ---
/// agent: nutrition
/// description: Diet and hydration guidance
/// ---
///
/// You are a registered dietitian. Keep advice practical and brief.
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentProfile {
    /// Agent variant this profile configures.
    pub agent: AgentKind,

    #[serde(default)]
    pub description: String,

    /// The Markdown body of the profile file.
    #[serde(skip)]
    pub system_prompt: String,
}
