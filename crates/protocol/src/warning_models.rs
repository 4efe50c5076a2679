//! Safety warning models and warning rule definitions.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Escalation level of a warning.
///
/// Variants are declared in ascending order so the derived `Ord` ranks
/// `Emergency` highest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Urgent,
    Emergency,
}

/// Where the evidence for a warning was found.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum WarningSource {
    /// The request itself (symptoms, goals, notes).
    RequestScan,

    /// The text produced by one or more agents.
    AgentOutputScan,
}

/// A safety-critical message surfaced to the user independently of agent advice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Warning {
    pub text: String,
    pub severity: Severity,
    pub source: WarningSource,
}

/// Which text a warning rule inspects.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    Symptoms,
    Goals,
    LifestyleNotes,
    /// Every request text field.
    Request,
    /// Summaries and recommendations of Ok agent results.
    AgentOutput,
}

impl RuleScope {
    /// Warning source reported for matches in this scope.
    pub fn source(self) -> WarningSource {
        match self {
            Self::AgentOutput => WarningSource::AgentOutputScan,
            _ => WarningSource::RequestScan,
        }
    }
}

/// How a rule's pattern is compared with the inspected text.
///
/// All modes are case-insensitive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The pattern appears anywhere in the text.
    #[default]
    Contains,
    /// The whole (trimmed) text equals the pattern.
    Exact,
    /// The pattern is a regular expression.
    Regex,
}

/// Declarative warning rule, as written in `.openlinkage/rules/*.yaml`.
///
/// # Example
///
/// ```yaml
/// - name: dizziness
///   scope: symptoms
///   match: contains
///   pattern: dizzy
///   text: Persistent dizziness should be reviewed by a clinician.
///   severity: URGENT
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct WarningRuleDef {
    /// Identifier used in logs and `openlinkage rules` output.
    pub name: String,

    pub scope: RuleScope,

    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    pub pattern: String,

    /// Warning text emitted when the rule matches.
    pub text: String,

    pub severity: Severity,
}
