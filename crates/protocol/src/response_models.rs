//! Aggregated analysis response.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::agent_models::AgentResult;
use crate::warning_models::Warning;

/// Overall summary used when no agent produced advice.
///
/// Distinct from the empty string so "no data" is never confused with an
/// empty summary.
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

/// Separator between `"<AgentName>: <summary>"` segments of the overall summary.
pub const SUMMARY_DELIMITER: &str = " | ";

/// Response returned for one analysis request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AnalysisResponse {
    pub user_id: String,

    /// `" | "`-joined summaries of Ok agents, or [`NO_RECOMMENDATIONS`].
    pub overall_summary: String,

    /// Deduplicated warnings, most severe first.
    pub warnings: Vec<Warning>,

    /// One result per configured agent, in canonical agent order.
    pub responses: Vec<AgentResult>,
}

impl AnalysisResponse {
    /// Highest severity among the warnings, if any.
    pub fn max_severity(&self) -> Option<crate::warning_models::Severity> {
        self.warnings.iter().map(|w| w.severity).max()
    }
}
