//! Response aggregation.
//!
//! The overall summary is a pure function of the `Ok` results, taken in
//! canonical agent order as `"<AgentName>: <summary>"` segments joined by
//! [`SUMMARY_DELIMITER`]. When no agent succeeded it is the
//! [`NO_RECOMMENDATIONS`] sentinel.

use crate::error::{OrchestratorError, OrchestratorResult};
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::response_models::{AnalysisResponse, NO_RECOMMENDATIONS, SUMMARY_DELIMITER};
use ol_protocol::warning_models::Warning;

/// Build the overall summary from results already in canonical order.
pub fn overall_summary(responses: &[AgentResult]) -> String {
    let segments: Vec<String> = responses
        .iter()
        .filter(|result| result.is_ok())
        .map(|result| format!("{}: {}", result.agent_name, result.summary))
        .collect();

    if segments.is_empty() {
        NO_RECOMMENDATIONS.to_string()
    } else {
        segments.join(SUMMARY_DELIMITER)
    }
}

/// Check that `responses` has exactly one result per expected agent, in order.
pub fn check_consistency(expected: &[AgentKind], responses: &[AgentResult]) -> OrchestratorResult<()> {
    if expected.len() != responses.len() {
        return Err(OrchestratorError::AggregationInconsistency(format!(
            "expected {} results, got {}",
            expected.len(),
            responses.len()
        )));
    }

    if let Some((position, (kind, result))) = expected
        .iter()
        .zip(responses)
        .enumerate()
        .find(|(_, (kind, result))| **kind != result.agent_name)
    {
        return Err(OrchestratorError::AggregationInconsistency(format!(
            "slot {position} should hold {kind}, found {}",
            result.agent_name
        )));
    }

    Ok(())
}

/// Assemble the final response.
///
/// Fails with [`OrchestratorError::AggregationInconsistency`] when the results
/// do not line up with `expected`.
pub fn aggregate(
    user_id: &str,
    expected: &[AgentKind],
    responses: Vec<AgentResult>,
    warnings: Vec<Warning>,
) -> OrchestratorResult<AnalysisResponse> {
    check_consistency(expected, &responses)?;

    Ok(AnalysisResponse {
        user_id: user_id.to_string(),
        overall_summary: overall_summary(&responses),
        warnings,
        responses,
    })
}
