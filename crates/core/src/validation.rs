//! Request validation and normalization.
//!
//! Validation happens before dispatch. A request rejected here never reaches
//! the agents.

use ol_protocol::request_models::AgentRequest;
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a request is rejected before dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user_id must not be empty")]
    EmptyUserId,

    #[error("at least one symptom or goal must be provided")]
    NothingToAnalyze,
}

/// Validates and normalizes an inbound request.
///
/// Implementations return the request that will actually be dispatched, which
/// may differ from the input (trimmed, deduplicated).
pub trait RequestValidator: Send + Sync {
    fn validate(&self, request: AgentRequest) -> Result<AgentRequest, ValidationError>;
}

/// Default schema rules for analysis requests.
///
/// - `user_id` is trimmed and must be non-empty
/// - symptom and goal entries are trimmed, blank entries dropped and
///   case-insensitive duplicates removed (first spelling wins)
/// - blank lifestyle notes become `None`
/// - at least one symptom or goal must remain
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl RequestValidator for DefaultValidator {
    fn validate(&self, request: AgentRequest) -> Result<AgentRequest, ValidationError> {
        let user_id = request.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(ValidationError::EmptyUserId);
        }

        let symptoms = normalize_entries(request.symptoms);
        let goals = normalize_entries(request.goals);
        if symptoms.is_empty() && goals.is_empty() {
            return Err(ValidationError::NothingToAnalyze);
        }

        let lifestyle_notes = request
            .lifestyle_notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        Ok(AgentRequest {
            user_id,
            symptoms,
            goals,
            lifestyle_notes,
        })
    }
}

/// A validator that accepts every request unchanged.
///
/// Useful when an upstream layer has already validated the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughValidator;

impl RequestValidator for PassthroughValidator {
    fn validate(&self, request: AgentRequest) -> Result<AgentRequest, ValidationError> {
        Ok(request)
    }
}

fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .collect()
}
