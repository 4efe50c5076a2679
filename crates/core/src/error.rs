//! Request-level errors of the analysis pipeline.
//!
//! Agent failures and timeouts never appear here: they are recovered inside
//! the dispatch and reported in the affected agent's result.

use crate::validation::ValidationError;
use crate::warnings::RuleError;
use ol_protocol::agent_models::AgentKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// The request was rejected before dispatch.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("No agents configured")]
    NoAgentsConfigured,

    #[error("Agent {0} is configured more than once")]
    DuplicateAgent(AgentKind),

    /// Dispatch returned results that do not line up with the configured
    /// agents. Indicates a bug, never a user error.
    #[error("Aggregation inconsistency: {0}")]
    AggregationInconsistency(String),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
