//! Base Agent trait and supporting types.

use async_trait::async_trait;
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;
use thiserror::Error;

/// Errors raised inside an agent or its backend.
///
/// These never cross the [`Agent`] boundary: agents fold them into a
/// `Failed` [`AgentResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Agent not available: {0}")]
    NotAvailable(String),
    #[error("Backend call failed: {0}")]
    BackendError(String),
    #[error("Output parsing error: {0}")]
    ParseError(String),
    #[error("Execution failed: {0}")]
    ExecutionError(String),
}

/// Advice produced by an agent before it is normalized into an [`AgentResult`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Advice {
    pub summary: String,
    pub recommendations: Vec<String>,
}

impl Advice {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Append a recommendation unless an identical one is already present.
    pub fn push_unique(&mut self, recommendation: impl Into<String>) {
        let recommendation = recommendation.into();
        if !self.recommendations.contains(&recommendation) {
            self.recommendations.push(recommendation);
        }
    }
}

/// Fold an agent's internal outcome into its public result.
pub fn settle(kind: AgentKind, outcome: Result<Advice, AgentError>) -> AgentResult {
    match outcome {
        Ok(advice) => AgentResult::ok(kind, advice.summary, advice.recommendations),
        Err(e) => {
            tracing::warn!(agent = %kind, error = %e, "agent failed");
            AgentResult::failed(kind, e.to_string())
        }
    }
}

/// An advisory agent.
///
/// `advise` must not panic or propagate errors: any internal failure is
/// returned as a `Failed` result. Bounding the call's duration is the
/// dispatcher's job.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Which variant this agent implements.
    fn kind(&self) -> AgentKind;

    async fn advise(&self, request: &AgentRequest) -> AgentResult;
}
