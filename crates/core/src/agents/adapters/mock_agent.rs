//! Mock agent implementation for testing.

use crate::agents::base::{settle, Advice, Agent, AgentError};
use async_trait::async_trait;
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Behavior {
    Succeed,
    Fail(String),
    Delay(Duration),
    Hang,
    Panic,
}

/// Scriptable agent for tests and demos.
///
/// Counts its invocations so tests can assert that an agent was (or was not)
/// reached.
#[derive(Debug, Clone)]
pub struct MockAgent {
    kind: AgentKind,
    behavior: Behavior,
    advice: Advice,
    calls: Arc<AtomicUsize>,
}

impl MockAgent {
    fn with_behavior(kind: AgentKind, behavior: Behavior) -> Self {
        Self {
            kind,
            behavior,
            advice: Advice::new(format!("Mock advice from {kind}"))
                .with_recommendation("Mock recommendation"),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn success(kind: AgentKind) -> Self {
        Self::with_behavior(kind, Behavior::Succeed)
    }

    pub fn failing(kind: AgentKind) -> Self {
        Self::with_behavior(kind, Behavior::Fail("Mock failure".to_string()))
    }

    /// Succeeds after sleeping for `delay`.
    pub fn delayed(kind: AgentKind, delay: Duration) -> Self {
        Self::with_behavior(kind, Behavior::Delay(delay))
    }

    /// Never completes.
    pub fn hanging(kind: AgentKind) -> Self {
        Self::with_behavior(kind, Behavior::Hang)
    }

    /// Panics when invoked. Breaks the [`Agent`] contract on purpose.
    pub fn panicking(kind: AgentKind) -> Self {
        Self::with_behavior(kind, Behavior::Panic)
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.advice.summary = summary.into();
        self
    }

    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.advice.recommendations = recommendations;
        self
    }

    /// Number of times `advise` has been called on this agent or its clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn kind(&self) -> AgentKind {
        self.kind
    }

    async fn advise(&self, _request: &AgentRequest) -> AgentResult {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let outcome = match &self.behavior {
            Behavior::Succeed => Ok(self.advice.clone()),
            Behavior::Fail(message) => Err(AgentError::ExecutionError(message.clone())),
            Behavior::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(self.advice.clone())
            }
            Behavior::Hang => {
                std::future::pending::<()>().await;
                Ok(self.advice.clone())
            }
            Behavior::Panic => panic!("mock agent {} panicked", self.kind),
        };
        settle(self.kind, outcome)
    }
}
