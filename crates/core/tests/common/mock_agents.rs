//! Test-only agents that complement `ol_core::agents::MockAgent`.

use async_trait::async_trait;
use ol_core::agents::{settle, Advice, Agent, MockAgent};
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;
use std::sync::Arc;

/// Repeats each symptom back as a recommendation.
///
/// Lets tests drive agent-output warning rules from the request.
#[allow(dead_code)]
pub struct EchoSymptomsAgent {
    pub kind: AgentKind,
}

#[async_trait]
impl Agent for EchoSymptomsAgent {
    fn kind(&self) -> AgentKind {
        self.kind
    }

    async fn advise(&self, request: &AgentRequest) -> AgentResult {
        let mut advice = Advice::new(format!("Reviewed {} symptoms", request.symptoms.len()));
        for symptom in &request.symptoms {
            advice.push_unique(format!("Monitor your {symptom}"));
        }
        settle(self.kind, Ok(advice))
    }
}

/// Reports a different agent name than the slot it was dispatched in.
#[allow(dead_code)]
pub struct MislabeledAgent {
    pub kind: AgentKind,
    pub reported: AgentKind,
}

#[async_trait]
impl Agent for MislabeledAgent {
    fn kind(&self) -> AgentKind {
        self.kind
    }

    async fn advise(&self, _request: &AgentRequest) -> AgentResult {
        AgentResult::ok(self.reported, "mislabeled", vec![])
    }
}

/// One succeeding mock per canonical agent kind.
#[allow(dead_code)]
pub fn succeeding_agents() -> Vec<Arc<dyn Agent>> {
    AgentKind::CANONICAL
        .into_iter()
        .map(|kind| Arc::new(MockAgent::success(kind)) as Arc<dyn Agent>)
        .collect()
}

/// Canonical mock agents with the slot for `kind` replaced by `agent`.
#[allow(dead_code)]
pub fn with_slot(kind: AgentKind, agent: Arc<dyn Agent>) -> Vec<Arc<dyn Agent>> {
    AgentKind::CANONICAL
        .into_iter()
        .map(|k| {
            if k == kind {
                Arc::clone(&agent)
            } else {
                Arc::new(MockAgent::success(k)) as Arc<dyn Agent>
            }
        })
        .collect()
}
