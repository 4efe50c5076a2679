//! Health butler: daily routine and sleep coaching.

use crate::agents::base::{settle, Advice, Agent};
use crate::agents::narration::{narrate_or_keep, Narration};
use async_trait::async_trait;
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;

/// Routine coaching agent.
#[derive(Debug, Clone, Default)]
pub struct HealthButlerAgent {
    narration: Option<Narration>,
}

impl HealthButlerAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_narration(narration: Narration) -> Self {
        Self {
            narration: Some(narration),
        }
    }

    /// Rule-table advice for `request`.
    pub fn rule_advice(request: &AgentRequest) -> Advice {
        let mut advice =
            Advice::new("Daily routine plan centered on consistent sleep and evening wind-down.")
                .with_recommendation("Follow a consistent sleep schedule to support hormone balance.")
                .with_recommendation("Limit screen time before bed to improve sleep quality.");

        if let Some(notes) = request.lifestyle_notes.as_deref().filter(|n| !n.trim().is_empty()) {
            advice.push_unique(format!("Incorporate user note: {notes}"));
        }

        advice
    }
}

#[async_trait]
impl Agent for HealthButlerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::HealthButler
    }

    async fn advise(&self, request: &AgentRequest) -> AgentResult {
        let baseline = Self::rule_advice(request);
        let outcome =
            narrate_or_keep(self.narration.as_ref(), self.kind(), request, baseline).await;
        settle(self.kind(), outcome)
    }
}
