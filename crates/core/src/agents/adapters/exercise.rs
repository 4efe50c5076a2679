//! Exercise: physical activity planning.

use crate::agents::base::{settle, Advice, Agent};
use crate::agents::narration::{narrate_or_keep, Narration};
use async_trait::async_trait;
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;

#[derive(Debug, Clone, Default)]
pub struct ExerciseAgent {
    narration: Option<Narration>,
}

impl ExerciseAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_narration(narration: Narration) -> Self {
        Self {
            narration: Some(narration),
        }
    }

    pub fn rule_advice(request: &AgentRequest) -> Advice {
        let fatigue = request.symptoms.join(" ").to_lowercase().contains("fatigue");
        let evening = request
            .lifestyle_notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains("evening"));

        let summary = if fatigue {
            "Gradual, low-impact activity plan that respects current fatigue."
        } else {
            "Weekly activity plan balancing cardio and strength."
        };

        let mut advice = Advice::new(summary)
            .with_recommendation("Include 150 minutes of moderate exercise per week.")
            .with_recommendation("Add two strength sessions to support muscle health.");
        if fatigue {
            advice.push_unique("Start with low-impact routines and gradually increase intensity.");
        }
        if evening {
            advice.push_unique("Schedule lighter mobility work in the evening to match preferences.");
        }
        advice
    }
}

#[async_trait]
impl Agent for ExerciseAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Exercise
    }

    async fn advise(&self, request: &AgentRequest) -> AgentResult {
        let baseline = Self::rule_advice(request);
        let outcome =
            narrate_or_keep(self.narration.as_ref(), self.kind(), request, baseline).await;
        settle(self.kind(), outcome)
    }
}
