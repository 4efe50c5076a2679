//! Medication safety agent.
//!
//! Never prescribes. Shares safety guardrails and prompts the user to consult
//! a clinician or pharmacist.

use crate::agents::base::{settle, Advice, Agent};
use crate::agents::narration::{narrate_or_keep, Narration};
use async_trait::async_trait;
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;

/// Symptoms that must be seen in person before any medication change.
pub const RED_FLAG_SYMPTOMS: [&str; 3] = ["chest pain", "shortness of breath", "severe headache"];

#[derive(Debug, Clone, Default)]
pub struct MedicationAgent {
    narration: Option<Narration>,
}

impl MedicationAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_narration(narration: Narration) -> Self {
        Self {
            narration: Some(narration),
        }
    }

    /// Whether any symptom is, in full, one of [`RED_FLAG_SYMPTOMS`].
    pub fn has_red_flag(request: &AgentRequest) -> bool {
        request.symptoms.iter().any(|symptom| {
            let symptom = symptom.trim().to_lowercase();
            RED_FLAG_SYMPTOMS.contains(&symptom.as_str())
        })
    }

    pub fn rule_advice(request: &AgentRequest) -> Advice {
        let red_flag = Self::has_red_flag(request);
        let summary = if red_flag {
            "Red-flag symptoms reported; seek in-person care before changing any medication."
        } else {
            "No prescribing; medication safety reminders and clinician hand-off cues."
        };

        let mut advice = Advice::new(summary)
            .with_recommendation("Avoid self-prescribing antibiotics; consult a clinician first.")
            .with_recommendation(
                "Keep a list of current medications to share with healthcare providers.",
            );
        if red_flag {
            advice.push_unique(
                "Seek urgent care for chest pain, severe headache, or breathing difficulty.",
            );
        }
        if request
            .lifestyle_notes
            .as_deref()
            .is_some_and(|notes| !notes.trim().is_empty())
        {
            advice.push_unique("Discuss lifestyle supplements with a pharmacist to check interactions.");
        }
        advice
    }
}

#[async_trait]
impl Agent for MedicationAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Medication
    }

    async fn advise(&self, request: &AgentRequest) -> AgentResult {
        let baseline = Self::rule_advice(request);
        let outcome =
            narrate_or_keep(self.narration.as_ref(), self.kind(), request, baseline).await;
        settle(self.kind(), outcome)
    }
}
