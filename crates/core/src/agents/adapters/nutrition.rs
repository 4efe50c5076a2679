//! Nutrition: diet and hydration guidance.

use crate::agents::base::{settle, Advice, Agent};
use crate::agents::narration::{narrate_or_keep, Narration};
use async_trait::async_trait;
use ol_protocol::agent_models::{AgentKind, AgentResult};
use ol_protocol::request_models::AgentRequest;

#[derive(Debug, Clone, Default)]
pub struct NutritionAgent {
    narration: Option<Narration>,
}

impl NutritionAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_narration(narration: Narration) -> Self {
        Self {
            narration: Some(narration),
        }
    }

    /// Rule-table advice for `request`.
    ///
    /// Goals mentioning "weight" add a calorie-aware plan; goals starting with
    /// "muscle" add protein distribution.
    pub fn rule_advice(request: &AgentRequest) -> Advice {
        let goals = request.goals.join(" ").to_lowercase();
        let weight = goals.contains("weight");
        let muscle = request
            .goals
            .iter()
            .any(|goal| goal.trim().to_lowercase().starts_with("muscle"));

        let summary = if weight {
            "Calorie-aware, whole-food eating pattern to support weight goals."
        } else if muscle {
            "Protein-forward eating pattern to support muscle gain."
        } else {
            "Whole-food eating pattern with steady hydration."
        };

        let mut advice = Advice::new(summary)
            .with_recommendation("Prioritize vegetables and lean protein in daily meals.")
            .with_recommendation("Stay hydrated and limit sugary beverages.");
        if weight {
            advice.push_unique("Adopt a calorie-aware meal plan with balanced macros.");
        }
        if muscle {
            advice.push_unique("Increase protein intake and distribute across meals.");
        }
        advice
    }
}

#[async_trait]
impl Agent for NutritionAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Nutrition
    }

    async fn advise(&self, request: &AgentRequest) -> AgentResult {
        let baseline = Self::rule_advice(request);
        let outcome =
            narrate_or_keep(self.narration.as_ref(), self.kind(), request, baseline).await;
        settle(self.kind(), outcome)
    }
}
