//! Agent factory for creating agent instances from configuration.

use crate::agents::adapters::{ExerciseAgent, HealthButlerAgent, MedicationAgent, NutritionAgent};
use crate::agents::backend::SharedBackend;
use crate::agents::base::Agent;
use crate::agents::narration::Narration;
use crate::config::AppConfig;
use ol_protocol::agent_models::{AgentKind, AgentProfile};
use std::sync::Arc;

/// Factory for creating agent instances.
///
/// Every [`AgentKind`] maps to exactly one implementation. Adding a variant
/// means adding a match arm here; the dispatcher is untouched.
pub struct AgentFactory;

impl AgentFactory {
    /// Create one agent.
    ///
    /// # Arguments
    ///
    /// * `kind` - The agent variant to build
    /// * `profile` - Optional profile from `.openlinkage/agents/*.md`; its body
    ///   replaces the default system prompt
    /// * `backend` - Shared model backend; without it the agent answers from
    ///   its rule table alone
    ///
    /// # Examples
    ///
    /// ```
    /// use ol_core::agents::AgentFactory;
    /// use ol_protocol::agent_models::AgentKind;
    ///
    /// let agent = AgentFactory::create(AgentKind::Nutrition, None, None);
    /// assert_eq!(agent.kind(), AgentKind::Nutrition);
    /// ```
    pub fn create(
        kind: AgentKind,
        profile: Option<&AgentProfile>,
        backend: Option<&SharedBackend>,
    ) -> Arc<dyn Agent> {
        let narration = backend.map(|backend| {
            let system_prompt = profile
                .map(|p| p.system_prompt.trim())
                .filter(|prompt| !prompt.is_empty())
                .unwrap_or_else(|| Self::default_system_prompt(kind));
            Narration::new(backend.clone(), system_prompt)
        });

        match (kind, narration) {
            (AgentKind::HealthButler, Some(n)) => Arc::new(HealthButlerAgent::with_narration(n)),
            (AgentKind::HealthButler, None) => Arc::new(HealthButlerAgent::new()),
            (AgentKind::Nutrition, Some(n)) => Arc::new(NutritionAgent::with_narration(n)),
            (AgentKind::Nutrition, None) => Arc::new(NutritionAgent::new()),
            (AgentKind::Exercise, Some(n)) => Arc::new(ExerciseAgent::with_narration(n)),
            (AgentKind::Exercise, None) => Arc::new(ExerciseAgent::new()),
            (AgentKind::Medication, Some(n)) => Arc::new(MedicationAgent::with_narration(n)),
            (AgentKind::Medication, None) => Arc::new(MedicationAgent::new()),
        }
    }

    /// Create the configured agents in canonical order.
    pub fn create_all(config: &AppConfig, backend: Option<&SharedBackend>) -> Vec<Arc<dyn Agent>> {
        config
            .global
            .agents
            .iter()
            .map(|&kind| Self::create(kind, config.profile_for(kind), backend))
            .collect()
    }

    /// System prompt used when no profile overrides it.
    pub fn default_system_prompt(kind: AgentKind) -> &'static str {
        match kind {
            AgentKind::HealthButler => {
                "You are a health butler. Coach daily routines, sleep and stress habits in plain language."
            }
            AgentKind::Nutrition => {
                "You are a nutrition coach. Give practical diet and hydration guidance without diagnosing."
            }
            AgentKind::Exercise => {
                "You are an exercise coach. Plan safe, progressive activity that fits the user's preferences."
            }
            AgentKind::Medication => {
                "You are a medication safety assistant. Never prescribe; share safety reminders and clinician hand-off cues."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::backend::CliBackend;
    use ol_protocol::agent_models::AgentStatus;
    use ol_protocol::config_models::GlobalConfig;
    use ol_protocol::request_models::AgentRequest;

    #[test]
    fn test_factory_creates_each_kind() {
        for kind in AgentKind::CANONICAL {
            let agent = AgentFactory::create(kind, None, None);
            assert_eq!(agent.kind(), kind);
        }
    }

    #[test]
    fn test_factory_create_all_follows_config_order() {
        let config = AppConfig {
            global: GlobalConfig {
                agents: vec![AgentKind::Medication, AgentKind::Nutrition],
                ..GlobalConfig::default()
            },
            ..AppConfig::default()
        };

        let agents = AgentFactory::create_all(&config, None);
        let kinds: Vec<_> = agents.iter().map(|a| a.kind()).collect();

        assert_eq!(kinds, vec![AgentKind::Medication, AgentKind::Nutrition]);
    }

    #[test]
    fn test_factory_returns_arc() {
        let agent1 = AgentFactory::create(AgentKind::Exercise, None, None);
        let agent2 = agent1.clone();

        assert_eq!(Arc::strong_count(&agent1), 2);
        assert_eq!(Arc::strong_count(&agent2), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_backend_reply_becomes_summary() {
        // `cat` echoes the prompt, whose first line is the system prompt.
        let backend = SharedBackend::new(Arc::new(CliBackend::new("cat", vec![])), 2);
        let profile = AgentProfile {
            agent: AgentKind::Nutrition,
            description: String::new(),
            system_prompt: "Echo coach".to_string(),
        };

        let agent = AgentFactory::create(AgentKind::Nutrition, Some(&profile), Some(&backend));
        let result = agent
            .advise(&AgentRequest::new("abc").with_goal("weight management"))
            .await;

        assert_eq!(result.status, AgentStatus::Ok);
        assert_eq!(result.summary, "Echo coach");
        assert_eq!(result.recommendations.len(), 3);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_backend_failure_yields_failed_result() {
        let backend = SharedBackend::new(
            Arc::new(CliBackend::new("sh", vec!["-c".to_string(), "exit 2".to_string()])),
            2,
        );

        let agent = AgentFactory::create(AgentKind::Exercise, None, Some(&backend));
        let result = agent.advise(&AgentRequest::new("abc").with_goal("stamina")).await;

        assert_eq!(result.status, AgentStatus::Failed);
        assert!(result.error_detail.is_some());
    }
}
