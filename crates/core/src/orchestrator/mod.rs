//! Top-level analysis entry point.
//!
//! An analysis moves through two states. A validated request is `Pending`;
//! once dispatch, warning detection and aggregation are done the response is
//! `Complete`. Nothing is persisted in between: the call either returns a
//! full response or a single request-level error.

use crate::agents::backend::SharedBackend;
use crate::agents::base::Agent;
use crate::agents::factory::AgentFactory;
use crate::aggregate::aggregate;
use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::memory::{ContextRecord, ContextStore};
use crate::validation::{DefaultValidator, RequestValidator};
use crate::warnings::WarningDetector;
use ol_protocol::agent_models::AgentKind;
use ol_protocol::config_models::DEFAULT_AGENT_TIMEOUT_MS;
use ol_protocol::events::{AnalysisState, Event};
use ol_protocol::request_models::AgentRequest;
use ol_protocol::response_models::AnalysisResponse;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::Sender;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Composes validation, dispatch, warning detection and aggregation.
pub struct Orchestrator {
    agents: Vec<Arc<dyn Agent>>,
    kinds: Vec<AgentKind>,
    dispatcher: Dispatcher,
    detector: WarningDetector,
    validator: Arc<dyn RequestValidator>,
    context_store: Option<Arc<dyn ContextStore>>,
    events: Option<Sender<Event>>,
}

impl Orchestrator {
    pub fn builder() -> OrchestratorBuilder {
        OrchestratorBuilder::default()
    }

    /// Build an orchestrator from loaded configuration.
    ///
    /// Agents are created through [`AgentFactory`] and share `backend` when
    /// one is given. The rule table is the built-in rules (unless disabled)
    /// followed by the configured rule files.
    pub fn from_config(
        config: &AppConfig,
        backend: Option<&SharedBackend>,
    ) -> OrchestratorResult<Self> {
        OrchestratorBuilder::from_config(config, backend)?.build()
    }

    /// Configured agents, in canonical order.
    pub fn agent_kinds(&self) -> &[AgentKind] {
        &self.kinds
    }

    pub fn detector(&self) -> &WarningDetector {
        &self.detector
    }

    pub fn timeout(&self) -> Duration {
        self.dispatcher.timeout()
    }

    /// Run one analysis.
    ///
    /// # Errors
    ///
    /// - [`OrchestratorError::Validation`] if the request is rejected; no agent
    ///   is invoked
    /// - [`OrchestratorError::AggregationInconsistency`] if dispatch broke its
    ///   one-result-per-agent contract
    ///
    /// Agent failures and timeouts are not errors: they appear in the
    /// response as non-`Ok` results.
    pub async fn analyze(&self, request: AgentRequest) -> OrchestratorResult<AnalysisResponse> {
        let request_id = Uuid::new_v4();
        let span = info_span!("analyze", %request_id);
        self.run(request_id, request).instrument(span).await
    }

    async fn run(
        &self,
        request_id: Uuid,
        request: AgentRequest,
    ) -> OrchestratorResult<AnalysisResponse> {
        let request = Arc::new(self.validator.validate(request)?);
        debug!(user_id = %request.user_id, agents = self.agents.len(), "request accepted");

        self.emit(Event::StatusUpdate {
            request_id,
            state: AnalysisState::Pending,
        });

        let results = self.dispatcher.dispatch(Arc::clone(&request), &self.agents).await;
        for result in &results {
            self.emit(Event::AgentFinished {
                request_id,
                agent: result.agent_name,
                status: result.status,
            });
        }

        let warnings = self.detector.detect(&request, &results);
        for warning in &warnings {
            self.emit(Event::WarningRaised {
                request_id,
                warning: warning.clone(),
            });
        }

        let response = aggregate(&request.user_id, &self.kinds, results, warnings)?;

        if let Some(store) = &self.context_store {
            if let Err(e) = store.save(ContextRecord::from_response(&response)).await {
                warn!(error = %e, "failed to store analysis context");
            }
        }

        self.emit(Event::StatusUpdate {
            request_id,
            state: AnalysisState::Complete,
        });

        info!(
            ok = response.responses.iter().filter(|r| r.is_ok()).count(),
            agents = response.responses.len(),
            warnings = response.warnings.len(),
            "analysis complete"
        );
        Ok(response)
    }

    /// Forward a progress event without waiting on the observer.
    fn emit(&self, event: Event) {
        let Some(tx) = &self.events else {
            return;
        };
        match tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                debug!(request_id = %event.request_id(), "progress channel full, event dropped");
            }
            Err(TrySendError::Closed(_)) => debug!("progress channel closed"),
        }
    }
}

/// Builder for [`Orchestrator`].
pub struct OrchestratorBuilder {
    agents: Vec<Arc<dyn Agent>>,
    timeout: Duration,
    detector: Option<WarningDetector>,
    validator: Arc<dyn RequestValidator>,
    context_store: Option<Arc<dyn ContextStore>>,
    events: Option<Sender<Event>>,
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            timeout: Duration::from_millis(DEFAULT_AGENT_TIMEOUT_MS),
            detector: None,
            validator: Arc::new(DefaultValidator),
            context_store: None,
            events: None,
        }
    }
}

impl OrchestratorBuilder {
    /// A builder preloaded from configuration. See [`Orchestrator::from_config`].
    pub fn from_config(
        config: &AppConfig,
        backend: Option<&SharedBackend>,
    ) -> OrchestratorResult<Self> {
        let detector = WarningDetector::from_defs(&config.warning_rules())?;
        Ok(Self::default()
            .agents(AgentFactory::create_all(config, backend))
            .timeout(config.agent_timeout())
            .detector(detector))
    }

    /// Agents to dispatch to. Their order is the canonical order.
    pub fn agents(mut self, agents: Vec<Arc<dyn Agent>>) -> Self {
        self.agents = agents;
        self
    }

    pub fn agent(mut self, agent: Arc<dyn Agent>) -> Self {
        self.agents.push(agent);
        self
    }

    /// Per-agent timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Warning rule table. Defaults to the built-in rules.
    pub fn detector(mut self, detector: WarningDetector) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn validator(mut self, validator: Arc<dyn RequestValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn context_store(mut self, store: Arc<dyn ContextStore>) -> Self {
        self.context_store = Some(store);
        self
    }

    /// Forward progress events to `tx`.
    ///
    /// Events are sent without waiting. When the channel's buffer is full the
    /// event is dropped and the analysis carries on.
    pub fn events(mut self, tx: Sender<Event>) -> Self {
        self.events = Some(tx);
        self
    }

    /// # Errors
    ///
    /// - [`OrchestratorError::NoAgentsConfigured`] for an empty agent set
    /// - [`OrchestratorError::DuplicateAgent`] when two agents share a kind
    /// - [`OrchestratorError::Rule`] if the built-in rules fail to compile
    pub fn build(self) -> OrchestratorResult<Orchestrator> {
        if self.agents.is_empty() {
            return Err(OrchestratorError::NoAgentsConfigured);
        }

        let kinds: Vec<AgentKind> = self.agents.iter().map(|agent| agent.kind()).collect();
        let mut seen = HashSet::new();
        if let Some(duplicate) = kinds.iter().find(|kind| !seen.insert(**kind)) {
            return Err(OrchestratorError::DuplicateAgent(*duplicate));
        }

        let detector = match self.detector {
            Some(detector) => detector,
            None => WarningDetector::with_builtin_rules()?,
        };

        Ok(Orchestrator {
            agents: self.agents,
            kinds,
            dispatcher: Dispatcher::new(self.timeout),
            detector,
            validator: self.validator,
            context_store: self.context_store,
            events: self.events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::adapters::MockAgent;
    use crate::memory::InMemoryContextStore;
    use crate::validation::ValidationError;
    use ol_protocol::agent_models::AgentStatus;
    use ol_protocol::response_models::NO_RECOMMENDATIONS;

    fn request() -> AgentRequest {
        AgentRequest::new("abc").with_goal("stability")
    }

    #[test]
    fn test_build_requires_agents() {
        let result = Orchestrator::builder().build();
        assert!(matches!(result, Err(OrchestratorError::NoAgentsConfigured)));
    }

    #[test]
    fn test_build_rejects_duplicate_kinds() {
        let result = Orchestrator::builder()
            .agent(Arc::new(MockAgent::success(AgentKind::Exercise)))
            .agent(Arc::new(MockAgent::success(AgentKind::Exercise)))
            .build();

        assert!(matches!(
            result,
            Err(OrchestratorError::DuplicateAgent(AgentKind::Exercise))
        ));
    }

    #[tokio::test]
    async fn test_invalid_request_never_dispatches() {
        let agent = MockAgent::success(AgentKind::Nutrition);
        let orchestrator = Orchestrator::builder()
            .agent(Arc::new(agent.clone()))
            .build()
            .unwrap();

        let result = orchestrator.analyze(AgentRequest::new("abc")).await;

        assert!(matches!(
            result,
            Err(OrchestratorError::Validation(ValidationError::NothingToAnalyze))
        ));
        assert_eq!(agent.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_failures_still_respond() {
        let orchestrator = Orchestrator::builder()
            .agent(Arc::new(MockAgent::failing(AgentKind::HealthButler)))
            .agent(Arc::new(MockAgent::hanging(AgentKind::Nutrition)))
            .timeout(Duration::from_millis(30))
            .build()
            .unwrap();

        let response = orchestrator.analyze(request()).await.unwrap();

        assert_eq!(response.overall_summary, NO_RECOMMENDATIONS);
        assert_eq!(response.responses[0].status, AgentStatus::Failed);
        assert_eq!(response.responses[1].status, AgentStatus::TimedOut);
    }

    #[tokio::test]
    async fn test_context_store_records_response() {
        let store = Arc::new(InMemoryContextStore::new());
        let orchestrator = Orchestrator::builder()
            .agent(Arc::new(MockAgent::success(AgentKind::Exercise).with_summary("Move.")))
            .context_store(store.clone())
            .build()
            .unwrap();

        orchestrator.analyze(request()).await.unwrap();

        let history = store.history("abc").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].overall_summary, "ExerciseAgent: Move.");
    }

    #[test]
    fn test_from_config_uses_configured_agents_and_timeout() {
        let mut config = AppConfig::default();
        config.global.agents = vec![AgentKind::Exercise, AgentKind::HealthButler];
        config.global.agent_timeout_ms = 1500;

        let orchestrator = Orchestrator::from_config(&config, None).unwrap();

        assert_eq!(
            orchestrator.agent_kinds(),
            &[AgentKind::Exercise, AgentKind::HealthButler]
        );
        assert_eq!(orchestrator.timeout(), Duration::from_millis(1500));
        assert_eq!(
            orchestrator.detector().rules().len(),
            crate::warnings::builtin_rule_defs().len()
        );
    }

    #[test]
    fn test_from_config_without_agents() {
        let mut config = AppConfig::default();
        config.global.agents.clear();

        let result = Orchestrator::from_config(&config, None);

        assert!(matches!(result, Err(OrchestratorError::NoAgentsConfigured)));
    }
}
