//! Concurrent agent dispatch.
//!
//! Every agent runs in its own tokio task against a shared read-only request.
//! Each task carries its own timeout, so a slow agent is cancelled on its own
//! and its siblings keep running. Results are collated back into the order the
//! agents were configured, never completion order.

use crate::agents::base::Agent;
use futures::future::join_all;
use ol_protocol::agent_models::{AgentKind, AgentResult, AgentStatus};
use ol_protocol::request_models::AgentRequest;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Fans one request out to a set of agents.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    timeout: Duration,
}

impl Dispatcher {
    /// Create a dispatcher with a per-agent timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invoke every agent and return one result per agent, in input order.
    ///
    /// Never fails: an agent that errors, panics or exceeds the timeout is
    /// represented by a `Failed` or `TimedOut` result in its slot.
    pub async fn dispatch(
        &self,
        request: Arc<AgentRequest>,
        agents: &[Arc<dyn Agent>],
    ) -> Vec<AgentResult> {
        let kinds: Vec<AgentKind> = agents.iter().map(|agent| agent.kind()).collect();

        let handles: Vec<_> = agents
            .iter()
            .map(|agent| {
                let agent = Arc::clone(agent);
                let request = Arc::clone(&request);
                let timeout = self.timeout;
                tokio::spawn(async move {
                    let kind = agent.kind();
                    match tokio::time::timeout(timeout, agent.advise(&request)).await {
                        Ok(result) => conform(kind, result),
                        Err(_) => {
                            warn!(agent = %kind, timeout = ?timeout, "agent timed out");
                            AgentResult::timed_out(
                                kind,
                                format!("{kind} did not respond within {}ms", timeout.as_millis()),
                            )
                        }
                    }
                })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(kinds)
            .map(|(joined, kind)| match joined {
                Ok(result) => {
                    debug!(agent = %kind, status = ?result.status, "agent finished");
                    result
                }
                Err(e) if e.is_panic() => {
                    warn!(agent = %kind, "agent panicked");
                    AgentResult::failed(kind, "agent panicked")
                }
                Err(e) => {
                    warn!(agent = %kind, error = %e, "agent task cancelled");
                    AgentResult::failed(kind, "agent task was cancelled")
                }
            })
            .collect()
    }
}

/// Force a result into its dispatch slot's shape.
///
/// The slot's kind wins over whatever the agent reported, and `error_detail`
/// is present exactly when the status is not `Ok`.
fn conform(kind: AgentKind, mut result: AgentResult) -> AgentResult {
    if result.agent_name != kind {
        warn!(expected = %kind, reported = %result.agent_name, "agent reported a different name");
        result.agent_name = kind;
    }
    match result.status {
        AgentStatus::Ok => result.error_detail = None,
        _ if result.error_detail.is_none() => {
            result.error_detail = Some("no error detail reported".to_string());
        }
        _ => {}
    }
    result
}
