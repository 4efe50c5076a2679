//! Progress events emitted while an analysis runs.
//!
//! The orchestrator optionally forwards these through a channel so callers
//! (a UI, a log sink) can follow a request from `Pending` to `Complete`
//! without waiting for the final response.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::agent_models::{AgentKind, AgentStatus};
use crate::warning_models::Warning;

/// Lifecycle of a single analysis request.
///
/// There is no persisted intermediate state: a request is either pending or
/// its response is complete.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisState {
    /// Request accepted, agents not yet dispatched.
    Pending,

    /// Response assembled.
    Complete,
}

/// Events sent from the orchestrator to an observer.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "agentFinished",
///   "payload": {
///     "request_id": "uuid-here",
///     "agent": "NutritionAgent",
///     "status": "TIMED_OUT"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// The analysis moved to a new lifecycle state.
    StatusUpdate {
        #[ts(type = "string")]
        request_id: Uuid,
        state: AnalysisState,
    },

    /// One agent's result is available. Emitted in canonical agent order.
    AgentFinished {
        #[ts(type = "string")]
        request_id: Uuid,
        agent: AgentKind,
        status: AgentStatus,
    },

    /// A warning was detected, emitted in final warning order.
    WarningRaised {
        #[ts(type = "string")]
        request_id: Uuid,
        warning: Warning,
    },
}

impl Event {
    pub fn request_id(&self) -> Uuid {
        match self {
            Self::StatusUpdate { request_id, .. }
            | Self::AgentFinished { request_id, .. }
            | Self::WarningRaised { request_id, .. } => *request_id,
        }
    }
}
