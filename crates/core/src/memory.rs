//! Per-user context memory.
//!
//! The orchestrator records a short digest of every completed analysis. The
//! store is a side collaborator: nothing in a single analysis depends on it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ol_protocol::response_models::AnalysisResponse;
use ol_protocol::warning_models::Severity;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Context store unavailable: {0}")]
    Unavailable(String),
}

/// Digest of one completed analysis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContextRecord {
    pub user_id: String,
    pub overall_summary: String,
    pub warning_count: usize,
    pub max_severity: Option<Severity>,
    pub recorded_at: DateTime<Utc>,
}

impl ContextRecord {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        Self {
            user_id: response.user_id.clone(),
            overall_summary: response.overall_summary.clone(),
            warning_count: response.warnings.len(),
            max_severity: response.max_severity(),
            recorded_at: Utc::now(),
        }
    }
}

/// Context storage keyed by `user_id`.
#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn save(&self, record: ContextRecord) -> Result<(), MemoryError>;

    /// Records for `user_id`, oldest first.
    async fn history(&self, user_id: &str) -> Result<Vec<ContextRecord>, MemoryError>;
}

/// Records kept per user by [`InMemoryContextStore::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Process-local store. Contents are lost on exit.
///
/// Each user keeps at most `limit` records; saving past the limit drops the
/// oldest one.
#[derive(Debug)]
pub struct InMemoryContextStore {
    records: RwLock<HashMap<String, VecDeque<ContextRecord>>>,
    limit: usize,
}

impl Default for InMemoryContextStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store keeping the last `limit` records per user. Zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            limit: limit.max(1),
        }
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn save(&self, record: ContextRecord) -> Result<(), MemoryError> {
        let mut records = self.records.write().await;
        let history = records.entry(record.user_id.clone()).or_default();
        while history.len() >= self.limit {
            history.pop_front();
        }
        history.push_back(record);
        Ok(())
    }

    async fn history(&self, user_id: &str) -> Result<Vec<ContextRecord>, MemoryError> {
        let records = self.records.read().await;
        Ok(records
            .get(user_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default())
    }
}
