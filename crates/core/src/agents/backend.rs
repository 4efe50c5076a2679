//! Model backend shared by all agents.
//!
//! A backend is a process-wide resource: it is created once at startup,
//! handed to every agent as a cloned [`SharedBackend`] handle and closed on
//! shutdown. The handle bounds concurrent calls with a semaphore; only backend
//! calls wait on it, never the dispatch as a whole.

use crate::agents::base::AgentError;
use crate::agents::cli_executor::CliExecutor;
use async_trait::async_trait;
use ol_protocol::config_models::BackendConfig;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_stream::StreamExt;

/// An opaque text-completion capability (LLM, rule engine, ...).
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Human-readable backend name for logs.
    fn name(&self) -> &str;

    async fn check_availability(&self) -> bool;

    /// Complete a prompt, returning the raw output text.
    async fn complete(&self, prompt: &str) -> Result<String, AgentError>;
}

/// Backend that pipes the prompt through an external command.
pub struct CliBackend {
    command: String,
    args: Vec<String>,
}

impl CliBackend {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

#[async_trait]
impl ModelBackend for CliBackend {
    fn name(&self) -> &str {
        &self.command
    }

    async fn check_availability(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        let mut stream = CliExecutor::execute(
            self.command.clone(),
            self.args.clone(),
            Some(prompt.to_string()),
        );

        let mut output = String::new();
        while let Some(line) = stream.next().await {
            output.push_str(&line?);
            output.push('\n');
        }
        Ok(output)
    }
}

/// Cloneable handle to the process-wide backend.
#[derive(Clone)]
pub struct SharedBackend {
    inner: Arc<dyn ModelBackend>,
    permits: Arc<Semaphore>,
}

impl SharedBackend {
    /// Wrap a backend, allowing at most `max_concurrent_calls` in-flight calls.
    ///
    /// A limit of zero is treated as one.
    pub fn new(backend: Arc<dyn ModelBackend>, max_concurrent_calls: usize) -> Self {
        Self {
            inner: backend,
            permits: Arc::new(Semaphore::new(max_concurrent_calls.max(1))),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(
            Arc::new(CliBackend::from_config(config)),
            config.max_concurrent_calls,
        )
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn check_availability(&self) -> bool {
        !self.is_closed() && self.inner.check_availability().await
    }

    /// Complete a prompt once a call slot is free.
    ///
    /// Fails with [`AgentError::NotAvailable`] after [`SharedBackend::close`].
    pub async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        let _permit = self.permits.acquire().await.map_err(|_| {
            AgentError::NotAvailable(format!("backend '{}' has been shut down", self.name()))
        })?;
        tracing::debug!(backend = %self.name(), "calling model backend");
        self.inner
            .complete(prompt)
            .await
            .map_err(|e| match e {
                AgentError::ExecutionError(msg) => AgentError::BackendError(msg),
                other => other,
            })
    }

    /// Stop accepting calls. Calls already holding a slot finish normally.
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }
}

impl std::fmt::Debug for SharedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBackend")
            .field("name", &self.name())
            .field("available_permits", &self.permits.available_permits())
            .finish()
    }
}
