//! # ol-core
//!
//! Multi-agent health analysis pipeline for openlinkage.
//!
//! One request fans out to a set of advisory agents, each agent's outcome is
//! collected in canonical order, safety rules are evaluated over the request
//! and the agents' output, and everything is folded into one response.
//!
//! ## Modules
//!
//! - [`validation`]: Request validation before dispatch
//! - [`agents`]: Agent trait, the four agent variants and the shared model backend
//! - [`dispatch`]: Concurrent fan-out with per-agent timeouts
//! - [`warnings`]: Declarative warning rule table and detector
//! - [`aggregate`]: Overall summary and response assembly
//! - [`orchestrator`]: The entry point composing the stages above
//! - [`memory`]: Optional per-user context store
//! - [`config`]: Configuration loading from `.openlinkage/`
//! - [`init`]: Scaffolding for a new `.openlinkage/` directory
//!
//! ## Example
//!
//! ```no_run
//! use ol_core::config::AppConfig;
//! use ol_core::orchestrator::Orchestrator;
//! use ol_protocol::request_models::AgentRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = Orchestrator::from_config(&AppConfig::default(), None)?;
//! let request = AgentRequest::new("demo-user")
//!     .with_symptom("fatigue")
//!     .with_goal("weight management");
//!
//! let response = orchestrator.analyze(request).await?;
//! println!("{}", response.overall_summary);
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod aggregate;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod init;
pub mod memory;
pub mod orchestrator;
pub mod validation;
pub mod warnings;

pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::{Orchestrator, OrchestratorBuilder};
