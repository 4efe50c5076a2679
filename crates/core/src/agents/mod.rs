//! Advisory agents and the model backend they share.
//!
//! This module provides the `Agent` trait, one implementation per
//! [`AgentKind`](ol_protocol::agent_models::AgentKind), the `AgentFactory`
//! that builds them from configuration, and the process-wide model backend.

pub mod adapters;
pub mod backend;
pub mod base;
pub mod cli_executor;
pub mod factory;
pub mod narration;

pub use adapters::{ExerciseAgent, HealthButlerAgent, MedicationAgent, MockAgent, NutritionAgent};
pub use backend::{CliBackend, ModelBackend, SharedBackend};
pub use base::{settle, Advice, Agent, AgentError};
pub use factory::AgentFactory;
pub use narration::Narration;
