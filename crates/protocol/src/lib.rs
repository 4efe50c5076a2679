//! # ol-protocol
//!
//! Core protocol definitions and data models for openlinkage.
//!
//! This crate defines all shared data structures used for:
//! - The inbound analysis request and the aggregated response
//! - Per-agent results and safety warnings
//! - Configuration file parsing (TOML config, Markdown agent profiles, YAML rules)
//! - Progress events emitted by the orchestrator
//!
//! ## Modules
//!
//! - [`request_models`]: The request payload shared by all agents
//! - [`agent_models`]: Agent variants, results and profiles
//! - [`warning_models`]: Warnings, severities and rule definitions
//! - [`response_models`]: The aggregated response
//! - [`config_models`]: Global configuration from config.toml
//! - [`events`]: Progress events for observers
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, ts-rs, and uuid
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other openlinkage crates

pub mod agent_models;
pub mod config_models;
pub mod events;
pub mod request_models;
pub mod response_models;
pub mod warning_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use events::*;
pub use request_models::*;
pub use response_models::*;
pub use warning_models::*;
