//! Common test utilities shared by the integration tests.
//!
//! - Fixtures (requests, temporary `.openlinkage/` projects)
//! - Custom assertions
//! - Test-only agents

pub mod assertions;
pub mod fixtures;
pub mod mock_agents;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_agents::*;
