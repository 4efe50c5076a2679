//! Scaffolding for a new `.openlinkage/` directory.
//!
//! Writes the embedded templates:
//! - Global configuration (`config.toml`)
//! - One profile per agent (`agents/*.md`)
//! - An example rule file (`rules/*.yaml`)
//!
//! # Example
//!
//! ```no_run
//! use ol_core::init::{scaffold_config_dir, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: false,
//! };
//!
//! let written = scaffold_config_dir(options).await?;
//! println!("Wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{scaffold_config_dir, InitOptions};
pub use templates::{get_template, list_templates};
