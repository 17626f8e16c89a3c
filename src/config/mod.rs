//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults file (TOML, optional)
//!     → loader.rs (locate, parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → CLI flags override individual values
//! ```
//!
//! # Design Decisions
//! - Config is read once per invocation; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{ClientConfig, DefaultsConfig, LoggingConfig};
pub use validation::ValidationError;
