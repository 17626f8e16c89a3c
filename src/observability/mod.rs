//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Registry, providers, pipeline, CLI:
//!     → tracing macros with structured fields
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields (scheme, peers, method) rather than formatted text
//! - Quiet by default (warn); `RUST_LOG` or the config raises verbosity

pub mod logging;

pub use logging::init_logging;
