//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Blocking collaborator call (peer provider, transport middleware):
//!     → context.rs (deadline + cancellation carried by CallContext)
//!     → timeouts.rs (fixed budgets, default per-call timeout)
//! ```
//!
//! # Design Decisions
//! - Every blocking collaborator call runs under a CallContext
//! - Nothing here retries; retry policy belongs to transports

pub mod context;
pub mod timeouts;

pub use context::{CallContext, ContextError};
pub use timeouts::{effective_timeout, DEFAULT_REQUEST_TIMEOUT, MIDDLEWARE_TIMEOUT};
