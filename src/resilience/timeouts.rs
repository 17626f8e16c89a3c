//! Timeout budgets.
//!
//! # Responsibilities
//! - Name the fixed budgets used while assembling a request
//! - Resolve the effective per-call timeout from user input
//!
//! # Design Decisions
//! - The middleware budget is independent of any user-supplied timeout
//! - A zero user timeout means "not set", never "no timeout"

use std::time::Duration;

/// Budget granted to transport middleware while preparing a request.
pub const MIDDLEWARE_TIMEOUT: Duration = Duration::from_secs(1);

/// Per-call timeout used when the user does not provide one.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Returns `requested`, or [`DEFAULT_REQUEST_TIMEOUT`] when it is zero.
pub fn effective_timeout(requested: Duration) -> Duration {
    if requested.is_zero() {
        DEFAULT_REQUEST_TIMEOUT
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_falls_back_to_default() {
        assert_eq!(effective_timeout(Duration::ZERO), Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_timeout_kept() {
        let requested = Duration::from_millis(2500);
        assert_eq!(effective_timeout(requested), requested);
    }
}
