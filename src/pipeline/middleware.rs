//! Transport middleware capability.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::encoding::BoxError;
use crate::resilience::{CallContext, ContextError};
use crate::transport::Request;

/// Plugin hook that may rewrite a request before it is sent.
///
/// The request is passed by value; the middleware cannot keep a handle to
/// it after returning.
#[async_trait]
pub trait TransportMiddleware: Send + Sync {
    async fn apply(&self, ctx: &CallContext, request: Request) -> Result<Request, BoxError>;
}

/// Failures of the middleware stage.
#[derive(Debug, Error)]
pub enum MiddlewareError {
    /// The middleware reported an error.
    #[error("transport middleware failed: {0}")]
    Failed(#[source] BoxError),

    /// The middleware did not finish within its budget.
    #[error("transport middleware did not finish within {0:?}")]
    DeadlineExceeded(Duration),

    /// The stage context was cancelled.
    #[error("transport middleware was cancelled")]
    Cancelled,
}

impl MiddlewareError {
    pub(crate) fn from_context(err: ContextError, budget: Duration) -> Self {
        match err {
            ContextError::DeadlineExceeded => MiddlewareError::DeadlineExceeded(budget),
            ContextError::Cancelled => MiddlewareError::Cancelled,
        }
    }
}
