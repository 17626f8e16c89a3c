//! Request assembly pipeline.
//!
//! # Data Flow
//! ```text
//! base Request (from the serializer)
//!     → with_metadata (target service from transport options)
//!     → with_transport_middleware (plugin hook, fixed 1s budget)
//!     → with_cli_overrides (headers, transport headers, baggage, timeout)
//!     → final Request handed to a transport
//! ```
//!
//! # Design Decisions
//! - Every stage reads the previous request and returns a fresh copy, so
//!   the caller's base request and earlier stage outputs are never touched
//! - Stages run strictly in order; the first error aborts the rest
//! - No partially built request is ever returned with an error

pub mod middleware;

use std::sync::Arc;

use crate::options::{Options, TransportOptions};
use crate::resilience::{effective_timeout, CallContext, MIDDLEWARE_TIMEOUT};
use crate::transport::{merge_overrides, Headers, Request};

pub use middleware::{MiddlewareError, TransportMiddleware};

/// Assembles the final outbound request.
#[derive(Clone, Default)]
pub struct RequestPipeline {
    middleware: Option<Arc<dyn TransportMiddleware>>,
}

impl RequestPipeline {
    /// A pipeline without transport middleware.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `middleware` in the middleware stage.
    pub fn with_middleware(mut self, middleware: Arc<dyn TransportMiddleware>) -> Self {
        self.middleware = Some(middleware);
        self
    }

    /// Inject metadata, apply middleware, then merge user overrides.
    ///
    /// `headers` are the user's header overrides (already merged with any
    /// header input).
    pub async fn prepare(
        &self,
        base: &Request,
        headers: &Headers,
        opts: &Options,
    ) -> Result<Request, MiddlewareError> {
        let with_meta = with_metadata(base, &opts.transport);
        let processed = self.with_transport_middleware(&with_meta).await?;
        let prepared = with_cli_overrides(&processed, headers, opts);

        tracing::debug!(
            method = %prepared.method,
            service = %prepared.target_service,
            timeout_ms = prepared.timeout.as_millis() as u64,
            headers = prepared.headers.len(),
            "Prepared request"
        );
        Ok(prepared)
    }

    /// Hand a copy of `prev` to the middleware under a fresh, bounded context.
    pub async fn with_transport_middleware(&self, prev: &Request) -> Result<Request, MiddlewareError> {
        let request = prev.deep_copy();
        let Some(middleware) = &self.middleware else {
            return Ok(request);
        };

        let ctx = CallContext::background().with_timeout(MIDDLEWARE_TIMEOUT);
        let _cancel = ctx.cancel_on_drop();

        match ctx.run(middleware.apply(&ctx, request)).await {
            Ok(Ok(request)) => Ok(request),
            Ok(Err(source)) => match ctx.err() {
                Some(err) => Err(MiddlewareError::from_context(err, MIDDLEWARE_TIMEOUT)),
                None => Err(MiddlewareError::Failed(source)),
            },
            Err(err) => {
                tracing::warn!(budget_ms = MIDDLEWARE_TIMEOUT.as_millis() as u64, "Transport middleware timed out");
                Err(MiddlewareError::from_context(err, MIDDLEWARE_TIMEOUT))
            }
        }
    }
}

/// Copy `prev` and address it to the configured service.
pub fn with_metadata(prev: &Request, opts: &TransportOptions) -> Request {
    let mut request = prev.deep_copy();
    request.target_service = opts.service_name.clone();
    request
}

/// Copy `prev` and apply user overrides; overrides win on key collisions.
pub fn with_cli_overrides(prev: &Request, headers: &Headers, opts: &Options) -> Request {
    let mut request = prev.deep_copy();
    merge_overrides(&mut request.headers, headers);
    merge_overrides(&mut request.transport_headers, &opts.transport.transport_headers);
    merge_overrides(&mut request.baggage, &opts.request.baggage);
    request.timeout = effective_timeout(opts.request.timeout);
    request
}
