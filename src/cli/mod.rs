//! Command-line orchestration.
//!
//! # Data Flow
//! ```text
//! Args + ClientConfig
//!     → Options
//!     → peers (explicit --peer, or --peer-list through the registry)
//!     → body and headers (input)
//!     → serializer (encoding) → base Request
//!     → RequestPipeline → final Request
//!     → PreparedCall printed as JSON
//! ```
//!
//! # Design Decisions
//! - Transports are out of scope: the prepared call is the output
//! - Every error reaches the user verbatim through CliError
//! - Body and header input are read with blocking I/O: the binary makes a
//!   single call per process, so nothing else is waiting on the runtime

pub mod args;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};
use crate::encoding::{self, BuiltinBuilders, EncodingError, SerializerBuilders};
use crate::input::{self, InputError};
use crate::options::{Options, TransportOptions};
use crate::peers::{self, PeerError, PeerProviderRegistry, PeerUrl};
use crate::pipeline::{MiddlewareError, RequestPipeline};
use crate::resilience::CallContext;
use crate::transport::{Headers, Request};

pub use args::Args;

/// Every failure the binary can report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Peers(#[from] PeerError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Middleware(#[from] MiddlewareError),

    #[error("specify a peer with --peer or --peer-list")]
    MissingPeers,

    #[error("cannot specify both --peer and --peer-list")]
    ConflictingPeers,

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// The fully assembled call, as handed to a transport.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedCall {
    pub service: String,
    pub caller: String,
    pub encoding: String,
    pub peers: Vec<String>,
    pub request: PreparedRequest,
}

/// Printable view of a [`Request`].
#[derive(Debug, Clone, Serialize)]
pub struct PreparedRequest {
    pub method: String,
    pub timeout_ms: u64,
    pub headers: Headers,
    pub transport_headers: Headers,
    pub baggage: Headers,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shard_key: String,
    pub body: String,
}

impl From<&Request> for PreparedRequest {
    fn from(request: &Request) -> Self {
        Self {
            method: request.method.clone(),
            timeout_ms: request.timeout.as_millis() as u64,
            headers: request.headers.clone(),
            transport_headers: request.transport_headers.clone(),
            baggage: request.baggage.clone(),
            shard_key: request.shard_key.clone(),
            body: String::from_utf8_lossy(&request.body).into_owned(),
        }
    }
}

/// Wires the registry, serializer builders and pipeline for one invocation.
#[derive(Clone)]
pub struct Runner {
    registry: Arc<PeerProviderRegistry>,
    builders: Arc<dyn SerializerBuilders>,
    pipeline: RequestPipeline,
    peer_list_timeout: Duration,
}

impl Runner {
    /// A runner using the process-wide registry and built-in serializers.
    pub fn new() -> Self {
        Self {
            registry: peers::default_registry(),
            builders: Arc::new(BuiltinBuilders),
            pipeline: RequestPipeline::new(),
            peer_list_timeout: Duration::from_millis(5_000),
        }
    }

    pub fn with_registry(mut self, registry: Arc<PeerProviderRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_builders(mut self, builders: Arc<dyn SerializerBuilders>) -> Self {
        self.builders = builders;
        self
    }

    pub fn with_pipeline(mut self, pipeline: RequestPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_peer_list_timeout(mut self, timeout: Duration) -> Self {
        self.peer_list_timeout = timeout;
        self
    }

    pub fn registry(&self) -> &PeerProviderRegistry {
        &self.registry
    }

    /// Resolve peers and assemble the request described by `opts`.
    ///
    /// Body and header input are read synchronously on the calling task.
    pub async fn prepare(&self, opts: &Options) -> Result<PreparedCall, CliError> {
        let peers = self.resolve_peers(&opts.transport).await?;

        let body = input::get_input(&opts.request.request_inline, &opts.request.request_file)?;
        let headers = input::get_headers(
            &opts.request.headers_inline,
            &opts.request.headers_file,
            &opts.request.headers,
        )?;

        let serializer = encoding::new_serializer(&opts.request, self.builders.as_ref())?;
        let mut base = serializer.request(&body)?;
        base.shard_key = opts.transport.shard_key.clone();

        let request = self.pipeline.prepare(&base, &headers, opts).await?;

        Ok(PreparedCall {
            service: request.target_service.clone(),
            caller: opts.transport.caller_name.clone(),
            encoding: serializer.encoding().to_string(),
            peers,
            request: PreparedRequest::from(&request),
        })
    }

    /// Explicit peers, or the peers listed at `--peer-list`.
    pub async fn resolve_peers(&self, opts: &TransportOptions) -> Result<Vec<String>, CliError> {
        match (&opts.peer_list, opts.peers.is_empty()) {
            (Some(_), false) => Err(CliError::ConflictingPeers),
            (None, true) => Err(CliError::MissingPeers),
            (None, false) => Ok(opts.peers.clone()),
            (Some(list), true) => {
                let url = PeerUrl::parse(list);
                let ctx = CallContext::background().with_timeout(self.peer_list_timeout);
                let peers = self.registry.resolve(&ctx, &url).await?;
                tracing::info!(peer_list = %url, peers = peers.len(), "Resolved peer list");
                Ok(peers)
            }
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one invocation, writing its output to `out`.
pub async fn run<W: Write>(args: &Args, config: &ClientConfig, out: &mut W) -> Result<(), CliError> {
    let runner = Runner::new()
        .with_peer_list_timeout(Duration::from_millis(config.defaults.peer_list_timeout_ms));

    if args.list_schemes {
        for scheme in runner.registry().schemes() {
            writeln!(out, "{scheme}")?;
        }
        return Ok(());
    }

    let opts = args.options(config);
    let call = runner.prepare(&opts).await?;
    serde_json::to_writer_pretty(&mut *out, &call)?;
    writeln!(out)?;
    Ok(())
}
