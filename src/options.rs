//! Caller-owned options read while assembling a request.
//!
//! Nothing in the pipeline mutates these; stages only read them to build
//! their merge inputs.

use std::path::PathBuf;
use std::time::Duration;

use crate::encoding::Encoding;
use crate::transport::Headers;

/// Options describing what to call and with which payload.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Explicit encoding, `Unspecified` to infer one.
    pub encoding: Encoding,

    /// Procedure to call (`Service::Method` for schema encodings).
    pub procedure: String,

    /// Schema file for schema-aware encodings.
    pub thrift_file: Option<PathBuf>,

    /// Whether the schema service is multiplexed.
    pub thrift_multiplexed: bool,

    /// Issue a health check instead of a procedure call.
    pub health: bool,

    /// Per-call timeout; zero selects the default.
    pub timeout: Duration,

    /// Request body given inline (`-` reads stdin).
    pub request_inline: String,

    /// File holding the request body (`-` reads stdin).
    pub request_file: String,

    /// Headers given inline as a YAML mapping.
    pub headers_inline: String,

    /// File holding headers as a YAML mapping.
    pub headers_file: String,

    /// Header values that win over anything parsed from input.
    pub headers: Headers,

    /// Baggage values that win over anything set by middleware.
    pub baggage: Headers,
}

/// Options describing where the call goes.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Service name the request is addressed to.
    pub service_name: String,

    /// Name this client identifies itself with.
    pub caller_name: String,

    /// Explicit peers.
    pub peers: Vec<String>,

    /// URL resolved into peers through the provider registry.
    pub peer_list: Option<String>,

    /// Transport header values that win over anything set by middleware.
    pub transport_headers: Headers,

    /// Shard key for the outbound request.
    pub shard_key: String,
}

/// Full options bundle for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub request: RequestOptions,
    pub transport: TransportOptions,
}
