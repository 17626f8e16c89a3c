//! Outbound RPC request and its deep copy.
//!
//! # Responsibilities
//! - Hold the fields a transport needs to issue one call
//! - Produce storage-independent copies for each assembly stage
//! - Merge user overrides into header-like maps

use std::collections::BTreeMap;
use std::time::Duration;

/// String-to-string metadata map (headers, transport headers, baggage).
pub type Headers = BTreeMap<String, String>;

/// A single RPC invocation under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Procedure to invoke on the target service.
    pub method: String,

    /// Per-call timeout.
    pub timeout: Duration,

    /// Application headers.
    pub headers: Headers,

    /// Headers consumed by the transport itself.
    pub transport_headers: Headers,

    /// Context propagated to downstream calls.
    pub baggage: Headers,

    /// Shard key used by routing layers.
    pub shard_key: String,

    /// Encoded request body.
    pub body: Vec<u8>,

    /// Service the request is addressed to.
    pub target_service: String,
}

impl Request {
    /// Create a request for `method` carrying `body`.
    pub fn new(method: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: method.into(),
            body,
            ..Self::default()
        }
    }

    /// Copy every field into fresh storage.
    ///
    /// Mutating the maps or the body of the result never affects `self`, and
    /// the other way around. All fields are owned, so this is a plain clone;
    /// the method exists so stages state the copy explicitly.
    pub fn deep_copy(&self) -> Self {
        Self {
            method: self.method.clone(),
            timeout: self.timeout,
            headers: self.headers.clone(),
            transport_headers: self.transport_headers.clone(),
            baggage: self.baggage.clone(),
            shard_key: self.shard_key.clone(),
            body: self.body.clone(),
            target_service: self.target_service.clone(),
        }
    }
}

/// Copy every pair of `overrides` into `dest`, replacing existing values.
pub fn merge_overrides(dest: &mut Headers, overrides: &Headers) {
    for (key, value) in overrides {
        dest.insert(key.clone(), value.clone());
    }
}
