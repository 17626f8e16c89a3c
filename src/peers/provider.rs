//! Peer provider capability.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::peers::url::PeerUrl;
use crate::resilience::{CallContext, ContextError};

/// Turns a peer-list URL into the addresses to pass as `--peer`.
///
/// Implementations own the semantics of their URL name space. They must
/// return promptly once `ctx` is done, and return a non-empty list on
/// success.
#[async_trait]
pub trait PeerProvider: Send + Sync {
    async fn resolve(&self, ctx: &CallContext, url: &PeerUrl) -> Result<Vec<String>, ProviderError>;
}

/// Failures reported by a peer provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The peer list file could not be read.
    #[error("failed to open peer list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The URL does not name anything this provider can read.
    #[error("peer list URL {0:?} does not name a path")]
    MissingPath(String),

    /// The peer list request could not be completed.
    #[error("peer list request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The peer list server answered with a non-success status.
    #[error("peer list request returned status {0}")]
    Status(u16),

    /// The peer list contents are malformed.
    #[error("invalid peer list: {0}")]
    Parse(String),

    /// The peer list parsed but contains no peers.
    #[error("peer list is empty")]
    EmptyPeerList,

    /// The call context finished before resolution did.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Failure reported by a provider outside this crate.
    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// True when resolution stopped because the context was cancelled or expired.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ProviderError::Context(_))
    }
}
