//! File-backed peer provider.
//!
//! Serves the empty scheme (`peers.json`) and `file:` URLs
//! (`file:///etc/peers.json`).

use async_trait::async_trait;

use crate::peers::parse::parse_peer_list;
use crate::peers::provider::{PeerProvider, ProviderError};
use crate::peers::url::PeerUrl;
use crate::resilience::CallContext;

/// Reads a peer list document from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePeerProvider;

#[async_trait]
impl PeerProvider for FilePeerProvider {
    async fn resolve(&self, ctx: &CallContext, url: &PeerUrl) -> Result<Vec<String>, ProviderError> {
        let path = url
            .file_path()
            .ok_or_else(|| ProviderError::MissingPath(url.to_string()))?;

        tracing::debug!(path = %path.display(), "Reading peer list file");

        let contents = ctx
            .run(tokio::fs::read(&path))
            .await?
            .map_err(|source| ProviderError::Io { path, source })?;

        parse_peer_list(&contents)
    }
}
