//! HTTP(S)-backed peer provider.
//!
//! # Responsibilities
//! - Fetch a peer list document with a GET request
//! - Bound the request by the caller's deadline
//! - Reject non-success responses before parsing

use async_trait::async_trait;
use reqwest::Client;

use crate::peers::parse::parse_peer_list;
use crate::peers::provider::{PeerProvider, ProviderError};
use crate::peers::url::PeerUrl;
use crate::resilience::CallContext;

/// Fetches a peer list document over HTTP or HTTPS.
#[derive(Debug, Clone, Default)]
pub struct HttpPeerProvider {
    client: Client,
}

impl HttpPeerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PeerProvider for HttpPeerProvider {
    async fn resolve(&self, ctx: &CallContext, url: &PeerUrl) -> Result<Vec<String>, ProviderError> {
        let target = url
            .url()
            .cloned()
            .ok_or_else(|| ProviderError::MissingPath(url.to_string()))?;

        let mut request = self.client.get(target);
        if let Some(remaining) = ctx.remaining() {
            request = request.timeout(remaining);
        }

        tracing::debug!(url = %url, "Fetching peer list");

        let body = ctx
            .run(async {
                let response = request.send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ProviderError::Status(status.as_u16()));
                }
                Ok::<_, ProviderError>(response.bytes().await?)
            })
            .await??;

        parse_peer_list(&body)
    }
}
