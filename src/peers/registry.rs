//! Scheme-keyed peer provider registry.
//!
//! # Responsibilities
//! - Bind URL schemes to peer providers (last registration wins)
//! - Enumerate the schemes usable in `--peer-list`
//! - Dispatch a URL to the provider bound to its scheme
//! - Hold the process-wide default registry
//!
//! # Design Decisions
//! - Sharded reader-writer map: lookups run concurrently, only binding is exclusive
//! - The map guard is released before a provider runs, so slow resolution
//!   never blocks other lookups or registrations
//! - The empty scheme is an internal alias for bare paths and is never listed

use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use dashmap::DashMap;
use thiserror::Error;

use crate::peers::file::FilePeerProvider;
use crate::peers::http::HttpPeerProvider;
use crate::peers::provider::{PeerProvider, ProviderError};
use crate::peers::url::PeerUrl;
use crate::resilience::CallContext;

/// Errors returned when resolving a peer list.
#[derive(Debug, Error)]
pub enum PeerError {
    /// No provider is bound to the URL's scheme.
    #[error("no peer provider available for scheme {scheme:?} in URL {url:?}")]
    UnsupportedScheme { scheme: String, url: String },

    /// The bound provider failed.
    #[error("peer provider for scheme {scheme:?} failed: {source}")]
    Resolution {
        scheme: String,
        #[source]
        source: ProviderError,
    },
}

/// Maps URL schemes to peer providers.
pub struct PeerProviderRegistry {
    providers: DashMap<String, Arc<dyn PeerProvider>>,
}

impl PeerProviderRegistry {
    /// An empty registry, for isolated use.
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
        }
    }

    /// A registry with the built-in file and HTTP(S) providers.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let file: Arc<dyn PeerProvider> = Arc::new(FilePeerProvider);
        let http: Arc<dyn PeerProvider> = Arc::new(HttpPeerProvider::new());
        registry.register("", file.clone());
        registry.register("file", file);
        registry.register("http", http.clone());
        registry.register("https", http);
        registry
    }

    /// Bind `scheme` to `provider`, replacing any previous binding.
    pub fn register(&self, scheme: impl Into<String>, provider: Arc<dyn PeerProvider>) {
        let scheme = scheme.into();
        if self.providers.insert(scheme.clone(), provider).is_some() {
            tracing::debug!(scheme = %scheme, "Replaced existing peer provider");
        }
    }

    /// Every registered scheme except the empty alias.
    pub fn schemes(&self) -> BTreeSet<String> {
        self.providers
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|scheme| !scheme.is_empty())
            .collect()
    }

    /// Whether a provider is bound to `scheme`, including the empty scheme.
    pub fn contains(&self, scheme: &str) -> bool {
        self.providers.contains_key(scheme)
    }

    /// Resolve `url` with the provider bound to its scheme.
    pub async fn resolve(&self, ctx: &CallContext, url: &PeerUrl) -> Result<Vec<String>, PeerError> {
        let scheme = url.scheme();

        // Clone the binding out so the shard guard drops before the provider runs.
        let provider = self
            .providers
            .get(scheme)
            .map(|entry| Arc::clone(entry.value()));

        let Some(provider) = provider else {
            return Err(PeerError::UnsupportedScheme {
                scheme: scheme.to_string(),
                url: url.to_string(),
            });
        };

        let resolved = match ctx.run(provider.resolve(ctx, url)).await {
            Ok(result) => result,
            Err(err) => Err(ProviderError::Context(err)),
        };

        match resolved {
            Ok(peers) => {
                tracing::debug!(scheme = %scheme, peers = peers.len(), "Resolved peer list");
                Ok(peers)
            }
            Err(source) => Err(PeerError::Resolution {
                scheme: scheme.to_string(),
                source,
            }),
        }
    }
}

impl Default for PeerProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static DEFAULT_REGISTRY: LazyLock<ArcSwap<PeerProviderRegistry>> =
    LazyLock::new(|| ArcSwap::from_pointee(PeerProviderRegistry::with_defaults()));

/// The process-wide registry.
pub fn default_registry() -> Arc<PeerProviderRegistry> {
    DEFAULT_REGISTRY.load_full()
}

/// Install `registry` as the process-wide registry, returning the previous one.
pub fn replace_default_registry(registry: Arc<PeerProviderRegistry>) -> Arc<PeerProviderRegistry> {
    DEFAULT_REGISTRY.swap(registry)
}

/// Bind `scheme` in the process-wide registry.
pub fn register_provider(scheme: impl Into<String>, provider: Arc<dyn PeerProvider>) {
    DEFAULT_REGISTRY.load().register(scheme, provider);
}

/// Schemes of the process-wide registry.
pub fn schemes() -> BTreeSet<String> {
    DEFAULT_REGISTRY.load().schemes()
}

/// Resolve `url` through the process-wide registry.
pub async fn resolve(ctx: &CallContext, url: &PeerUrl) -> Result<Vec<String>, PeerError> {
    default_registry().resolve(ctx, url).await
}
