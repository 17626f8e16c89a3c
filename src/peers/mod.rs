//! Peer resolution subsystem.
//!
//! # Data Flow
//! ```text
//! --peer-list value
//!     → url.rs (PeerUrl: scheme, or "" for a bare path)
//!     → registry.rs (scheme → provider lookup)
//!     → provider (file.rs | http.rs | externally registered)
//!     → parse.rs (peer list document → Vec<String>)
//!     → peers handed to the transport as --peer values
//! ```
//!
//! # Design Decisions
//! - Providers are an open set keyed by scheme; anyone may register more
//! - Dispatch only: the registry never inspects the returned addresses
//! - No retries and no load balancing over the resolved peers

pub mod file;
pub mod http;
pub mod parse;
pub mod provider;
pub mod registry;
pub mod url;

pub use file::FilePeerProvider;
pub use http::HttpPeerProvider;
pub use provider::{PeerProvider, ProviderError};
pub use registry::{
    default_registry, register_provider, replace_default_registry, resolve, schemes, PeerError,
    PeerProviderRegistry,
};
pub use url::PeerUrl;
