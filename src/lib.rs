//! RPC client core: peer resolution and request assembly.

pub mod cli;
pub mod config;
pub mod encoding;
pub mod input;
pub mod observability;
pub mod options;
pub mod peers;
pub mod pipeline;
pub mod resilience;
pub mod transport;

pub use options::{Options, RequestOptions, TransportOptions};
pub use peers::{PeerProvider, PeerProviderRegistry, PeerUrl};
pub use pipeline::{RequestPipeline, TransportMiddleware};
pub use resilience::CallContext;
pub use transport::Request;
