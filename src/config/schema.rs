//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the defaults file.
//! Every section is optional; a missing file is equivalent to an empty one.

use serde::Deserialize;

use crate::encoding::Encoding;

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Values used when the matching flag is not given.
    pub defaults: DefaultsConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Fallback values for request and transport flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Target service name.
    pub service: Option<String>,

    /// Caller name sent with each request.
    pub caller: String,

    /// Encoding used when neither a flag nor the procedure implies one.
    pub encoding: Encoding,

    /// Peer list URL used when no peers are given.
    pub peer_list: Option<String>,

    /// Per-call timeout in milliseconds; 0 selects the built-in default.
    pub timeout_ms: u64,

    /// Budget for resolving the peer list, in milliseconds.
    pub peer_list_timeout_ms: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            service: None,
            caller: "rpc-client".to_string(),
            encoding: Encoding::Unspecified,
            peer_list: None,
            timeout_ms: 0,
            peer_list_timeout_ms: 5_000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}
