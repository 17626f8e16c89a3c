//! Encoding subsystem.
//!
//! # Data Flow
//! ```text
//! RequestOptions (encoding, procedure, thrift file, health)
//!     → select.rs (detect encoding, pick serializer)
//!         - json.rs / raw.rs (built in)
//!         - SerializerBuilders (schema and health serializers, external)
//!     → Serializer::request(body) → base Request
//! ```
//!
//! # Design Decisions
//! - Parsing an encoding name never fails; unknown names surface when a
//!   serializer is selected, with the offending name in the error
//! - Schema-aware serializers are collaborators behind a trait

pub mod json;
pub mod raw;
pub mod select;
pub mod serializer;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub use json::JsonSerializer;
pub use raw::RawSerializer;
pub use select::{detect_encoding, new_serializer, BuiltinBuilders, SerializerBuilders};
pub use serializer::Serializer;

/// Boxed error reported by an external collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Payload encoding of an RPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Unspecified,
    Json,
    Thrift,
    Raw,
    /// A name this crate has no serializer for.
    Other(String),
}

impl Encoding {
    pub fn as_str(&self) -> &str {
        match self {
            Encoding::Unspecified => "",
            Encoding::Json => "json",
            Encoding::Thrift => "thrift",
            Encoding::Raw => "raw",
            Encoding::Other(name) => name,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Unspecified => f.write_str("unspecified"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for Encoding {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "" => Encoding::Unspecified,
            "json" => Encoding::Json,
            "thrift" => Encoding::Thrift,
            "raw" => Encoding::Raw,
            other => Encoding::Other(other.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for Encoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse::<Encoding>().unwrap_or_else(|never| match never {}))
    }
}

/// Errors raised while selecting or running a serializer.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Health checks do not target a procedure.
    #[error("cannot specify procedure {0:?} with a health check")]
    IncompatibleOptions(String),

    #[error("no procedure specified, specify --procedure [procedure]")]
    MissingProcedure,

    #[error("unrecognized encoding {0:?}, must be one of: json, thrift, raw")]
    UnrecognizedEncoding(String),

    /// No schema-aware serializer is available for this encoding.
    #[error("{0} encoding requires a schema-aware serializer, none is available")]
    SchemaUnsupported(Encoding),

    /// No health serializer is available for this encoding.
    #[error("health checks are not supported for {0} encoding")]
    HealthUnsupported(Encoding),

    /// The request body is not valid for the encoding.
    #[error("invalid {encoding} request body: {message}")]
    InvalidBody { encoding: Encoding, message: String },

    /// Failure reported by a serializer builder, passed through unchanged.
    #[error(transparent)]
    Builder(BoxError),
}
