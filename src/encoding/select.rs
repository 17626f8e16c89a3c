//! Serializer selection.
//!
//! # Responsibilities
//! - Reject option combinations that cannot form a call
//! - Infer the encoding when the user did not name one
//! - Delegate schema and health serializers to their builders
//!
//! # Design Decisions
//! - Schema encodings may list methods without a procedure, so the
//!   procedure check only applies to the built-in encodings
//! - Builder errors are returned unchanged

use std::path::Path;

use crate::encoding::{Encoding, EncodingError, JsonSerializer, RawSerializer, Serializer};
use crate::options::RequestOptions;

/// External builders for serializers this crate cannot construct itself.
pub trait SerializerBuilders: Send + Sync {
    /// Build a schema-aware serializer for `procedure`.
    fn thrift(
        &self,
        schema_file: Option<&Path>,
        procedure: &str,
        multiplexed: bool,
    ) -> Result<Box<dyn Serializer>, EncodingError>;

    /// Build the health-check serializer for `encoding`.
    fn health(&self, encoding: &Encoding) -> Result<Box<dyn Serializer>, EncodingError>;
}

/// Builders available without a schema compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBuilders;

impl SerializerBuilders for BuiltinBuilders {
    fn thrift(
        &self,
        _schema_file: Option<&Path>,
        _procedure: &str,
        _multiplexed: bool,
    ) -> Result<Box<dyn Serializer>, EncodingError> {
        Err(EncodingError::SchemaUnsupported(Encoding::Thrift))
    }

    fn health(&self, encoding: &Encoding) -> Result<Box<dyn Serializer>, EncodingError> {
        Err(EncodingError::HealthUnsupported(encoding.clone()))
    }
}

/// Pick the serializer for `opts`.
pub fn new_serializer(
    opts: &RequestOptions,
    builders: &dyn SerializerBuilders,
) -> Result<Box<dyn Serializer>, EncodingError> {
    if opts.health {
        if !opts.procedure.is_empty() {
            return Err(EncodingError::IncompatibleOptions(opts.procedure.clone()));
        }
        return builders.health(&opts.encoding);
    }

    let encoding = detect_encoding(opts);
    tracing::debug!(encoding = %encoding, procedure = %opts.procedure, "Selected encoding");

    if encoding == Encoding::Thrift {
        return builders.thrift(
            opts.thrift_file.as_deref(),
            &opts.procedure,
            opts.thrift_multiplexed,
        );
    }

    if opts.procedure.is_empty() {
        return Err(EncodingError::MissingProcedure);
    }

    match encoding {
        Encoding::Json => Ok(Box::new(JsonSerializer::new(&opts.procedure))),
        Encoding::Raw => Ok(Box::new(RawSerializer::new(&opts.procedure))),
        other => Err(EncodingError::UnrecognizedEncoding(other.as_str().to_string())),
    }
}

/// The explicit encoding, else Thrift for `Service::Method` procedures or a
/// schema file, else JSON.
pub fn detect_encoding(opts: &RequestOptions) -> Encoding {
    if opts.encoding != Encoding::Unspecified {
        return opts.encoding.clone();
    }

    if opts.procedure.contains("::") || opts.thrift_file.is_some() {
        return Encoding::Thrift;
    }

    Encoding::Json
}
