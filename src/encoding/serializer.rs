//! Serializer capability.

use std::fmt::Debug;

use crate::encoding::{Encoding, EncodingError};
use crate::transport::Request;

/// Encodes a user-supplied body into the base request for one procedure.
pub trait Serializer: Send + Sync + Debug {
    /// Encoding this serializer produces.
    fn encoding(&self) -> Encoding;

    /// Procedure the produced request invokes.
    fn procedure(&self) -> &str;

    /// Build the base request from the raw body bytes.
    fn request(&self, body: &[u8]) -> Result<Request, EncodingError>;
}
