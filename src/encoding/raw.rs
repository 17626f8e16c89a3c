//! Raw bytes serializer.

use crate::encoding::{Encoding, EncodingError, Serializer};
use crate::transport::Request;

/// Sends the body bytes unchanged.
#[derive(Debug, Clone)]
pub struct RawSerializer {
    procedure: String,
}

impl RawSerializer {
    pub fn new(procedure: impl Into<String>) -> Self {
        Self {
            procedure: procedure.into(),
        }
    }
}

impl Serializer for RawSerializer {
    fn encoding(&self) -> Encoding {
        Encoding::Raw
    }

    fn procedure(&self) -> &str {
        &self.procedure
    }

    fn request(&self, body: &[u8]) -> Result<Request, EncodingError> {
        Ok(Request::new(&self.procedure, body.to_vec()))
    }
}
