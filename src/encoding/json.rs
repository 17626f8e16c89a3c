//! JSON serializer.

use serde_json::Value;

use crate::encoding::{Encoding, EncodingError, Serializer};
use crate::transport::Request;

/// Sends the body as a compact JSON document.
#[derive(Debug, Clone)]
pub struct JsonSerializer {
    procedure: String,
}

impl JsonSerializer {
    pub fn new(procedure: impl Into<String>) -> Self {
        Self {
            procedure: procedure.into(),
        }
    }
}

impl Serializer for JsonSerializer {
    fn encoding(&self) -> Encoding {
        Encoding::Json
    }

    fn procedure(&self) -> &str {
        &self.procedure
    }

    fn request(&self, body: &[u8]) -> Result<Request, EncodingError> {
        // An empty body is sent as an empty object.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Request::new(&self.procedure, b"{}".to_vec()));
        }

        let value: Value = serde_json::from_slice(body).map_err(|e| EncodingError::InvalidBody {
            encoding: Encoding::Json,
            message: e.to_string(),
        })?;
        let encoded = serde_json::to_vec(&value).map_err(|e| EncodingError::InvalidBody {
            encoding: Encoding::Json,
            message: e.to_string(),
        })?;
        Ok(Request::new(&self.procedure, encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compacts_body() {
        let request = JsonSerializer::new("Echo")
            .request(b"{ \"msg\" : \"hi\" }")
            .unwrap();
        assert_eq!(request.method, "Echo");
        assert_eq!(request.body, br#"{"msg":"hi"}"#.to_vec());
    }

    #[test]
    fn test_empty_body_becomes_object() {
        let request = JsonSerializer::new("Echo").request(b"  ").unwrap();
        assert_eq!(request.body, b"{}".to_vec());
    }

    #[test]
    fn test_invalid_body() {
        let err = JsonSerializer::new("Echo").request(b"{nope").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidBody { encoding: Encoding::Json, .. }));
    }
}
