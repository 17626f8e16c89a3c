//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject encodings and logging settings the client cannot honor
//! - Validate value ranges (budgets > 0, non-blank URLs)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::ClientConfig;
use crate::encoding::Encoding;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check `config` for values the client cannot use.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Encoding::Other(name) = &config.defaults.encoding {
        errors.push(ValidationError {
            field: "defaults.encoding",
            message: format!("unknown encoding {name:?}, must be one of: json, thrift, raw"),
        });
    }

    if config.defaults.peer_list_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "defaults.peer_list_timeout_ms",
            message: "must be greater than zero".to_string(),
        });
    }

    if matches!(&config.defaults.peer_list, Some(url) if url.trim().is_empty()) {
        errors.push(ValidationError {
            field: "defaults.peer_list",
            message: "must not be blank".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError {
            field: "logging.level",
            message: format!("unknown level {:?}", config.logging.level),
        });
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        errors.push(ValidationError {
            field: "logging.format",
            message: format!("unknown format {:?}, expected pretty or json", config.logging.format),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ClientConfig::default();
        config.defaults.encoding = Encoding::Other("avro".into());
        config.defaults.peer_list_timeout_ms = 0;
        config.defaults.peer_list = Some("  ".into());
        config.logging.level = "loud".into();
        config.logging.format = "xml".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "defaults.encoding",
                "defaults.peer_list_timeout_ms",
                "defaults.peer_list",
                "logging.level",
                "logging.format",
            ]
        );
    }
}
