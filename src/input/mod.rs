//! Header and body input acquisition.
//!
//! # Responsibilities
//! - Read raw request bytes from stdin, a file, or an inline flag value
//! - Parse header input as a YAML mapping and overlay user overrides
//!
//! # Design Decisions
//! - `-` in either the inline or the file position means stdin
//! - A file wins over an inline value when both are given
//! - Empty input is valid and yields an empty body or the overrides alone

use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;

use crate::transport::{merge_overrides, Headers};

/// Errors raised while acquiring header or body input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The named file could not be read.
    #[error("failed to open request file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// Header input is not a mapping of scalars.
    #[error("unmarshal headers failed: {0}")]
    Parse(String),
}

/// Read input from stdin, `file`, or `inline`, in that order of precedence.
pub fn get_input(inline: &str, file: &str) -> Result<Vec<u8>, InputError> {
    get_input_from(inline, file, io::stdin().lock())
}

/// [`get_input`] with an explicit stdin.
pub fn get_input_from<R: Read>(inline: &str, file: &str, mut stdin: R) -> Result<Vec<u8>, InputError> {
    if file == "-" || inline == "-" {
        let mut contents = Vec::new();
        stdin.read_to_end(&mut contents).map_err(InputError::Stdin)?;
        return Ok(contents);
    }

    if !file.is_empty() {
        return std::fs::read(file).map_err(|source| InputError::Read {
            path: PathBuf::from(file),
            source,
        });
    }

    if !inline.is_empty() {
        return Ok(inline.as_bytes().to_vec());
    }

    Ok(Vec::new())
}

/// Acquire header input and overlay `overrides` on top of it.
pub fn get_headers(inline: &str, file: &str, overrides: &Headers) -> Result<Headers, InputError> {
    let contents = get_input(inline, file)?;
    headers_from_input(&contents, overrides)
}

/// Parse `contents` as a header mapping, then overlay `overrides`.
pub fn headers_from_input(contents: &[u8], overrides: &Headers) -> Result<Headers, InputError> {
    if contents.is_empty() {
        return Ok(overrides.clone());
    }

    let mut headers = parse_headers(contents)?;
    merge_overrides(&mut headers, overrides);
    Ok(headers)
}

/// Scalars keep their text as written (`1.10` stays `1.10`); an explicit null
/// becomes an empty value.
fn parse_headers(contents: &[u8]) -> Result<Headers, InputError> {
    let parsed: Option<BTreeMap<String, Option<String>>> =
        serde_yaml::from_slice(contents).map_err(|e| InputError::Parse(e.to_string()))?;

    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}
