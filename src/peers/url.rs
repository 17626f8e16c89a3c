//! Peer-list URLs.
//!
//! A peer list may be given as an absolute URL (`http://host/peers`,
//! `file:///etc/peers.json`, or any registered scheme) or as a bare path
//! (`peers.json`), which resolves through the empty scheme.

use std::fmt;
use std::path::PathBuf;

use url::Url;

/// A peer-list location and the scheme used to dispatch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerUrl {
    raw: String,
    scheme: String,
    url: Option<Url>,
}

impl PeerUrl {
    /// Split `input` into its scheme and parsed form. Never fails: input
    /// without a scheme dispatches through the empty scheme.
    pub fn parse(input: &str) -> Self {
        let scheme = scheme_of(input).map(str::to_ascii_lowercase).unwrap_or_default();
        let url = if scheme.is_empty() {
            None
        } else {
            Url::parse(input).ok()
        };
        Self {
            raw: input.to_string(),
            scheme,
            url,
        }
    }

    /// Lower-cased scheme, empty for bare paths.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The input exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL, when the input is an absolute URL.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Local filesystem path named by a bare path or a `file:` URL.
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.scheme.is_empty() {
            return (!self.raw.is_empty()).then(|| PathBuf::from(&self.raw));
        }
        let url = self.url.as_ref()?;
        if url.path().is_empty() {
            return None;
        }
        url.to_file_path()
            .ok()
            .or_else(|| Some(PathBuf::from(url.path())))
    }
}

impl fmt::Display for PeerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PeerUrl {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

/// RFC 3986 scheme prefix: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn scheme_of(input: &str) -> Option<&str> {
    let (candidate, _) = input.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(candidate)
}
