//! Peer list document parsing.
//!
//! Accepted formats, tried in order:
//! - JSON array of strings (`["10.0.0.1:4040", "10.0.0.2:4040"]`)
//! - YAML sequence of scalars (`- 10.0.0.1:4040`)
//! - One peer per line; blank lines and `#` comments are skipped

use crate::peers::provider::ProviderError;

/// Parse a peer list document into a non-empty list of peers.
pub fn parse_peer_list(contents: &[u8]) -> Result<Vec<String>, ProviderError> {
    let text = std::str::from_utf8(contents)
        .map_err(|e| ProviderError::Parse(format!("peer list is not UTF-8: {e}")))?;
    let trimmed = text.trim();

    let peers = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<String>>(trimmed)
            .map_err(|e| ProviderError::Parse(format!("peer list is not a JSON array of strings: {e}")))?
    } else if let Some(peers) = parse_yaml_sequence(trimmed)? {
        peers
    } else {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    };

    let peers: Vec<String> = peers.into_iter().map(|p| p.trim().to_string()).collect();
    if peers.iter().any(String::is_empty) {
        return Err(ProviderError::Parse("peer list contains an empty entry".into()));
    }
    if peers.is_empty() {
        return Err(ProviderError::EmptyPeerList);
    }
    Ok(peers)
}

/// Returns `None` unless the document is a YAML sequence. Once it is one,
/// every item must be a non-null scalar, kept as written.
fn parse_yaml_sequence(text: &str) -> Result<Option<Vec<String>>, ProviderError> {
    let is_sequence = serde_yaml::from_str::<serde_yaml::Value>(text)
        .map(|value| value.is_sequence())
        .unwrap_or(false);
    if !is_sequence {
        return Ok(None);
    }

    let items: Vec<Option<String>> = serde_yaml::from_str(text)
        .map_err(|e| ProviderError::Parse(format!("peer list is not a sequence of strings: {e}")))?;
    items
        .into_iter()
        .map(|item| item.ok_or_else(|| ProviderError::Parse("peer list contains an empty entry".into())))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let peers = parse_peer_list(br#"["1.1.1.1:1", "2.2.2.2:2"]"#).unwrap();
        assert_eq!(peers, vec!["1.1.1.1:1", "2.2.2.2:2"]);
    }

    #[test]
    fn test_yaml_sequence() {
        let peers = parse_peer_list(b"- 1.1.1.1:1\n- 2.2.2.2:2\n").unwrap();
        assert_eq!(peers, vec!["1.1.1.1:1", "2.2.2.2:2"]);
    }

    #[test]
    fn test_yaml_sequence_with_bad_item() {
        assert!(matches!(parse_peer_list(b"- a:1\n-\n"), Err(ProviderError::Parse(_))));
        assert!(matches!(parse_peer_list(b"- a:1\n- [b:1]\n"), Err(ProviderError::Parse(_))));
    }

    #[test]
    fn test_newline_separated() {
        let peers = parse_peer_list(b"# hosts\n1.1.1.1:1\n\n  2.2.2.2:2  \n").unwrap();
        assert_eq!(peers, vec!["1.1.1.1:1", "2.2.2.2:2"]);
    }

    #[test]
    fn test_single_host() {
        let peers = parse_peer_list(b"localhost:4040").unwrap();
        assert_eq!(peers, vec!["localhost:4040"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(matches!(parse_peer_list(b"  \n"), Err(ProviderError::EmptyPeerList)));
        assert!(matches!(parse_peer_list(b"[]"), Err(ProviderError::EmptyPeerList)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_peer_list(b"[1, 2"), Err(ProviderError::Parse(_))));
        assert!(matches!(parse_peer_list(br#"["a", ""]"#), Err(ProviderError::Parse(_))));
    }
}
