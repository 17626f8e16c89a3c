//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::ClientConfig;
use crate::encoding::Encoding;
use crate::options::{Options, RequestOptions, TransportOptions};
use crate::transport::Headers;

#[derive(Debug, Parser)]
#[command(name = "rpc-client")]
#[command(about = "Resolve peers and prepare RPC requests", long_about = None)]
pub struct Args {
    /// Procedure to call (same as --procedure)
    #[arg(value_name = "PROCEDURE")]
    pub procedure_arg: Option<String>,

    /// Procedure to call, `Service::Method` for Thrift
    #[arg(long)]
    pub procedure: Option<String>,

    /// Target service name
    #[arg(short, long)]
    pub service: Option<String>,

    /// Caller name
    #[arg(long)]
    pub caller: Option<String>,

    /// Peer address (repeatable)
    #[arg(short = 'p', long = "peer")]
    pub peers: Vec<String>,

    /// URL or file listing peers (see --list-schemes)
    #[arg(short = 'P', long)]
    pub peer_list: Option<String>,

    /// Encoding: json, thrift or raw
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Request body, `-` for stdin
    #[arg(short, long, default_value = "")]
    pub request: String,

    /// File holding the request body, `-` for stdin
    #[arg(short, long, default_value = "")]
    pub file: String,

    /// Headers as a YAML or JSON mapping
    #[arg(long, default_value = "")]
    pub headers: String,

    /// File holding headers as a YAML or JSON mapping
    #[arg(long, default_value = "")]
    pub headers_file: String,

    /// Header override as key=value (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_key_value)]
    pub header: Vec<(String, String)>,

    /// Baggage as key=value (repeatable)
    #[arg(short = 'B', long = "baggage", value_parser = parse_key_value)]
    pub baggage: Vec<(String, String)>,

    /// Transport header as key=value (repeatable)
    #[arg(short = 'T', long = "transport-header", value_parser = parse_key_value)]
    pub transport_headers: Vec<(String, String)>,

    /// Shard key for the request
    #[arg(long)]
    pub shard_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Thrift schema file
    #[arg(long)]
    pub thrift: Option<PathBuf>,

    /// The Thrift service is multiplexed
    #[arg(long)]
    pub multiplexed: bool,

    /// Issue a health check instead of a procedure call
    #[arg(long)]
    pub health: bool,

    /// Print the supported --peer-list schemes and exit
    #[arg(long)]
    pub list_schemes: bool,

    /// Defaults file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the options bundle, falling back to `config` for unset flags.
    pub fn options(&self, config: &ClientConfig) -> Options {
        let defaults = &config.defaults;

        let encoding = match &self.encoding {
            Some(name) => name.parse::<Encoding>().unwrap_or_else(|never| match never {}),
            None => defaults.encoding.clone(),
        };

        // Configured peer lists only apply when no peers are given explicitly.
        let peer_list = match (&self.peer_list, self.peers.is_empty()) {
            (Some(url), _) => Some(url.clone()),
            (None, true) => defaults.peer_list.clone(),
            (None, false) => None,
        };

        let request = RequestOptions {
            encoding,
            procedure: self
                .procedure
                .clone()
                .or_else(|| self.procedure_arg.clone())
                .unwrap_or_default(),
            thrift_file: self.thrift.clone(),
            thrift_multiplexed: self.multiplexed,
            health: self.health,
            timeout: Duration::from_millis(self.timeout.unwrap_or(defaults.timeout_ms)),
            request_inline: self.request.clone(),
            request_file: self.file.clone(),
            headers_inline: self.headers.clone(),
            headers_file: self.headers_file.clone(),
            headers: to_headers(&self.header),
            baggage: to_headers(&self.baggage),
        };

        let transport = TransportOptions {
            service_name: self
                .service
                .clone()
                .or_else(|| defaults.service.clone())
                .unwrap_or_default(),
            caller_name: self.caller.clone().unwrap_or_else(|| defaults.caller.clone()),
            peers: self.peers.clone(),
            peer_list,
            transport_headers: to_headers(&self.transport_headers),
            shard_key: self.shard_key.clone().unwrap_or_default(),
        };

        Options { request, transport }
    }
}

fn to_headers(pairs: &[(String, String)]) -> Headers {
    pairs.iter().cloned().collect()
}

/// Parse `key=value`.
pub fn parse_key_value(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got {input:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rpc-client").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("a=b"), Ok(("a".into(), "b".into())));
        assert_eq!(parse_key_value("a=b=c"), Ok(("a".into(), "b=c".into())));
        assert_eq!(parse_key_value("a="), Ok(("a".into(), String::new())));
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=v").is_err());
    }

    #[test]
    fn test_flags_map_to_options() {
        let args = parse(&[
            "-s", "kv", "--procedure", "KV::get", "-p", "1.1.1.1:1", "-B", "tenant=a",
            "-T", "rk=x", "-H", "h=1", "-t", "300", "--shard-key", "s1",
        ]);
        let opts = args.options(&ClientConfig::default());

        assert_eq!(opts.transport.service_name, "kv");
        assert_eq!(opts.transport.peers, vec!["1.1.1.1:1"]);
        assert_eq!(opts.transport.peer_list, None);
        assert_eq!(opts.transport.shard_key, "s1");
        assert_eq!(opts.transport.transport_headers.get("rk").map(String::as_str), Some("x"));
        assert_eq!(opts.request.procedure, "KV::get");
        assert_eq!(opts.request.baggage.get("tenant").map(String::as_str), Some("a"));
        assert_eq!(opts.request.headers.get("h").map(String::as_str), Some("1"));
        assert_eq!(opts.request.timeout, Duration::from_millis(300));
    }

    #[test]
    fn test_positional_procedure() {
        let opts = parse(&["echo"]).options(&ClientConfig::default());
        assert_eq!(opts.request.procedure, "echo");
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let mut config = ClientConfig::default();
        config.defaults.service = Some("from-config".into());
        config.defaults.encoding = Encoding::Raw;
        config.defaults.peer_list = Some("peers.json".into());
        config.defaults.timeout_ms = 900;

        let opts = parse(&["echo"]).options(&config);
        assert_eq!(opts.transport.service_name, "from-config");
        assert_eq!(opts.transport.caller_name, "rpc-client");
        assert_eq!(opts.transport.peer_list.as_deref(), Some("peers.json"));
        assert_eq!(opts.request.encoding, Encoding::Raw);
        assert_eq!(opts.request.timeout, Duration::from_millis(900));

        let opts = parse(&["echo", "-e", "json", "-p", "h:1"]).options(&config);
        assert_eq!(opts.request.encoding, Encoding::Json);
        assert_eq!(opts.transport.peer_list, None);
    }
}
