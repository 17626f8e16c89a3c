//! rpc-client
//!
//! Resolves the peers of an RPC service and assembles the request a
//! transport would send.
//!
//! # Architecture Overview
//!
//! ```text
//! flags + defaults.toml
//!     → Options
//!     → peers: --peer, or --peer-list through the scheme registry
//!     → base Request: input + serializer
//!     → RequestPipeline: metadata → middleware → overrides
//!     → PreparedCall { peers, request } printed to stdout
//! ```

use std::process::ExitCode;

use clap::Parser;

use rpc_client::cli::{self, Args};
use rpc_client::config;
use rpc_client::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);
    tracing::debug!(
        service = ?config.defaults.service,
        peer_list = ?config.defaults.peer_list,
        "Configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();
    match cli::run(&args, &config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
