//! header-guard
//!
//! A small HTTP server that writes configured security response headers
//! (`Cross-Origin-Embedder-Policy`, `Referrer-Policy`, static headers) on
//! every response.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.toml ──▶ config ──▶ security::HeadersSpec ──▶ HeaderWriterChain
//!                                                              │ (Arc, frozen)
//!                                                              ▼
//!   Client ──▶ request id ──▶ trace ──▶ security headers ──▶ handler
//!          ◀───────────────────────────── response + headers ◀──┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use header_guard::config::{load_config, GuardConfig};
use header_guard::lifecycle::startup;
use header_guard::observability::logging;

#[derive(Parser)]
#[command(name = "header-guard")]
#[command(about = "HTTP server that writes configured security response headers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Validate configuration and print the headers a response would receive
    Check {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn read_config(path: Option<&PathBuf>) -> Result<GuardConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(GuardConfig::default()),
    }
}

async fn serve(
    config: Option<PathBuf>,
    bind: Option<SocketAddr>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = read_config(config.as_ref())?;
    if let Some(bind) = bind {
        config.listener.bind_address = bind.to_string();
    }

    logging::init(&config.observability)?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    startup::run(config).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn check(config: Option<PathBuf>, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(config.as_ref())?;
    let chain = config.headers.to_spec()?.build();
    let headers = chain.headers();

    if as_json {
        let entries: Vec<_> = headers
            .iter()
            .map(|h| {
                let values: Vec<_> = h
                    .values()
                    .iter()
                    .filter_map(|v| v.to_str().ok())
                    .collect();
                json!({ "name": h.name().as_str(), "values": values })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if headers.is_empty() {
        println!("No security headers will be written.");
    } else {
        for header in &headers {
            println!("{header}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config, bind } => serve(config, bind).await,
        Commands::Check { config, json } => check(config, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
