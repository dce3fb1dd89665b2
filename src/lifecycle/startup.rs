//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the server (and its header chain) from validated configuration
//! - Start the metrics endpoint when enabled
//! - Bind the listener and serve until a signal arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, GuardConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),
    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the server described by `config` until SIGINT/SIGTERM.
pub async fn run(config: GuardConfig) -> Result<(), StartupError> {
    let server = HttpServer::new(config)?;
    for header in server.chain().headers() {
        tracing::info!(header = %header, "Security header enabled");
    }

    let observability = &server.config().observability;
    if observability.metrics_enabled {
        let addr: SocketAddr = observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    server.run(listener, server_shutdown).await?;
    Ok(())
}
