//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, security headers)
//! - Bind server to listener
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::validation::validate_config;
use crate::config::{ConfigError, GuardConfig};
use crate::http::middleware::apply_security_headers;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::observability::metrics;
use crate::security::{HeaderWriterChain, HeadersSpec};

/// HTTP server that stamps the configured security headers on every response.
pub struct HttpServer {
    router: Router,
    config: GuardConfig,
    chain: Arc<HeaderWriterChain>,
}

impl HttpServer {
    /// Create a server whose headers come from `config.headers`.
    pub fn new(config: GuardConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let spec = config.headers.to_spec()?;
        Ok(Self::with_headers(config, spec))
    }

    /// Create a server with headers declared in code; `config.headers` is ignored.
    pub fn with_headers(config: GuardConfig, spec: HeadersSpec) -> Self {
        let chain = Arc::new(spec.build());
        let router = Self::build_router(&config, chain.clone());
        Self {
            router,
            config,
            chain,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GuardConfig, chain: Arc<HeaderWriterChain>) -> Router {
        let router = Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .fallback(not_found_handler)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        apply_security_headers(router, chain)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|req: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %req.method(),
                            path = %req.uri().path(),
                            request_id = %request_id(req),
                        )
                    })
                    .on_response(
                        |res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
                            metrics::record_request(res.status().as_u16());
                            tracing::debug!(
                                status = res.status().as_u16(),
                                latency_ms = latency.as_millis() as u64,
                                "Response sent"
                            );
                        },
                    ),
            )
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            header_writers = self.chain.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The frozen header writer chain.
    pub fn chain(&self) -> &HeaderWriterChain {
        &self.chain
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}

async fn index_handler() -> &'static str {
    "header-guard"
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
