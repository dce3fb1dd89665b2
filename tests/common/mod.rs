//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use header_guard::config::GuardConfig;
use header_guard::{HeadersSpec, HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral port. Shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

async fn spawn(server: HttpServer) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;
    TestServer { addr, shutdown }
}

/// Start a server with headers declared through the builder.
#[allow(dead_code)]
pub async fn start_with_headers(spec: HeadersSpec) -> TestServer {
    spawn(HttpServer::with_headers(GuardConfig::default(), spec)).await
}

/// Start a server from TOML configuration text.
#[allow(dead_code)]
pub async fn start_with_config(toml: &str) -> TestServer {
    let config = header_guard::config::parse_config(toml).unwrap();
    spawn(HttpServer::new(config).unwrap()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
