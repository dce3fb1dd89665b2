//! Security response headers for axum servers.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::GuardConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{HeaderWriterChain, HeadersSpec};
