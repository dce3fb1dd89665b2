//! HTTP middleware.

pub mod security_headers;

pub use security_headers::{apply as apply_security_headers, security_headers_middleware};
