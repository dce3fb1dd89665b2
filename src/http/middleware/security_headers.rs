//! Security headers middleware.
//! Runs the writer chain once on every outgoing response.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};

use crate::observability::metrics;
use crate::security::HeaderWriterChain;

pub async fn security_headers_middleware(
    State(chain): State<Arc<HeaderWriterChain>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    for name in chain.write_all(response.headers_mut()) {
        tracing::trace!(header = %name, "Security header written");
        metrics::record_header_written(name.as_str());
    }

    response
}

/// Register the chain on every route of `router`, fallback included.
pub fn apply<S>(router: Router<S>, chain: Arc<HeaderWriterChain>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if chain.is_empty() {
        return router;
    }
    router.layer(middleware::from_fn_with_state(chain, security_headers_middleware))
}
