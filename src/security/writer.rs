//! Header writers.
//!
//! # Responsibilities
//! - Compute a header entry from frozen configuration (pure)
//! - Append the entry to a response header map if the name is absent
//!
//! # Design Decisions
//! - The set of writers is closed, so `HeaderWriter` is an enum
//! - Computing never fails and carries no hidden state
//! - Headers already present on the response win over configured ones

use axum::http::HeaderMap;

use crate::security::header::Header;
use crate::security::policy::{CrossOriginEmbedderPolicy, HeaderPolicy, ReferrerPolicy};

/// Compute the header for a policy-valued header.
///
/// Unset falls back to `P::DEFAULT`; if that is `None` too, nothing is emitted.
pub fn compute_header<P: HeaderPolicy>(policy: Option<P>) -> Option<Header> {
    policy
        .or(P::DEFAULT)
        .map(|p| Header::from_static(P::HEADER, p.as_str()))
}

/// Append `header` unless the map already carries its name.
fn write_if_absent(header: &Header, headers: &mut HeaderMap) -> bool {
    if headers.contains_key(header.name()) {
        return false;
    }
    for value in header.values() {
        headers.append(header.name().clone(), value.clone());
    }
    true
}

/// Writer for one policy-valued header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyHeaderWriter<P: HeaderPolicy> {
    policy: Option<P>,
}

impl<P: HeaderPolicy> PolicyHeaderWriter<P> {
    pub fn new(policy: Option<P>) -> Self {
        Self { policy }
    }

    pub fn compute(&self) -> Option<Header> {
        compute_header(self.policy)
    }
}

/// Writer for a fixed, integrator-declared header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHeadersWriter {
    header: Header,
}

impl StaticHeadersWriter {
    pub fn new(header: Header) -> Self {
        Self { header }
    }

    pub fn compute(&self) -> Option<Header> {
        Some(self.header.clone())
    }
}

/// Every writer a chain can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderWriter {
    CrossOriginEmbedderPolicy(PolicyHeaderWriter<CrossOriginEmbedderPolicy>),
    ReferrerPolicy(PolicyHeaderWriter<ReferrerPolicy>),
    Static(StaticHeadersWriter),
}

impl HeaderWriter {
    /// Header this writer would emit, if any.
    pub fn compute(&self) -> Option<Header> {
        match self {
            Self::CrossOriginEmbedderPolicy(w) => w.compute(),
            Self::ReferrerPolicy(w) => w.compute(),
            Self::Static(w) => w.compute(),
        }
    }

    /// Write onto a response. Returns the written header, or `None` if
    /// nothing was computed or the response already had that header.
    pub fn write(&self, headers: &mut HeaderMap) -> Option<Header> {
        let header = self.compute()?;
        write_if_absent(&header, headers).then_some(header)
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CrossOriginEmbedderPolicy(_) => "cross_origin_embedder_policy",
            Self::ReferrerPolicy(_) => "referrer_policy",
            Self::Static(_) => "static",
        }
    }
}
