//! Builder DSL for declaring security headers.
//!
//! ```
//! use header_guard::security::{CrossOriginEmbedderPolicy, HeadersSpec};
//!
//! let chain = HeadersSpec::new()
//!     .cross_origin_embedder_policy(|coep| {
//!         coep.policy = Some(CrossOriginEmbedderPolicy::RequireCorp);
//!     })
//!     .referrer_policy(|_| {})
//!     .build();
//! assert_eq!(chain.len(), 2);
//! ```

use crate::security::chain::HeaderWriterChain;
use crate::security::header::Header;
use crate::security::policy::{CrossOriginEmbedderPolicy, HeaderPolicy, ReferrerPolicy};
use crate::security::writer::{HeaderWriter, PolicyHeaderWriter, StaticHeadersWriter};

/// Mutable holder for one header's policy during the build phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySpec<P: HeaderPolicy> {
    pub policy: Option<P>,
}

impl<P: HeaderPolicy> Default for PolicySpec<P> {
    fn default() -> Self {
        Self { policy: None }
    }
}

impl<P: HeaderPolicy> PolicySpec<P> {
    /// Set the policy. A later call replaces an earlier one.
    pub fn set_policy(&mut self, policy: P) -> &mut Self {
        self.policy = Some(policy);
        self
    }

    pub fn policy(&self) -> Option<P> {
        self.policy
    }

    fn writer(&self) -> PolicyHeaderWriter<P> {
        PolicyHeaderWriter::new(self.policy)
    }
}

/// Declaration of the headers a chain writes.
///
/// Only declared headers get a writer. Nothing is frozen until [`build`].
///
/// [`build`]: HeadersSpec::build
#[derive(Debug, Clone, Default)]
pub struct HeadersSpec {
    disabled: bool,
    cross_origin_embedder_policy: Option<PolicySpec<CrossOriginEmbedderPolicy>>,
    referrer_policy: Option<PolicySpec<ReferrerPolicy>>,
    custom: Vec<Header>,
}

impl HeadersSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `Cross-Origin-Embedder-Policy`. With no policy set, nothing is written.
    pub fn cross_origin_embedder_policy<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut PolicySpec<CrossOriginEmbedderPolicy>),
    {
        configure(self.cross_origin_embedder_policy.get_or_insert_with(Default::default));
        self
    }

    /// Declare `Referrer-Policy`. With no policy set, `no-referrer` is written.
    pub fn referrer_policy<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut PolicySpec<ReferrerPolicy>),
    {
        configure(self.referrer_policy.get_or_insert_with(Default::default));
        self
    }

    /// Add a static header.
    pub fn header(mut self, header: Header) -> Self {
        self.custom.push(header);
        self
    }

    /// Turn every header off, including ones already declared.
    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Freeze the declaration into a writer chain.
    pub fn build(self) -> HeaderWriterChain {
        if self.disabled {
            tracing::debug!("Security headers disabled; chain is empty");
            return HeaderWriterChain::default();
        }

        let mut writers = Vec::with_capacity(2 + self.custom.len());
        if let Some(spec) = self.cross_origin_embedder_policy {
            writers.push(HeaderWriter::CrossOriginEmbedderPolicy(spec.writer()));
        }
        if let Some(spec) = self.referrer_policy {
            writers.push(HeaderWriter::ReferrerPolicy(spec.writer()));
        }
        writers.extend(
            self.custom
                .into_iter()
                .map(|h| HeaderWriter::Static(StaticHeadersWriter::new(h))),
        );

        for writer in &writers {
            tracing::debug!(writer = writer.kind(), "Registered header writer");
        }
        HeaderWriterChain::new(writers)
    }
}
