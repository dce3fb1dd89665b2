//! Frozen registry of header writers.

use axum::http::{HeaderMap, HeaderName};

use crate::security::header::Header;
use crate::security::writer::HeaderWriter;

/// Ordered, immutable set of writers applied to every response.
///
/// Shared behind an `Arc` once serving starts; no method takes `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderWriterChain {
    writers: Vec<HeaderWriter>,
}

impl HeaderWriterChain {
    pub fn new(writers: Vec<HeaderWriter>) -> Self {
        Self { writers }
    }

    pub fn writers(&self) -> &[HeaderWriter] {
        &self.writers
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    /// Headers a response without any of them would receive.
    pub fn headers(&self) -> Vec<Header> {
        self.writers.iter().filter_map(HeaderWriter::compute).collect()
    }

    /// Run every writer once against a response. Returns the names written.
    pub fn write_all(&self, headers: &mut HeaderMap) -> Vec<HeaderName> {
        self.writers
            .iter()
            .filter_map(|w| w.write(headers))
            .map(|h| h.name().clone())
            .collect()
    }
}
