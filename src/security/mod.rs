//! Security response headers.
//!
//! # Data Flow
//! ```text
//! Build phase (single-threaded):
//!     dsl.rs (HeadersSpec, PolicySpec holders)
//!     → build()
//!     → chain.rs (HeaderWriterChain, frozen)
//!
//! Serving (per response):
//!     http::middleware::security_headers
//!     → chain.write_all()
//!     → writer.rs (compute header, append if absent)
//! ```
//!
//! # Design Decisions
//! - Policy values are closed enums (policy.rs); no free-form strings
//! - Writers are pure; the chain is shared without locks
//! - Only declared headers are registered

pub mod chain;
pub mod dsl;
pub mod header;
pub mod policy;
pub mod writer;

pub use chain::HeaderWriterChain;
pub use dsl::{HeadersSpec, PolicySpec};
pub use header::{Header, HeaderError};
pub use policy::{CrossOriginEmbedderPolicy, HeaderPolicy, ReferrerPolicy, UnknownPolicy};
pub use writer::{compute_header, HeaderWriter, PolicyHeaderWriter, StaticHeadersWriter};
