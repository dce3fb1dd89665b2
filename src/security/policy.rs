//! Policy values for policy-valued security headers.
//!
//! # Responsibilities
//! - Define the closed set of valid tokens for each header
//! - Map every variant to its exact wire string
//! - Parse wire strings coming from configuration files
//!
//! # Design Decisions
//! - One enum per header; free-form strings never reach a response
//! - Parsing is exact and case-sensitive, matching what browsers accept
//! - Each policy names its header and its fallback through `HeaderPolicy`

use std::fmt;
use std::str::FromStr;

use axum::http::header::{HeaderName, REFERRER_POLICY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed set of values for one security response header.
pub trait HeaderPolicy: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Header this policy is written to.
    const HEADER: HeaderName;

    /// Value used when the header is declared without a policy.
    /// `None` means the header is omitted.
    const DEFAULT: Option<Self>;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Exact wire value of this variant.
    fn as_str(&self) -> &'static str;
}

/// Error returned when a string is not a known policy token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {header} policy: {value:?}")]
pub struct UnknownPolicy {
    pub header: String,
    pub value: String,
}

fn parse_policy<P: HeaderPolicy>(s: &str) -> Result<P, UnknownPolicy> {
    P::ALL
        .iter()
        .copied()
        .find(|p| p.as_str() == s)
        .ok_or_else(|| UnknownPolicy {
            header: P::HEADER.as_str().to_string(),
            value: s.to_string(),
        })
}

/// Values of the `Cross-Origin-Embedder-Policy` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOriginEmbedderPolicy {
    UnsafeNone,
    RequireCorp,
    Credentialless,
}

pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");

impl HeaderPolicy for CrossOriginEmbedderPolicy {
    const HEADER: HeaderName = CROSS_ORIGIN_EMBEDDER_POLICY;
    const DEFAULT: Option<Self> = None;
    const ALL: &'static [Self] = &[Self::UnsafeNone, Self::RequireCorp, Self::Credentialless];

    fn as_str(&self) -> &'static str {
        match self {
            Self::UnsafeNone => "unsafe-none",
            Self::RequireCorp => "require-corp",
            Self::Credentialless => "credentialless",
        }
    }
}

/// Values of the `Referrer-Policy` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerPolicy {
    NoReferrer,
    NoReferrerWhenDowngrade,
    SameOrigin,
    Origin,
    StrictOrigin,
    OriginWhenCrossOrigin,
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

impl HeaderPolicy for ReferrerPolicy {
    const HEADER: HeaderName = REFERRER_POLICY;
    const DEFAULT: Option<Self> = Some(Self::NoReferrer);
    const ALL: &'static [Self] = &[
        Self::NoReferrer,
        Self::NoReferrerWhenDowngrade,
        Self::SameOrigin,
        Self::Origin,
        Self::StrictOrigin,
        Self::OriginWhenCrossOrigin,
        Self::StrictOriginWhenCrossOrigin,
        Self::UnsafeUrl,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::NoReferrer => "no-referrer",
            Self::NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
            Self::SameOrigin => "same-origin",
            Self::Origin => "origin",
            Self::StrictOrigin => "strict-origin",
            Self::OriginWhenCrossOrigin => "origin-when-cross-origin",
            Self::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
            Self::UnsafeUrl => "unsafe-url",
        }
    }
}

macro_rules! policy_text_impls {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownPolicy;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_policy(s)
            }
        }
    )*};
}

policy_text_impls!(CrossOriginEmbedderPolicy, ReferrerPolicy);
