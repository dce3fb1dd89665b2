//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::security::{
    CrossOriginEmbedderPolicy, Header, HeaderError, HeadersSpec, ReferrerPolicy,
};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security response headers.
    pub headers: HeadersConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security response headers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Master switch. When false no security header is written.
    pub enabled: bool,

    pub cross_origin_embedder_policy: PolicySection<CrossOriginEmbedderPolicy>,

    pub referrer_policy: PolicySection<ReferrerPolicy>,

    /// Extra headers written verbatim.
    pub custom: Vec<StaticHeaderConfig>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cross_origin_embedder_policy: PolicySection::default(),
            referrer_policy: PolicySection::default(),
            custom: Vec::new(),
        }
    }
}

/// One policy-valued header.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicySection<P> {
    /// Register the writer for this header.
    pub enabled: bool,

    /// Policy to write. Unset means the header's own default.
    pub policy: Option<P>,
}

impl<P> Default for PolicySection<P> {
    fn default() -> Self {
        Self {
            enabled: true,
            policy: None,
        }
    }
}

/// A header written as-is.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StaticHeaderConfig {
    pub name: String,
    pub values: Vec<String>,
}

impl HeadersConfig {
    /// Translate the `[headers]` table into a header declaration.
    pub fn to_spec(&self) -> Result<HeadersSpec, HeaderError> {
        let mut spec = HeadersSpec::new();

        if self.cross_origin_embedder_policy.enabled {
            let policy = self.cross_origin_embedder_policy.policy;
            spec = spec.cross_origin_embedder_policy(|c| c.policy = policy);
        }
        if self.referrer_policy.enabled {
            let policy = self.referrer_policy.policy;
            spec = spec.referrer_policy(|r| r.policy = policy);
        }
        for custom in &self.custom {
            spec = spec.header(Header::new(&custom.name, &custom.values)?);
        }

        if !self.enabled {
            spec = spec.disable();
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::HeaderWriter;

    #[test]
    fn test_defaults_declare_both_policies() {
        let chain = HeadersConfig::default().to_spec().unwrap().build();
        let rendered: Vec<String> = chain.headers().iter().map(|h| h.to_string()).collect();
        assert_eq!(chain.len(), 2);
        assert_eq!(rendered, vec!["referrer-policy: no-referrer"]);
    }

    #[test]
    fn test_parse_headers_table() {
        let config: GuardConfig = toml::from_str(
            r#"
            [headers.cross_origin_embedder_policy]
            policy = "require-corp"

            [headers.referrer_policy]
            enabled = false

            [[headers.custom]]
            name = "X-Content-Type-Options"
            values = ["nosniff"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.headers.cross_origin_embedder_policy.policy,
            Some(CrossOriginEmbedderPolicy::RequireCorp)
        );
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");

        let chain = config.headers.to_spec().unwrap().build();
        let kinds: Vec<_> = chain.writers().iter().map(HeaderWriter::kind).collect();
        assert_eq!(kinds, vec!["cross_origin_embedder_policy", "static"]);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = toml::from_str::<GuardConfig>(
            r#"
            [headers.referrer_policy]
            policy = "everything"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_master_switch() {
        let config = HeadersConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(config.to_spec().unwrap().build().is_empty());
    }
}
