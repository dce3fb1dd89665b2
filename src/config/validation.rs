//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Validate custom headers and detect conflicts with managed headers
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GuardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GuardConfig;
use crate::security::{CrossOriginEmbedderPolicy, Header, HeaderError, HeaderPolicy, ReferrerPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
    #[error("headers.custom[{index}]: {source}")]
    InvalidHeader { index: usize, source: HeaderError },
    #[error("headers.custom[{index}]: duplicate header {name}")]
    DuplicateHeader { index: usize, name: String },
    #[error("headers.custom[{index}]: {name} is managed by its own section")]
    ManagedHeader { index: usize, name: String },
}

pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let managed = [CrossOriginEmbedderPolicy::HEADER, ReferrerPolicy::HEADER];
    let mut seen = HashSet::new();
    for (index, custom) in config.headers.custom.iter().enumerate() {
        let header = match Header::new(&custom.name, &custom.values) {
            Ok(h) => h,
            Err(source) => {
                errors.push(ValidationError::InvalidHeader { index, source });
                continue;
            }
        };

        let name = header.name().clone();
        if managed.contains(&name) {
            errors.push(ValidationError::ManagedHeader {
                index,
                name: name.to_string(),
            });
        } else if !seen.insert(name.clone()) {
            errors.push(ValidationError::DuplicateHeader {
                index,
                name: name.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::StaticHeaderConfig;

    fn custom(name: &str, values: &[&str]) -> StaticHeaderConfig {
        StaticHeaderConfig {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GuardConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = GuardConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.timeouts.request_secs = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "9090".into();
        config.headers.custom = vec![
            custom("X-Frame-Options", &["DENY"]),
            custom("x-frame-options", &["SAMEORIGIN"]),
            custom("Referrer-Policy", &["origin"]),
            custom("X-Empty", &[]),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidAddress {
                    field: "listener.bind_address",
                    value: "nowhere".into(),
                },
                ValidationError::InvalidAddress {
                    field: "observability.metrics_address",
                    value: "9090".into(),
                },
                ValidationError::ZeroTimeout,
                ValidationError::DuplicateHeader {
                    index: 1,
                    name: "x-frame-options".into(),
                },
                ValidationError::ManagedHeader {
                    index: 2,
                    name: "referrer-policy".into(),
                },
                ValidationError::InvalidHeader {
                    index: 3,
                    source: HeaderError::NoValues("x-empty".into()),
                },
            ]
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = GuardConfig::default();
        config.observability.metrics_address = "not an address".into();
        assert!(validate_config(&config).is_ok());
    }
}
