//! A single response header entry.

use std::fmt;

use axum::http::header::{HeaderName, HeaderValue};
use thiserror::Error;

/// Reasons a header entry cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("header name is required")]
    EmptyName,
    #[error("invalid header name: {0:?}")]
    InvalidName(String),
    #[error("header {0} needs at least one value")]
    NoValues(String),
    #[error("invalid value {value:?} for header {name}")]
    InvalidValue { name: String, value: String },
}

/// A header name with one or more values, ready to be appended to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: HeaderName,
    values: Vec<HeaderValue>,
}

impl Header {
    /// Build a header from text, validating the name and every value.
    pub fn new<I, V>(name: &str, values: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        if name.trim().is_empty() {
            return Err(HeaderError::EmptyName);
        }
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HeaderError::InvalidName(name.to_string()))?;

        let values = values
            .into_iter()
            .map(|v| {
                HeaderValue::from_str(v.as_ref()).map_err(|_| HeaderError::InvalidValue {
                    name: header_name.to_string(),
                    value: v.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.is_empty() {
            return Err(HeaderError::NoValues(header_name.to_string()));
        }

        Ok(Self {
            name: header_name,
            values,
        })
    }

    /// Single-valued header from a known-good name and a static value.
    pub(crate) fn from_static(name: HeaderName, value: &'static str) -> Self {
        Self {
            name,
            values: vec![HeaderValue::from_static(value)],
        }
    }

    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    pub fn values(&self) -> &[HeaderValue] {
        &self.values
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(value.to_str().unwrap_or("<opaque>"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_header() {
        let header = Header::new("X-Content-Type-Options", ["nosniff"]).unwrap();
        assert_eq!(header.name().as_str(), "x-content-type-options");
        assert_eq!(header.values(), &[HeaderValue::from_static("nosniff")]);
        assert_eq!(header.to_string(), "x-content-type-options: nosniff");
    }

    #[test]
    fn test_multiple_values() {
        let header = Header::new("Cache-Control", ["no-cache", "no-store"]).unwrap();
        assert_eq!(header.values().len(), 2);
        assert_eq!(header.to_string(), "cache-control: no-cache, no-store");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(Header::new("", ["x"]), Err(HeaderError::EmptyName));
        assert_eq!(Header::new("  ", ["x"]), Err(HeaderError::EmptyName));
        assert!(matches!(
            Header::new("bad header", ["x"]),
            Err(HeaderError::InvalidName(_))
        ));
        assert_eq!(
            Header::new("X-Empty", Vec::<String>::new()),
            Err(HeaderError::NoValues("x-empty".to_string()))
        );
        assert!(matches!(
            Header::new("X-Bad", ["line\nbreak"]),
            Err(HeaderError::InvalidValue { .. })
        ));
    }
}
