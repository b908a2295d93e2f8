//! Error types for openapi-observer
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Only conditions that must abort a call live here. Recoverable
//! observations (malformed bodies, unrecognized media types) are surfaced
//! as [`crate::diagnostics::Warning`] values instead.

use thiserror::Error;

/// The main error type for openapi-observer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inference Errors
    // ============================================================================
    /// A value's runtime category has no mapping to a schema type.
    /// Fatal to the inference call: silently mis-typing data would
    /// corrupt the document.
    #[error("Unsupported value type: {category}")]
    UnsupportedType { category: String },

    // ============================================================================
    // Exchange Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Exchange URL has no host: {url}")]
    MissingHost { url: String },

    // ============================================================================
    // Export Errors
    // ============================================================================
    #[error("Invalid export format: {format}")]
    InvalidExportFormat { format: String },

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to serialize YAML: {0}")]
    YamlSerialize(#[from] serde_yaml::Error),
}

impl Error {
    /// Create an unsupported-type error
    pub fn unsupported_type(category: impl Into<String>) -> Self {
        Self::UnsupportedType {
            category: category.into(),
        }
    }

    /// Create an invalid-export-format error
    pub fn invalid_export_format(format: impl Into<String>) -> Self {
        Self::InvalidExportFormat {
            format: format.into(),
        }
    }

    /// Create a missing-host error
    pub fn missing_host(url: impl Into<String>) -> Self {
        Self::MissingHost { url: url.into() }
    }
}

/// Result type alias for openapi-observer
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_type("Function");
        assert_eq!(err.to_string(), "Unsupported value type: Function");

        let err = Error::invalid_export_format("toml");
        assert_eq!(err.to_string(), "Invalid export format: toml");

        let err = Error::missing_host("file:///tmp/x");
        assert_eq!(err.to_string(), "Exchange URL has no host: file:///tmp/x");
    }
}
