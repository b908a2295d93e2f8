//! Non-fatal diagnostics
//!
//! Classification problems that should not abort an observation are
//! collected as [`Warning`] values. They ride along with the classified
//! exchange and are returned from
//! [`OpenapiGenerator::add_response`](crate::document::OpenapiGenerator::add_response),
//! so callers (and tests) can assert on them. Each warning is also emitted
//! as a `tracing::warn!` event when it is raised.

use serde::{Deserialize, Serialize};

/// A recoverable problem encountered while classifying an exchange.
///
/// The affected contribution (a request or response body) is dropped and
/// the rest of the exchange is still folded into the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Warning {
    /// A body declared as JSON failed to parse (or was not a JSON object).
    MalformedBody { detail: String },

    /// A response content type outside the recognized set.
    UnsupportedMediaType { content_type: String },
}

impl Warning {
    /// Create a malformed-body warning and emit it on the log channel.
    pub(crate) fn malformed_body(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::warn!(detail = %detail, "invalid json passed");
        Self::MalformedBody { detail }
    }

    /// Create an unsupported-media-type warning and emit it on the log channel.
    pub(crate) fn unsupported_media_type(content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        tracing::warn!(content_type = %content_type, "unsupported response media type");
        Self::UnsupportedMediaType { content_type }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MalformedBody { detail } => write!(f, "invalid json passed: {detail}"),
            Warning::UnsupportedMediaType { content_type } => {
                write!(f, "unsupported media type: {content_type}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let w = Warning::MalformedBody {
            detail: "expected value at line 1".to_string(),
        };
        assert_eq!(
            w.to_string(),
            "invalid json passed: expected value at line 1"
        );

        let w = Warning::UnsupportedMediaType {
            content_type: "text/html".to_string(),
        };
        assert_eq!(w.to_string(), "unsupported media type: text/html");
    }
}
