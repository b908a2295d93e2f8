//! Classification output types
//!
//! These are the OpenAPI operation building blocks one observed exchange
//! contributes: parameters, an optional request body, and one response
//! object keyed by status code.

use crate::diagnostics::Warning;
use crate::schema::SchemaFragment;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a parameter was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Cookie,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Cookie => write!(f, "cookie"),
        }
    }
}

/// One observed operation parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location (query, header or cookie)
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    /// Schema of the observed value
    pub schema: SchemaFragment,

    /// The observed value itself
    pub example: Value,

    /// Whether the parameter appeared in every observation so far.
    /// Starts true; the merger clears it the first time an observation
    /// omits the parameter, and never sets it back.
    pub required: bool,
}

/// A named example attached to a media type (used for binary file bodies)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleObject {
    pub summary: String,
    pub value: Value,
}

/// Schema (and optional examples) for one media type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTypeObject {
    pub schema: SchemaFragment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, ExampleObject>>,
}

impl MediaTypeObject {
    /// Media type entry carrying only a schema
    pub fn new(schema: SchemaFragment) -> Self {
        Self {
            schema,
            examples: None,
        }
    }
}

/// Request body description for an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub content: IndexMap<String, MediaTypeObject>,
}

impl RequestBody {
    /// JSON request body with the given object schema
    pub fn json(schema: SchemaFragment) -> Self {
        let mut content = IndexMap::new();
        content.insert("application/json".to_string(), MediaTypeObject::new(schema));
        Self { content }
    }

    /// Binary file request body with the raw payload as a sample
    pub fn binary_file(media_type: impl Into<String>, sample: impl Into<String>) -> Self {
        let mut examples = IndexMap::new();
        examples.insert(
            "sample".to_string(),
            ExampleObject {
                summary: "Observed file payload".to_string(),
                value: Value::String(sample.into()),
            },
        );
        let mut content = IndexMap::new();
        content.insert(
            media_type.into(),
            MediaTypeObject {
                schema: SchemaFragment::binary(),
                examples: Some(examples),
            },
        );
        Self { content }
    }
}

/// Response description for one status code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Response description (OpenAPI requires the field, even when empty)
    pub description: String,

    /// Per media type schemas; empty for unrecognized media types
    pub content: IndexMap<String, MediaTypeObject>,
}

impl ResponseObject {
    /// Response with no content entries
    pub fn empty() -> Self {
        Self {
            description: String::new(),
            content: IndexMap::new(),
        }
    }

    /// Response with a single media type entry
    pub fn with_content(media_type: impl Into<String>, media: MediaTypeObject) -> Self {
        let mut content = IndexMap::new();
        content.insert(media_type.into(), media);
        Self {
            description: String::new(),
            content,
        }
    }
}

/// Everything one exchange contributes to the document.
///
/// Produced by [`classify`](super::classify); folded into the cumulative
/// document by the merger.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedExchange {
    /// URL path, query string excluded
    pub path: String,
    /// Lower-cased HTTP method
    pub method: String,
    /// `scheme://host` of the request URL
    pub server: String,
    /// Observed parameters: query, then header, then cookie
    pub parameters: Vec<Parameter>,
    /// Request body contribution, if any survived classification
    pub request_body: Option<RequestBody>,
    /// Stringified response status code
    pub status: String,
    /// Response contribution for that status
    pub response: ResponseObject,
    /// Non-fatal problems found along the way
    pub warnings: Vec<Warning>,
}
