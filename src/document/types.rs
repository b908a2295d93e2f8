//! OpenAPI document model
//!
//! The in-memory shape serializes losslessly to OpenAPI 3.0.1 JSON/YAML.
//! Maps are `IndexMap`s so paths, methods and responses render in
//! observation order.

use crate::classify::{Parameter, RequestBody, ResponseObject};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// OpenAPI version emitted by this crate
pub const OPENAPI_VERSION: &str = "3.0.1";

/// The `info` block of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// One `servers` entry; the URL is unique within the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    pub description: String,
}

/// Documented behavior of one method on one path.
///
/// Mutated in place as later observations of the same path+method arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Response objects keyed by stringified status code
    pub responses: IndexMap<String, ResponseObject>,
}

/// Methods documented for one path, keyed by lower-cased method name
pub type PathItem = IndexMap<String, Operation>;

/// The cumulative OpenAPI document.
///
/// Servers and paths grow monotonically as exchanges are observed; nothing
/// is ever removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub openapi: String,

    pub info: Info,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,
}

impl Document {
    /// Create an empty document with the given info block
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: title.into(),
                description: description.into(),
                version: version.into(),
            },
            servers: Vec::new(),
            paths: IndexMap::new(),
        }
    }

    /// Register a server URL; adding a URL already present is a no-op.
    pub fn add_server(&mut self, url: impl Into<String>, description: impl Into<String>) {
        let url = url.into();
        if self.servers.iter().any(|s| s.url == url) {
            return;
        }
        self.servers.push(Server {
            url,
            description: description.into(),
        });
    }
}

/// Supported render formats for the finished document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = Error;

    /// Accepts the usual file extensions: `json`, `yaml`, `yml`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(Error::invalid_export_format(other)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Yaml => write!(f, "yaml"),
        }
    }
}
