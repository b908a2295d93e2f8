//! Schema types
//!
//! A deliberately small slice of JSON Schema: enough for OpenAPI 3.0
//! documentation inferred from observed values. No `$ref`, no `allOf`;
//! heterogeneous arrays get a flat `oneOf` over their element types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema type for an observed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Integer,
    Number,
    Boolean,
    String,
    Array,
    Object,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::Object => write!(f, "object"),
        }
    }
}

/// Schema describing one observed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFragment {
    /// Schema type
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Format hint (only "binary" is produced, for raw file bodies)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Observed value embedded as an example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Array element schemas; an empty array yields `items: {}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ArrayItems>,

    /// Object field schemas, in observed field order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaFragment>>,
}

/// Element schemas for an array, one representative per distinct element type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayItems {
    #[serde(rename = "oneOf", default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<SchemaFragment>,
}

impl SchemaFragment {
    /// Create a fragment with the given type and nothing else
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            format: None,
            example: None,
            items: None,
            properties: None,
        }
    }

    /// The `{type: string, format: binary}` fragment used for raw file bodies
    pub fn binary() -> Self {
        Self {
            format: Some("binary".to_string()),
            ..Self::new(SchemaType::String)
        }
    }

    /// Set the example value
    #[must_use]
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}
