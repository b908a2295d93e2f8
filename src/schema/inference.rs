//! Schema inference from observed JSON values

use super::types::{ArrayItems, SchemaFragment, SchemaType};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Map a value's runtime category to a schema type.
///
/// This is the fixed category table: the match is exhaustive over a closed
/// set, and any value outside it fails with [`Error::UnsupportedType`]
/// rather than falling back silently. Null maps to string on purpose: an
/// absent value carries no better type information, and OpenAPI 3.0 has no
/// standalone null type.
pub fn schema_type_of(value: &Value) -> Result<SchemaType> {
    match value {
        Value::Null => Ok(SchemaType::String),
        Value::Bool(_) => Ok(SchemaType::Boolean),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(SchemaType::Integer),
        Value::Number(n) if n.is_f64() => Ok(SchemaType::Number),
        // Arbitrary-precision literals land here: no table entry
        Value::Number(n) => Err(Error::unsupported_type(format!("number {n}"))),
        Value::String(_) => Ok(SchemaType::String),
        Value::Array(_) => Ok(SchemaType::Array),
        Value::Object(_) => Ok(SchemaType::Object),
    }
}

/// Infer a schema fragment describing `value`.
///
/// `include_example` embeds the value itself as the fragment's example.
/// It applies to this level only: nested object fields and array element
/// representatives never carry examples unless a caller infers them
/// directly with the flag set.
///
/// Deterministic and side-effect free.
pub fn infer(value: &Value, include_example: bool) -> Result<SchemaFragment> {
    let mut fragment = SchemaFragment::new(schema_type_of(value)?);

    if include_example {
        fragment.example = Some(value.clone());
    }

    match value {
        Value::Array(elements) => {
            // One representative fragment per distinct element type,
            // first-seen wins among same-typed elements.
            let mut one_of: Vec<SchemaFragment> = Vec::new();
            for element in elements {
                let element_type = schema_type_of(element)?;
                if one_of.iter().all(|f| f.schema_type != element_type) {
                    one_of.push(infer(element, false)?);
                }
            }
            fragment.items = Some(ArrayItems { one_of });
        }
        Value::Object(map) => {
            let mut properties = IndexMap::new();
            for (key, val) in map {
                properties.insert(key.clone(), infer(val, false)?);
            }
            fragment.properties = Some(properties);
        }
        _ => {}
    }

    Ok(fragment)
}
