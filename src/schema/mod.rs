//! Shape inference
//!
//! Maps observed JSON values to simplified JSON-Schema fragments for
//! OpenAPI documentation.
//!
//! # Features
//!
//! - **Type Inference**: closed category table from runtime values to schema types
//! - **Array Elements**: one `oneOf` representative per distinct element type
//! - **Nested Objects**: per-field recursion, insertion order preserved
//! - **Examples**: observed values embedded on request, one level at a time

mod inference;
mod types;

pub use inference::{infer, schema_type_of};
pub use types::{ArrayItems, SchemaFragment, SchemaType};

#[cfg(test)]
mod tests;
