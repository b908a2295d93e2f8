//! Exchange classification
//!
//! Extracts the three independent facets of one captured exchange:
//!
//! - **Parameters**: query string, headers (minus a fixed denylist), cookies
//! - **Request Body**: JSON object schema, or a binary-file variant
//! - **Response**: per-status schema keyed by the observed status code
//!
//! Classification is pure; the [`document`](crate::document) merger folds
//! the result into cumulative state.

mod classifier;
mod types;

pub use classifier::classify;
pub use types::{
    ClassifiedExchange, ExampleObject, MediaTypeObject, Parameter, ParameterLocation, RequestBody,
    ResponseObject,
};
