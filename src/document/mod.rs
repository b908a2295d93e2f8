//! Document state and progressive merge
//!
//! Owns the cumulative OpenAPI document (servers, path → method →
//! operation) and reconciles each newly classified exchange against prior
//! knowledge of the same path+method:
//!
//! - required-ness is an intersection across observations
//! - the parameter set is a union by name
//! - response codes accumulate, first write wins per status

mod generator;
mod types;

pub use generator::OpenapiGenerator;
pub use types::{Document, ExportFormat, Info, Operation, PathItem, Server, OPENAPI_VERSION};
