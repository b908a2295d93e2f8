//! # openapi-observer
//!
//! Infer OpenAPI 3.0 documentation from observed HTTP exchanges instead of
//! hand-written schema annotations. Feed the generator captured
//! request/response pairs and it incrementally builds a path-by-path,
//! method-by-method specification, inferring JSON-Schema-like types from
//! the values it sees.
//!
//! ## Quick Start
//!
//! ```rust
//! use openapi_observer::{Exchange, ExportFormat, OpenapiGenerator};
//!
//! fn main() -> openapi_observer::Result<()> {
//!     let mut generator = OpenapiGenerator::new("Title", "Planet API", "0.0.1");
//!
//!     // Captured by whatever HTTP client the host uses
//!     let exchange = Exchange::new("GET", "https://swapi.co/api/planets/?page=2")
//!         .with_response_header("Content-Type", "application/json")
//!         .with_response_body(r#"{"count":0,"results":[]}"#);
//!
//!     let warnings = generator.add_response(&exchange, Some("List planets"))?;
//!     assert!(warnings.is_empty());
//!
//!     let yaml = generator.render(ExportFormat::Yaml)?;
//!     println!("{yaml}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Exchange ──> classify ──> ClassifiedExchange ──> OpenapiGenerator ──> Document
//!                 │                                      │
//!            schema::infer                        progressive merge
//!        (value -> SchemaFragment)         (union of parameters, required
//!                                           by intersection, first write
//!                                           wins per response status)
//! ```
//!
//! The core is synchronous and performs no I/O; capturing exchanges and
//! writing rendered output to disk are host concerns.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Non-fatal warnings surfaced during classification
pub mod diagnostics;

/// Captured request/response records
pub mod exchange;

/// Shape inference from observed values
pub mod schema;

/// Exchange classification into operation pieces
pub mod classify;

/// Document state, progressive merge and rendering
pub mod document;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{classify, ClassifiedExchange, Parameter, ParameterLocation};
pub use diagnostics::Warning;
pub use document::{Document, ExportFormat, OpenapiGenerator};
pub use error::{Error, Result};
pub use exchange::Exchange;
pub use schema::{infer, SchemaFragment, SchemaType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
