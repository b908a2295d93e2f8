//! The document generator and progressive merge
//!
//! Owns the cumulative [`Document`] and folds classified exchanges into it,
//! one self-contained state transition per observed exchange. The first
//! observation of a path+method forms the base; later observations only
//! augment it and adjust parameter required-ness.

use super::types::{Document, ExportFormat, Operation};
use crate::classify::{classify, ClassifiedExchange, Parameter};
use crate::diagnostics::Warning;
use crate::error::Result;
use crate::exchange::Exchange;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Builds an OpenAPI document from observed exchanges.
///
/// Synchronous by design: each [`add_response`](Self::add_response) call is
/// one state transition with no I/O. Hosts ingesting exchanges concurrently
/// must serialize their calls, because parameter reconciliation reads the
/// stored list it is about to rewrite.
#[derive(Debug, Clone)]
pub struct OpenapiGenerator {
    document: Document,
}

impl OpenapiGenerator {
    /// Create a generator with an empty document
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            document: Document::new(title, description, version),
        }
    }

    /// Add an initial server entry (the `server` / `server_description`
    /// construction options).
    #[must_use]
    pub fn with_server(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.document.add_server(url, description);
        self
    }

    /// Register a server URL; idempotent by URL.
    pub fn add_server(&mut self, url: impl Into<String>, description: impl Into<String>) {
        self.document.add_server(url, description);
    }

    /// Fold one observed exchange into the document.
    ///
    /// Classification runs to completion before any mutation, so a failed
    /// call (bad URL, unsupported value type) leaves the document
    /// untouched. Returns the non-fatal warnings raised while classifying.
    pub fn add_response(
        &mut self,
        exchange: &Exchange,
        description: Option<&str>,
    ) -> Result<Vec<Warning>> {
        let classified = classify(exchange)?;
        Ok(fold(&mut self.document, classified, description))
    }

    /// The document accumulated so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the generator, yielding the document
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render the document in the requested format.
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&self.document)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(&self.document)?),
        }
    }
}

/// Apply one classified exchange to the document.
fn fold(
    document: &mut Document,
    classified: ClassifiedExchange,
    description: Option<&str>,
) -> Vec<Warning> {
    let ClassifiedExchange {
        path,
        method,
        server,
        parameters,
        request_body,
        status,
        response,
        warnings,
    } = classified;

    let path_item = document.paths.entry(path.clone()).or_default();
    match path_item.entry(method.clone()) {
        Entry::Vacant(slot) => {
            tracing::debug!(%path, %method, %status, "documenting new operation");
            let mut responses = IndexMap::new();
            responses.insert(status, response);
            slot.insert(Operation {
                description: supplied(description),
                parameters,
                request_body,
                responses,
            });
        }
        Entry::Occupied(mut slot) => {
            let operation = slot.get_mut();

            // Every repeat observation adjusts required-ness, whatever the
            // status; the first-seen request body is kept as is.
            reconcile_parameters(&mut operation.parameters, parameters);

            // First write wins per status code
            if operation.responses.contains_key(&status) {
                tracing::debug!(%path, %method, %status, "status already documented");
            } else {
                tracing::debug!(%path, %method, %status, "adding response status");
                operation.responses.insert(status, response);
            }

            if operation.description.is_none() {
                operation.description = supplied(description);
            }
        }
    }

    document.add_server(server, "");
    warnings
}

/// Two-way parameter diff against the stored list.
///
/// Required-ness is an intersection across observations: a stored required
/// parameter the new observation does not name loses the flag, and never
/// gets it back. The parameter set itself is a union: names not stored yet
/// are appended, already optional, since at least one earlier observation
/// went without them.
fn reconcile_parameters(stored: &mut Vec<Parameter>, observed: Vec<Parameter>) {
    for parameter in stored.iter_mut() {
        if parameter.required && !observed.iter().any(|p| p.name == parameter.name) {
            parameter.required = false;
        }
    }

    for mut parameter in observed {
        if !stored.iter().any(|p| p.name == parameter.name) {
            parameter.required = false;
            stored.push(parameter);
        }
    }
}

fn supplied(description: Option<&str>) -> Option<String> {
    description
        .filter(|d| !d.is_empty())
        .map(ToString::to_string)
}
