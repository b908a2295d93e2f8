//! Captured request/response exchanges
//!
//! An [`Exchange`] is the input record the generator consumes: one observed
//! HTTP request together with the response it produced. The HTTP client that
//! captured it is a host concern; this crate never performs network I/O.
//!
//! The `with_*` builder methods make it easy for hosts (and tests) to
//! assemble records from whatever client library they use.

use indexmap::IndexMap;
use serde_json::Value;

/// One captured HTTP request/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// HTTP method as sent (any casing; the generator lower-cases it)
    pub method: String,
    /// Full request URL, including the query string
    pub url: String,
    /// Request headers in original order
    pub request_headers: IndexMap<String, String>,
    /// Request cookies in original order
    pub cookies: IndexMap<String, String>,
    /// Raw request body, if any was sent
    pub request_body: Option<Vec<u8>>,
    /// Response status code
    pub status: u16,
    /// Response headers
    pub response_headers: IndexMap<String, String>,
    /// Raw response body
    pub response_body: Vec<u8>,
}

impl Exchange {
    /// Create an exchange for the given method and full URL.
    ///
    /// The status defaults to 200; fill in the rest with the `with_*`
    /// builder methods.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            request_headers: IndexMap::new(),
            cookies: IndexMap::new(),
            request_body: None,
            status: 200,
            response_headers: IndexMap::new(),
            response_body: Vec::new(),
        }
    }

    /// Add a request header
    #[must_use]
    pub fn with_request_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_headers.insert(name.into(), value.into());
        self
    }

    /// Add a request cookie
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Set the raw request body
    #[must_use]
    pub fn with_request_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.request_body = Some(body.into());
        self
    }

    /// Set the response status code
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a response header
    #[must_use]
    pub fn with_response_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.response_headers.insert(name.into(), value.into());
        self
    }

    /// Set the raw response body
    #[must_use]
    pub fn with_response_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.response_body = body.into();
        self
    }

    /// Declared request content type, from the request headers
    /// (name lookup is case-insensitive).
    pub fn request_content_type(&self) -> Option<&str> {
        lookup_header(&self.request_headers, "content-type")
    }

    /// Response content type, from the response headers.
    pub fn response_content_type(&self) -> Option<&str> {
        lookup_header(&self.response_headers, "content-type")
    }

    /// Parse the response body as JSON.
    pub fn response_json(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.response_body)
    }
}

/// Case-insensitive header lookup; header casing varies per client library.
fn lookup_header<'a>(headers: &'a IndexMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let exchange = Exchange::new("GET", "https://api.example.com/items?page=2")
            .with_request_header("Authorization", "Bearer token")
            .with_cookie("session", "abc")
            .with_status(404)
            .with_response_header("Content-Type", "application/json")
            .with_response_body(r#"{"detail":"not found"}"#);

        assert_eq!(exchange.method, "GET");
        assert_eq!(exchange.status, 404);
        assert_eq!(exchange.cookies.get("session").map(String::as_str), Some("abc"));
        assert_eq!(exchange.response_content_type(), Some("application/json"));
        assert_eq!(
            exchange.response_json().unwrap(),
            json!({"detail": "not found"})
        );
    }

    #[test]
    fn test_content_type_lookup_is_case_insensitive() {
        let exchange = Exchange::new("POST", "https://api.example.com/items")
            .with_request_header("content-type", "application/json")
            .with_response_header("CONTENT-TYPE", "text/html");

        assert_eq!(exchange.request_content_type(), Some("application/json"));
        assert_eq!(exchange.response_content_type(), Some("text/html"));
    }

    #[test]
    fn test_missing_content_type() {
        let exchange = Exchange::new("GET", "https://api.example.com/items");
        assert_eq!(exchange.request_content_type(), None);
        assert_eq!(exchange.response_content_type(), None);
    }
}
