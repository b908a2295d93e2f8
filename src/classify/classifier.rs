//! Exchange classification
//!
//! Pure transform of one captured exchange into its candidate operation
//! pieces. No document state is touched here; the merger decides how the
//! pieces reconcile with prior observations.

use super::types::{
    ClassifiedExchange, MediaTypeObject, Parameter, ParameterLocation, RequestBody, ResponseObject,
};
use crate::diagnostics::Warning;
use crate::error::{Error, Result};
use crate::exchange::Exchange;
use crate::schema::{infer, SchemaFragment, SchemaType};
use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

/// Request headers that document the client, not the API
const HEADER_DENYLIST: [&str; 5] = [
    "Accept",
    "Connection",
    "User-Agent",
    "Accept-Encoding",
    "Content-Length",
];

/// Top-level media families treated as binary payloads
const BINARY_MEDIA_FAMILIES: [&str; 1] = ["audio"];

/// Classify one exchange into its candidate operation pieces.
///
/// Fails only on a malformed URL or an [`Error::UnsupportedType`] during
/// inference; body-level problems degrade to warnings carried on the
/// result.
pub fn classify(exchange: &Exchange) -> Result<ClassifiedExchange> {
    let url = Url::parse(&exchange.url)?;
    let host = url
        .host_str()
        .ok_or_else(|| Error::missing_host(&exchange.url))?;
    let server = match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    };

    let mut warnings = Vec::new();
    let parameters = classify_parameters(exchange, &url)?;
    let request_body = classify_request_body(exchange, &mut warnings)?;
    let response = classify_response(exchange, &mut warnings)?;

    Ok(ClassifiedExchange {
        path: url.path().to_string(),
        method: exchange.method.to_lowercase(),
        server,
        parameters,
        request_body,
        status: exchange.status.to_string(),
        response,
        warnings,
    })
}

/// Collect query, header and cookie parameters, in that order.
///
/// Every parameter starts `required = true`; required-ness across
/// observations is the merger's call, not ours.
fn classify_parameters(exchange: &Exchange, url: &Url) -> Result<Vec<Parameter>> {
    let mut parameters = Vec::new();

    for (name, value) in url.query_pairs() {
        // First value wins when a query key repeats
        if parameters.iter().any(|p: &Parameter| p.name == name.as_ref()) {
            continue;
        }
        parameters.push(parameter(&name, ParameterLocation::Query, &value)?);
    }

    for (name, value) in &exchange.request_headers {
        if HEADER_DENYLIST.iter().any(|d| d.eq_ignore_ascii_case(name)) {
            continue;
        }
        parameters.push(parameter(name, ParameterLocation::Header, value)?);
    }

    for (name, value) in &exchange.cookies {
        parameters.push(parameter(name, ParameterLocation::Cookie, value)?);
    }

    Ok(parameters)
}

fn parameter(name: &str, location: ParameterLocation, raw: &str) -> Result<Parameter> {
    let value = Value::String(raw.to_string());
    Ok(Parameter {
        name: name.to_string(),
        location,
        schema: infer(&value, false)?,
        example: value,
        required: true,
    })
}

/// Build the request body contribution, if the exchange carried one.
fn classify_request_body(
    exchange: &Exchange,
    warnings: &mut Vec<Warning>,
) -> Result<Option<RequestBody>> {
    let Some(body) = exchange.request_body.as_deref().filter(|b| !b.is_empty()) else {
        return Ok(None);
    };

    if exchange.request_content_type() == Some("application/json") {
        let parsed: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(err) => {
                warnings.push(Warning::malformed_body(err.to_string()));
                return Ok(None);
            }
        };
        let Some(schema) = object_schema(&parsed, warnings)? else {
            return Ok(None);
        };
        return Ok(Some(RequestBody::json(schema)));
    }

    // Anything else with a body is treated as a raw file upload
    let media_type = exchange
        .request_content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    match std::str::from_utf8(body) {
        Ok(text) => Ok(Some(RequestBody::binary_file(media_type, text))),
        Err(err) => {
            warnings.push(Warning::malformed_body(format!(
                "request body is not valid UTF-8: {err}"
            )));
            Ok(None)
        }
    }
}

/// Build the response contribution for the exchange's status code.
fn classify_response(exchange: &Exchange, warnings: &mut Vec<Warning>) -> Result<ResponseObject> {
    let Some(content_type) = exchange.response_content_type() else {
        warnings.push(Warning::unsupported_media_type("unknown"));
        return Ok(ResponseObject::empty());
    };

    // Content map keys drop any trailing parameters after a comma
    let media_type = content_type
        .split(',')
        .next()
        .unwrap_or(content_type)
        .to_string();

    if content_type.contains("application/json") {
        let parsed: Value = match exchange.response_json() {
            Ok(value) => value,
            Err(err) => {
                warnings.push(Warning::malformed_body(err.to_string()));
                return Ok(ResponseObject::empty());
            }
        };
        let Some(schema) = object_schema(&parsed, warnings)? else {
            return Ok(ResponseObject::empty());
        };
        return Ok(ResponseObject::with_content(
            media_type,
            MediaTypeObject::new(schema),
        ));
    }

    if is_binary_media_type(&media_type) {
        return Ok(ResponseObject::with_content(
            media_type,
            MediaTypeObject::new(SchemaFragment::binary()),
        ));
    }

    warnings.push(Warning::unsupported_media_type(content_type));
    Ok(ResponseObject::empty())
}

/// Object schema over a parsed body's top-level fields, with examples.
///
/// A body that parses but is not a JSON object counts as malformed: its
/// contribution is dropped with a warning.
fn object_schema(parsed: &Value, warnings: &mut Vec<Warning>) -> Result<Option<SchemaFragment>> {
    let Value::Object(map) = parsed else {
        warnings.push(Warning::malformed_body("body is not a JSON object"));
        return Ok(None);
    };

    let mut properties = IndexMap::new();
    for (key, value) in map {
        properties.insert(key.clone(), infer(value, true)?);
    }
    Ok(Some(SchemaFragment {
        properties: Some(properties),
        ..SchemaFragment::new(SchemaType::Object)
    }))
}

fn is_binary_media_type(media_type: &str) -> bool {
    media_type
        .split('/')
        .next()
        .is_some_and(|family| BINARY_MEDIA_FAMILIES.contains(&family))
}
