//! Request and response plumbing shared by the protocols.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, Request, Response, Uri};
use laws_core::{Error, Result};
use log::debug;
use serde_json::Value as JsonValue;

pub(crate) const X_AMZ_TARGET: &str = "x-amz-target";

/// `https://{endpoint}{path}`
pub(crate) fn endpoint_uri(endpoint: &str, path: &str) -> Result<Uri> {
    if endpoint.is_empty() {
        return Err(Error::config_invalid("endpoint is required"));
    }

    Ok(format!("https://{endpoint}{path}").parse()?)
}

pub(crate) fn parse_method(method: &str) -> Result<Method> {
    if method.is_empty() {
        return Err(Error::config_invalid("http method is required"));
    }

    Method::from_bytes(method.as_bytes()).map_err(|err| {
        Error::config_invalid(format!("invalid http method: {method}")).with_source(err)
    })
}

/// Methods that never carry a payload.
pub(crate) fn is_bodiless(method: &Method) -> bool {
    method == Method::GET || method == Method::HEAD
}

pub(crate) fn build_request(
    method: Method,
    uri: Uri,
    content_type: &'static str,
    target: Option<&str>,
    body: Bytes,
) -> Result<Request<Bytes>> {
    debug!("built request: {method} {uri} ({} bytes)", body.len());

    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Some(target) = target {
        req = req.header(X_AMZ_TARGET, target);
    }

    Ok(req.body(body)?)
}

pub(crate) fn json_body(input: &JsonValue) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(input)?))
}

/// Decode a JSON body, an empty body decodes to `{}`.
pub(crate) fn decode_json(response: &Response<Bytes>) -> Result<JsonValue> {
    let body = response.body();
    debug!("decoding json response: {}", response.status());

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }

    serde_json::from_slice(body)
        .map_err(|err| Error::response_invalid("response is not valid json").with_source(err))
}

pub(crate) fn decode_text(response: &Response<Bytes>) -> Result<&str> {
    debug!("decoding xml response: {}", response.status());

    std::str::from_utf8(response.body())
        .map_err(|err| Error::response_invalid("response is not valid utf-8").with_source(err))
}
