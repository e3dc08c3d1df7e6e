use crate::path::expand_path;
use crate::wire::{build_request, decode_json, endpoint_uri, is_bodiless, json_body, parse_method};
use crate::{Protocol, Value};
use bytes::Bytes;
use http::{Request, Response};
use laws_core::Result;
use serde_json::Value as JsonValue;

/// Operation settings of the REST protocols: the http route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestOperation {
    /// Http method, like `GET`.
    pub method: &'static str,
    /// Path template, like `/2015-03-31/functions/{FunctionName}`.
    pub path: &'static str,
}

/// The `restJson1` protocol, used by Lambda or API Gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestJson1;

impl Protocol for RestJson1 {
    type ServiceConfig = ();
    type OperationConfig = RestOperation;

    fn input_request(
        _: &(),
        endpoint: &str,
        operation: &RestOperation,
        input: &JsonValue,
    ) -> Result<Request<Bytes>> {
        let method = parse_method(operation.method)?;
        let path = expand_path(operation.path, Value::from_json(input).as_ref())?;
        let body = if is_bodiless(&method) {
            Bytes::new()
        } else {
            json_body(input)?
        };

        build_request(
            method,
            endpoint_uri(endpoint, &path)?,
            "application/json",
            None,
            body,
        )
    }

    fn output_result(
        _: &(),
        _: &RestOperation,
        response: &Response<Bytes>,
    ) -> Result<JsonValue> {
        decode_json(response)
    }
}
