//! `awsJson1_0` and `awsJson1_1`: every call is a `POST /` selected by the
//! `x-amz-target` header.

use crate::wire::{build_request, decode_json, endpoint_uri, json_body};
use crate::Protocol;
use bytes::Bytes;
use http::{Method, Request, Response};
use laws_core::Result;
use serde_json::Value as JsonValue;

/// Service settings of the json protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwsJsonService {
    /// Prefix of `x-amz-target`, like `DynamoDB_20120810`.
    pub target_prefix: &'static str,
}

/// The `awsJson1_0` protocol, used by DynamoDB or SQS.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsJson1_0;

/// The `awsJson1_1` protocol, used by ECS or CloudWatch Logs.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsJson1_1;

impl Protocol for AwsJson1_0 {
    type ServiceConfig = AwsJsonService;
    /// The operation name.
    type OperationConfig = &'static str;

    fn input_request(
        service: &AwsJsonService,
        endpoint: &str,
        operation: &&'static str,
        input: &JsonValue,
    ) -> Result<Request<Bytes>> {
        json_request("application/x-amz-json-1.0", service, endpoint, operation, input)
    }

    fn output_result(
        _: &AwsJsonService,
        _: &&'static str,
        response: &Response<Bytes>,
    ) -> Result<JsonValue> {
        decode_json(response)
    }
}

impl Protocol for AwsJson1_1 {
    type ServiceConfig = AwsJsonService;
    /// The operation name.
    type OperationConfig = &'static str;

    fn input_request(
        service: &AwsJsonService,
        endpoint: &str,
        operation: &&'static str,
        input: &JsonValue,
    ) -> Result<Request<Bytes>> {
        json_request("application/x-amz-json-1.1", service, endpoint, operation, input)
    }

    fn output_result(
        _: &AwsJsonService,
        _: &&'static str,
        response: &Response<Bytes>,
    ) -> Result<JsonValue> {
        decode_json(response)
    }
}

fn json_request(
    content_type: &'static str,
    service: &AwsJsonService,
    endpoint: &str,
    operation: &str,
    input: &JsonValue,
) -> Result<Request<Bytes>> {
    let target = format!("{}.{operation}", service.target_prefix);

    build_request(
        Method::POST,
        endpoint_uri(endpoint, "/")?,
        content_type,
        Some(&target),
        json_body(input)?,
    )
}
