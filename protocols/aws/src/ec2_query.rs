use crate::aws_query::{QueryOperation, FORM_CONTENT_TYPE};
use crate::query::{form_body, ListStyle};
use crate::wire::{build_request, decode_text, endpoint_uri};
use crate::xml::from_ec2_xml_document;
use crate::Protocol;
use bytes::Bytes;
use http::{Method, Request, Response};
use laws_core::Result;
use serde_json::Value as JsonValue;

/// Service settings of `ec2Query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ec2QueryService {
    /// API version sent as `Version`, like `2016-11-15`.
    pub version: &'static str,
}

/// The `ec2Query` protocol.
///
/// Framed like `awsQuery` with lists numbered as `Key.N`. Responses carry
/// the result fields right under the root together with `requestId`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ec2Query;

impl Protocol for Ec2Query {
    type ServiceConfig = Ec2QueryService;
    type OperationConfig = QueryOperation;

    fn input_request(
        service: &Ec2QueryService,
        endpoint: &str,
        operation: &QueryOperation,
        input: &JsonValue,
    ) -> Result<Request<Bytes>> {
        let body = form_body(input, operation.action, service.version, ListStyle::Flat)?;

        build_request(
            Method::POST,
            endpoint_uri(endpoint, "/")?,
            FORM_CONTENT_TYPE,
            None,
            Bytes::from(body),
        )
    }

    fn output_result(
        _: &Ec2QueryService,
        _: &QueryOperation,
        response: &Response<Bytes>,
    ) -> Result<JsonValue> {
        let xml = decode_text(response)?;

        Ok(from_ec2_xml_document(xml)?.to_json())
    }
}
