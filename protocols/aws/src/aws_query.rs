use crate::query::{form_body, ListStyle};
use crate::wire::{build_request, decode_text, endpoint_uri};
use crate::xml::from_xml_document_with_metadata;
use crate::Protocol;
use bytes::Bytes;
use http::{Method, Request, Response};
use laws_core::Result;
use serde_json::Value as JsonValue;

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Service settings of `awsQuery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwsQueryService {
    /// API version sent as `Version`, like `2010-05-08`.
    pub version: &'static str,
    /// Namespace of the response documents.
    pub xml_namespace: &'static str,
    /// Namespace prefix, if the service declares one.
    pub xml_namespace_prefix: Option<&'static str>,
}

/// Operation settings of `awsQuery` and `ec2Query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOperation {
    /// Action name sent as `Action`.
    pub action: &'static str,
    /// Name of the result element, like `GetUserResult`.
    pub output: &'static str,
}

/// The `awsQuery` protocol, used by IAM, STS or SNS.
///
/// Input is form encoded into a `POST /`, the response is an XML document
/// with a `{Action}Result` and a `ResponseMetadata` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsQuery;

impl Protocol for AwsQuery {
    type ServiceConfig = AwsQueryService;
    type OperationConfig = QueryOperation;

    fn input_request(
        service: &AwsQueryService,
        endpoint: &str,
        operation: &QueryOperation,
        input: &JsonValue,
    ) -> Result<Request<Bytes>> {
        let body = form_body(input, operation.action, service.version, ListStyle::Member)?;

        build_request(
            Method::POST,
            endpoint_uri(endpoint, "/")?,
            FORM_CONTENT_TYPE,
            None,
            Bytes::from(body),
        )
    }

    fn output_result(
        _: &AwsQueryService,
        operation: &QueryOperation,
        response: &Response<Bytes>,
    ) -> Result<JsonValue> {
        let xml = decode_text(response)?;

        Ok(from_xml_document_with_metadata(xml, operation.output)?.to_json())
    }
}
