use crate::path::expand_path;
use crate::wire::{build_request, decode_text, endpoint_uri, is_bodiless, parse_method};
use crate::xml::{from_xml_document, to_xml_document};
use crate::{Protocol, Value};
use bytes::Bytes;
use http::{Request, Response};
use indexmap::IndexMap;
use laws_core::Result;
use serde_json::Value as JsonValue;

/// Service settings of `restXml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestXmlService {
    /// Namespace of the request documents.
    pub xml_namespace: &'static str,
    /// Namespace prefix, if the service declares one.
    pub xml_namespace_prefix: Option<&'static str>,
}

/// Operation settings of `restXml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestXmlOperation {
    /// Root element of the request document.
    pub input: &'static str,
    /// Element holding the result in the response document.
    pub output: &'static str,
    /// Http method, like `PUT`.
    pub method: &'static str,
    /// Path template, like `/{Bucket}?tagging`.
    pub path: &'static str,
}

/// The `restXml` protocol, used by S3, CloudFront or Route 53.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestXml;

impl Protocol for RestXml {
    type ServiceConfig = RestXmlService;
    type OperationConfig = RestXmlOperation;

    fn input_request(
        service: &RestXmlService,
        endpoint: &str,
        operation: &RestXmlOperation,
        input: &JsonValue,
    ) -> Result<Request<Bytes>> {
        let method = parse_method(operation.method)?;
        let input = Value::from_json(input).unwrap_or_else(|| Value::Map(IndexMap::new()));
        let path = expand_path(operation.path, Some(&input))?;

        let body = if is_bodiless(&method) {
            Bytes::new()
        } else {
            let xml = to_xml_document(
                &input,
                operation.input,
                service.xml_namespace,
                service.xml_namespace_prefix,
            )?;
            Bytes::from(xml)
        };

        build_request(
            method,
            endpoint_uri(endpoint, &path)?,
            "application/xml",
            None,
            body,
        )
    }

    fn output_result(
        _: &RestXmlService,
        operation: &RestXmlOperation,
        response: &Response<Bytes>,
    ) -> Result<JsonValue> {
        let xml = decode_text(response)?;

        Ok(from_xml_document(xml, operation.output)?.to_json())
    }
}
