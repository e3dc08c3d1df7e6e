use bytes::Bytes;
use laws_core::{Error, Result};
use serde_json::Value as JsonValue;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A wire protocol turns an operation input into a request, and a response
/// back into the operation output.
///
/// Implementations are stateless: everything they need comes from the
/// service and operation descriptors built by the caller.
pub trait Protocol {
    /// Per service settings, like the json target prefix or the API version.
    type ServiceConfig;
    /// Per operation settings, like the action name or the http route.
    type OperationConfig;

    /// Build the unsigned request for `input`.
    ///
    /// `endpoint` is a host with an optional port, the request targets
    /// `https://{endpoint}{path}`.
    fn input_request(
        service: &Self::ServiceConfig,
        endpoint: &str,
        operation: &Self::OperationConfig,
        input: &JsonValue,
    ) -> Result<http::Request<Bytes>>;

    /// Decode the operation output from `response`.
    fn output_result(
        service: &Self::ServiceConfig,
        operation: &Self::OperationConfig,
        response: &http::Response<Bytes>,
    ) -> Result<JsonValue>;
}

const SMITHY_NAMESPACE: &str = "aws.protocols#";

/// Names of the supported protocols, as found in smithy service traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolName {
    /// `aws.protocols#awsJson1_0`
    AwsJson1_0,
    /// `aws.protocols#awsJson1_1`
    AwsJson1_1,
    /// `aws.protocols#awsQuery`
    AwsQuery,
    /// `aws.protocols#ec2Query`
    Ec2Query,
    /// `aws.protocols#restJson1`
    RestJson1,
    /// `aws.protocols#restXml`
    RestXml,
}

impl ProtocolName {
    /// All supported protocols.
    pub const ALL: [ProtocolName; 6] = [
        ProtocolName::AwsJson1_0,
        ProtocolName::AwsJson1_1,
        ProtocolName::AwsQuery,
        ProtocolName::Ec2Query,
        ProtocolName::RestJson1,
        ProtocolName::RestXml,
    ];

    /// Short name without the smithy namespace, like `awsJson1_0`.
    pub fn name(self) -> &'static str {
        match self {
            ProtocolName::AwsJson1_0 => "awsJson1_0",
            ProtocolName::AwsJson1_1 => "awsJson1_1",
            ProtocolName::AwsQuery => "awsQuery",
            ProtocolName::Ec2Query => "ec2Query",
            ProtocolName::RestJson1 => "restJson1",
            ProtocolName::RestXml => "restXml",
        }
    }
}

impl Display for ProtocolName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{SMITHY_NAMESPACE}{}", self.name())
    }
}

impl FromStr for ProtocolName {
    type Err = Error;

    /// Accepts both `aws.protocols#restXml` and `restXml`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix(SMITHY_NAMESPACE).unwrap_or(s);

        ProtocolName::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::config_invalid(format!("unsupported protocol: {s}")))
    }
}
