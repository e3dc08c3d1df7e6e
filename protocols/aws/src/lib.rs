//! AWS wire protocols for laws.
//!
//! Every protocol implements [`Protocol`]: it builds an unsigned
//! `http::Request<Bytes>` from a JSON input and decodes an
//! `http::Response<Bytes>` back into JSON. Requests are signed separately,
//! for example with `laws_aws_v4::authenticate`.
//!
//! | Protocol | Request | Response |
//! |---|---|---|
//! | [`AwsJson1_0`], [`AwsJson1_1`] | `POST /` with `x-amz-target` and a JSON body | JSON |
//! | [`AwsQuery`] | `POST /` with a form body | XML with `ResponseMetadata` |
//! | [`Ec2Query`] | `POST /` with a form body | XML with `requestId` |
//! | [`RestJson1`] | routed by method and path, JSON body | JSON |
//! | [`RestXml`] | routed by method and path, XML body | XML |
//!
//! ## Example
//!
//! ```
//! use laws_aws_protocol::{AwsJson1_0, AwsJsonService, Protocol};
//! use serde_json::json;
//!
//! const DYNAMODB: AwsJsonService = AwsJsonService {
//!     target_prefix: "DynamoDB_20120810",
//! };
//!
//! let req = AwsJson1_0::input_request(
//!     &DYNAMODB,
//!     "dynamodb.us-east-1.amazonaws.com",
//!     &"ListTables",
//!     &json!({"Limit": 10}),
//! )?;
//! assert_eq!(req.headers()["x-amz-target"], "DynamoDB_20120810.ListTables");
//! # Ok::<(), laws_core::Error>(())
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod value;
pub use value::Value;

pub mod xml;

mod protocol;
pub use protocol::{Protocol, ProtocolName};

mod path;
mod query;
mod wire;

mod aws_json;
pub use aws_json::{AwsJson1_0, AwsJson1_1, AwsJsonService};

mod aws_query;
pub use aws_query::{AwsQuery, AwsQueryService, QueryOperation};

mod ec2_query;
pub use ec2_query::{Ec2Query, Ec2QueryService};

mod rest_json;
pub use rest_json::{RestJson1, RestOperation};

mod rest_xml;
pub use rest_xml::{RestXml, RestXmlOperation, RestXmlService};
