//! A small tree codec between [`Value`](crate::Value) and XML documents.

mod decode;
pub use decode::{
    element_to_value, from_ec2_xml_document, from_xml_document, from_xml_document_with_metadata,
};

mod encode;
pub use encode::to_xml_document;

mod error;
pub use error::XmlError;

mod node;
pub use node::{parse_document, XmlElement, XmlNode};
