use laws_core::{Error, ErrorKind};

/// Errors raised while reading or writing XML documents.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The document has no root element.
    #[error("missing root element")]
    MissingRoot,

    /// A required element was not found below the root.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document has a node that cannot appear at its position.
    #[error("unexpected XML node: {0}")]
    UnexpectedNode(String),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    Parse(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Names or CDATA that are not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<XmlError> for Error {
    fn from(err: XmlError) -> Self {
        let kind = match err {
            XmlError::Io(_) => ErrorKind::Unexpected,
            _ => ErrorKind::ResponseInvalid,
        };

        Error::new(kind, err.to_string()).with_source(err)
    }
}
