use super::XmlError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A node of a parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(XmlElement),
    /// Character data, already unescaped.
    Text(String),
}

/// An XML element with its attributes and children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified name, prefix included.
    pub name: String,
    /// Attributes as `(name, unescaped value)`.
    pub attributes: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Child elements, text nodes skipped.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// The first direct child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|el| el.name == name)
    }

    fn push_text(&mut self, text: &str) {
        match self.children.last_mut() {
            Some(XmlNode::Text(last)) => last.push_str(text),
            _ => self.children.push(XmlNode::Text(text.to_string())),
        }
    }
}

/// Parse a document and return its root element.
///
/// Declarations, comments, processing instructions and doctype are skipped.
/// Adjacent text, CDATA and entity runs collapse into one text node, and
/// whitespace is kept as is.
pub fn parse_document(xml: &str) -> Result<Option<XmlElement>, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(start_element(&e)?),
            Event::Empty(e) => {
                let el = start_element(&e)?;
                close_element(&mut stack, &mut root, el)?;
            }
            Event::End(e) => {
                let el = stack.pop().ok_or_else(|| {
                    XmlError::UnexpectedNode("closing tag without opening tag".to_string())
                })?;
                if el.name.as_bytes() != e.name().as_ref() {
                    return Err(XmlError::UnexpectedNode(format!(
                        "mismatched closing tag for {}",
                        el.name
                    )));
                }
                close_element(&mut stack, &mut root, el)?;
            }
            Event::Text(e) => push_text(&mut stack, &e.unescape()?)?,
            Event::CData(e) => push_text(&mut stack, std::str::from_utf8(&e)?)?,
            Event::Eof => break,
            // Declaration, comments, processing instructions and doctype.
            _ => {}
        }
    }

    if let Some(el) = stack.last() {
        return Err(XmlError::UnexpectedNode(format!(
            "element {} is not closed",
            el.name
        )));
    }

    Ok(root)
}

fn start_element(e: &BytesStart) -> Result<XmlElement, XmlError> {
    let mut el = XmlElement::new(std::str::from_utf8(e.name().as_ref())?);
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        el.attributes.push((key, value));
    }
    Ok(el)
}

fn close_element(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    el: XmlElement,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(el));
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::UnexpectedNode(format!(
            "second root element {}",
            el.name
        )));
    }
    *root = Some(el);
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.push_text(text),
        None if text.trim().is_empty() => {}
        None => {
            return Err(XmlError::UnexpectedNode(
                "text outside the root element".to_string(),
            ))
        }
    }
    Ok(())
}
