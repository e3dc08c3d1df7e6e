use super::{XmlElement, XmlError, XmlNode};
use crate::Value;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Render `value` as a document rooted at `root_name`.
///
/// The root carries `xmlns` (or `xmlns:{prefix}`) set to `namespace_uri`.
/// Strings become text, mappings become one child element per key, and list
/// items are written one after another into the current parent without a
/// `<member>` wrapper. No XML declaration is emitted.
pub fn to_xml_document(
    value: &Value,
    root_name: &str,
    namespace_uri: &str,
    namespace_prefix: Option<&str>,
) -> Result<String, XmlError> {
    let mut root = XmlElement::new(root_name);
    let xmlns = match namespace_prefix {
        Some(prefix) => format!("xmlns:{prefix}"),
        None => "xmlns".to_string(),
    };
    root.attributes.push((xmlns, namespace_uri.to_string()));
    append_value(&mut root, value);

    let mut writer = Writer::new(Vec::with_capacity(256));
    write_element(&mut writer, &root)?;

    let xml = String::from_utf8(writer.into_inner()).map_err(|err| err.utf8_error())?;
    Ok(xml)
}

fn append_value(parent: &mut XmlElement, value: &Value) {
    match value {
        Value::String(text) => parent.children.push(XmlNode::Text(text.clone())),
        Value::List(items) => {
            for item in items {
                append_value(parent, item);
            }
        }
        Value::Map(fields) => {
            for (name, field) in fields {
                let mut child = XmlElement::new(name.as_str());
                append_value(&mut child, field);
                parent.children.push(XmlNode::Element(child));
            }
        }
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &XmlElement) -> Result<(), XmlError> {
    let mut start = BytesStart::new(el.name.as_str());
    for (name, value) in &el.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &el.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
    Ok(())
}
