use super::{parse_document, XmlElement, XmlError, XmlNode};
use crate::Value;
use indexmap::map::Entry;
use indexmap::IndexMap;

const RESPONSE_METADATA: &str = "ResponseMetadata";
const REQUEST_ID: &str = "requestId";
const METADATA: &str = "$metadata";

/// Decode the element called `result_name`.
///
/// The root itself is used when its name equals `result_name`, otherwise
/// its direct child of that name.
pub fn from_xml_document(xml: &str, result_name: &str) -> Result<Value, XmlError> {
    let root = parse_document(xml)?.ok_or(XmlError::MissingRoot)?;
    if root.name == result_name {
        return Ok(element_to_value(&root));
    }

    root.child(result_name)
        .map(element_to_value)
        .ok_or_else(|| XmlError::MissingElement(result_name.to_string()))
}

/// Decode an awsQuery style response.
///
/// ```xml
/// <FooResponse>
///   <FooResult>...</FooResult>
///   <ResponseMetadata>...</ResponseMetadata>
/// </FooResponse>
/// ```
///
/// Returns the fields of `FooResult` followed by `$metadata`. A missing
/// result element decodes as an empty mapping.
pub fn from_xml_document_with_metadata(xml: &str, result_name: &str) -> Result<Value, XmlError> {
    let root = parse_document(xml)?.ok_or(XmlError::MissingRoot)?;

    let mut fields = match root.child(result_name) {
        Some(result) => into_fields(element_to_value(result), result_name)?,
        None => IndexMap::new(),
    };
    let metadata = root
        .child(RESPONSE_METADATA)
        .ok_or_else(|| XmlError::MissingElement(RESPONSE_METADATA.to_string()))?;

    fields.insert(METADATA.to_string(), element_to_value(metadata));
    Ok(Value::Map(fields))
}

/// Decode an ec2Query style response.
///
/// EC2 puts the result fields straight into `{Action}Response` next to a
/// `requestId`, which is moved into `$metadata`.
pub fn from_ec2_xml_document(xml: &str) -> Result<Value, XmlError> {
    let root = parse_document(xml)?.ok_or(XmlError::MissingRoot)?;

    let mut fields = into_fields(element_to_value(&root), &root.name)?;
    let mut metadata = IndexMap::new();
    if let Some(request_id) = fields.shift_remove(REQUEST_ID) {
        metadata.insert(REQUEST_ID.to_string(), request_id);
    }

    fields.insert(METADATA.to_string(), Value::Map(metadata));
    Ok(Value::Map(fields))
}

/// Convert an element into a value.
///
/// An element holding a single text node becomes a string. Anything else
/// becomes a mapping of its child elements, and repeated names collect into
/// a list in document order.
pub fn element_to_value(el: &XmlElement) -> Value {
    if let [XmlNode::Text(text)] = el.children.as_slice() {
        return Value::String(text.clone());
    }

    let mut fields: IndexMap<String, Value> = IndexMap::new();
    for child in el.elements() {
        let value = element_to_value(child);
        match fields.entry(child.name.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(mut entry) => match entry.get_mut() {
                Value::List(items) => items.push(value),
                existing => {
                    let first = std::mem::replace(existing, Value::List(Vec::new()));
                    *existing = Value::List(vec![first, value]);
                }
            },
        }
    }
    Value::Map(fields)
}

fn into_fields(value: Value, name: &str) -> Result<IndexMap<String, Value>, XmlError> {
    match value {
        Value::Map(fields) => Ok(fields),
        // Whitespace between the tags of an element without fields.
        Value::String(text) if text.trim().is_empty() => Ok(IndexMap::new()),
        _ => Err(XmlError::UnexpectedNode(format!(
            "{name} must hold elements"
        ))),
    }
}
