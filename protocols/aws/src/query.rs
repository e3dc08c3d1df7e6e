//! Form encoding shared by awsQuery and ec2Query.

use crate::Value;
use laws_core::{Error, Result};
use serde_json::Value as JsonValue;

/// How list items are numbered in a flattened key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListStyle {
    /// `Key.member.1`, used by awsQuery.
    Member,
    /// `Key.1`, used by ec2Query.
    Flat,
}

/// Encode `input` as a form body and set `Action` and `Version`.
///
/// Input fields keep their order. `Action` and `Version` take over an input
/// field of the same name, or are appended.
pub(crate) fn form_body(
    input: &JsonValue,
    action: &str,
    version: &str,
    style: ListStyle,
) -> Result<String> {
    let mut pairs = Vec::new();
    match Value::from_json(input) {
        None => {}
        Some(Value::Map(fields)) => {
            for (name, value) in &fields {
                flatten(name, value, style, &mut pairs);
            }
        }
        Some(_) => {
            return Err(Error::request_invalid(
                "query input must be an object of fields",
            ))
        }
    }

    set_pair(&mut pairs, "Action", action);
    set_pair(&mut pairs, "Version", version);

    Ok(form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish())
}

fn flatten(prefix: &str, value: &Value, style: ListStyle, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::String(text) => pairs.push((prefix.to_string(), text.clone())),
        Value::Map(fields) => {
            for (name, field) in fields {
                flatten(&format!("{prefix}.{name}"), field, style, pairs);
            }
        }
        Value::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                let key = match style {
                    ListStyle::Member => format!("{prefix}.member.{}", idx + 1),
                    ListStyle::Flat => format!("{prefix}.{}", idx + 1),
                };
                flatten(&key, item, style, pairs);
            }
        }
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
}
