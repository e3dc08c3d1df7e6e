//! Expansion of `{Label}` and `{Label+}` placeholders in REST routes.

use crate::Value;
use laws_core::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters stay as is.
const LABEL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Greedy labels may span several segments.
const GREEDY_LABEL: &AsciiSet = &LABEL.remove(b'/');

/// Replace every label in `template` with the matching input field.
pub(crate) fn expand_path(template: &str, input: Option<&Value>) -> Result<String> {
    if template.is_empty() {
        return Err(Error::config_invalid("http path is required"));
    }

    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);

        let end = rest[start..].find('}').ok_or_else(|| {
            Error::config_invalid(format!("unclosed label in http path: {template}"))
        })? + start;
        let label = &rest[start + 1..end];
        let (name, greedy) = match label.strip_suffix('+') {
            Some(name) => (name, true),
            None => (label, false),
        };

        let value = input
            .and_then(|v| v.get(name))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::request_invalid(format!("missing value for path label {name}"))
            })?;
        let set = if greedy { GREEDY_LABEL } else { LABEL };
        path.extend(utf8_percent_encode(value, set));

        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laws_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn input() -> Value {
        Value::from_json(&json!({
            "Bucket": "my-bucket",
            "Key": "photos/2024/a b+c.jpg",
            "FunctionName": "arn:aws:lambda:us-east-1:1:function:f",
            "Count": 3
        }))
        .expect("object must convert")
    }

    #[test_case("/{Bucket}", "/my-bucket"; "plain")]
    #[test_case("/{Bucket}/{Key+}", "/my-bucket/photos/2024/a%20b%2Bc.jpg"; "greedy")]
    #[test_case("/{Bucket}/{Key}", "/my-bucket/photos%2F2024%2Fa%20b%2Bc.jpg"; "not greedy")]
    #[test_case("/2015-03-31/functions/{FunctionName}/invocations", "/2015-03-31/functions/arn%3Aaws%3Alambda%3Aus-east-1%3A1%3Afunction%3Af/invocations"; "middle")]
    #[test_case("/{Bucket}?tagging", "/my-bucket?tagging"; "static query")]
    #[test_case("/items/{Count}", "/items/3"; "number")]
    #[test_case("/", "/"; "no label")]
    fn test_expand_path(template: &str, expected: &str) -> Result<()> {
        assert_eq!(expand_path(template, Some(&input()))?, expected);
        Ok(())
    }

    #[test]
    fn test_missing_label() {
        let err = expand_path("/{Bucket}/{VersionId}", Some(&input())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        let err = expand_path("/{Bucket}", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_invalid_template() {
        let err = expand_path("/{Bucket", Some(&input())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = expand_path("", Some(&input())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
