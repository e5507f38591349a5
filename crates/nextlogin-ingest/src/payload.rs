//! Upstream payload shapes.
//!
//! Accepted: a bare array of user records, or an envelope
//! `{"data": {"rows": [...]}}`. Anything else is malformed.

use nextlogin_core::errors::IngestError;
use nextlogin_core::NextLoginResult;
use serde_json::Value;

/// Parse raw JSON text and return the user rows.
///
/// Text that is not JSON is a `Serialization` error; JSON of the wrong shape
/// is `IngestError::MalformedPayload`.
pub fn parse_payload(raw: &str) -> NextLoginResult<Vec<Value>> {
    let payload: Value = serde_json::from_str(raw)?;
    Ok(extract_rows(payload)?)
}

/// Unwrap the user rows from a decoded payload.
pub fn extract_rows(payload: Value) -> Result<Vec<Value>, IngestError> {
    match payload {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Object(mut data)) => match data.remove("rows") {
                Some(Value::Array(rows)) => Ok(rows),
                _ => Err(IngestError::MalformedPayload {
                    reason: "\"data.rows\" must be an array of users".to_string(),
                }),
            },
            _ => Err(IngestError::MalformedPayload {
                reason: "expected an array of users or an object with a \"data.rows\" array"
                    .to_string(),
            }),
        },
        other => Err(IngestError::MalformedPayload {
            reason: format!("expected an array of users, got {}", kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextlogin_core::NextLoginError;
    use serde_json::json;

    #[test]
    fn bare_array_is_accepted() {
        let rows = extract_rows(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn envelope_is_unwrapped() {
        let rows = extract_rows(json!({"data": {"rows": [{"id": "a"}]}, "meta": {}})).unwrap();
        assert_eq!(rows, vec![json!({"id": "a"})]);
    }

    #[test]
    fn envelope_without_rows_array_is_malformed() {
        let err = extract_rows(json!({"data": {"rows": "nope"}})).unwrap_err();
        assert!(err.to_string().contains("data.rows"));
        assert!(extract_rows(json!({"users": []})).is_err());
    }

    #[test]
    fn scalars_are_malformed() {
        let err = extract_rows(json!("users")).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        let err = parse_payload("{not json").unwrap_err();
        assert!(matches!(err, NextLoginError::Serialization(_)));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn wrong_shape_is_an_ingest_error() {
        let err = parse_payload(r#"{"users": []}"#).unwrap_err();
        assert!(matches!(
            err,
            NextLoginError::Ingest(IngestError::MalformedPayload { .. })
        ));
    }
}
