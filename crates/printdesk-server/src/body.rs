// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request-body ("field bag") parsing.
//
// Bodies are read as raw bytes and parsed here rather than through axum's
// `Json` extractor, so that a missing `Content-Type`, an empty body, or
// broken JSON all produce the same `{"status":"error"}` envelope and a 400.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use printdesk_core::PrintdeskError;

/// Message for an absent, empty, or unparsable body.
pub const NO_DATA_MESSAGE: &str = "No data provided";

/// Message for a JSON object whose known fields have the wrong type.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Parse `body` as a non-empty JSON object.
///
/// # Errors
///
/// `MalformedRequest` if the body is empty, not JSON, not an object, or an
/// empty object.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, PrintdeskError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, bytes = body.len(), "request body is not JSON");
        PrintdeskError::MalformedRequest(NO_DATA_MESSAGE.into())
    })?;

    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        _ => {
            debug!("request body is not a non-empty JSON object");
            Err(PrintdeskError::MalformedRequest(NO_DATA_MESSAGE.into()))
        }
    }
}

/// Parse `body` as a non-empty JSON object and deserialise it into `T`.
///
/// Unknown keys are left to `T`'s `Deserialize` impl (the field bags ignore
/// them).
///
/// # Errors
///
/// `MalformedRequest` for anything [`parse_object`] rejects, or when a known
/// field has the wrong type.
pub fn parse_field_bag<T: DeserializeOwned>(body: &[u8]) -> Result<T, PrintdeskError> {
    let map = parse_object(body)?;
    serde_json::from_value(Value::Object(map)).map_err(|e| {
        debug!(error = %e, "request body has mistyped fields");
        PrintdeskError::MalformedRequest(INVALID_BODY_MESSAGE.into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use printdesk_core::ProfileFields;

    fn parse(body: &str) -> Result<ProfileFields, PrintdeskError> {
        parse_field_bag(body.as_bytes())
    }

    #[test]
    fn parses_object() {
        let fields = parse(r#"{"name":"Office","duplex":true}"#).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Office"));
        assert_eq!(fields.duplex, Some(true));
    }

    #[test]
    fn empty_body_is_malformed() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, PrintdeskError::MalformedRequest(_)));
        assert_eq!(err.to_string(), NO_DATA_MESSAGE);
    }

    #[test]
    fn broken_json_is_malformed() {
        assert!(matches!(parse("{name:"), Err(PrintdeskError::MalformedRequest(_))));
    }

    #[test]
    fn non_object_is_malformed() {
        assert!(matches!(parse("[1,2]"), Err(PrintdeskError::MalformedRequest(_))));
        assert!(matches!(parse("\"hi\""), Err(PrintdeskError::MalformedRequest(_))));
        assert!(matches!(parse("null"), Err(PrintdeskError::MalformedRequest(_))));
    }

    #[test]
    fn empty_object_is_malformed() {
        assert!(matches!(parse("{}"), Err(PrintdeskError::MalformedRequest(_))));
    }

    #[test]
    fn mistyped_field_is_malformed() {
        let err = parse(r#"{"name":"P","copies":"2"}"#).unwrap_err();
        assert!(matches!(err, PrintdeskError::MalformedRequest(_)));
        assert_eq!(err.to_string(), INVALID_BODY_MESSAGE);
    }

    #[test]
    fn parse_object_keeps_mistyped_values() {
        let map = parse_object(br#"{"username":123}"#).unwrap();
        assert_eq!(map["username"], 123);
        assert!(parse_object(b"{}").is_err());
    }

    #[test]
    fn unknown_keys_only_still_parse() {
        let fields = parse(r#"{"toner":"cyan"}"#).unwrap();
        assert_eq!(fields, ProfileFields::default());
    }
}
