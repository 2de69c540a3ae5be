//! Classification of response bodies that report errors in-band.
//!
//! Docker Hub answers some failures with a regular JSON body instead of a
//! transport error. Two shapes are known: `{"detail": ...}` for
//! validation-style failures and `{"error": ...}` for operational ones.
//! A payload that legitimately carries one of these fields as data cannot
//! be told apart from an error and is classified as a failure.

use serde_json::Value;

use crate::error::{HubError, Result};

/// Checks a decoded body for the known error shapes.
///
/// `detail` is checked before `error`. A field holding `null` is treated
/// as absent.
///
/// # Errors
///
/// Returns [`HubError::RemoteDetail`] or [`HubError::Remote`] carrying the
/// field's value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dockhub_client::classify;
///
/// assert!(classify(json!({"name": "nginx"})).is_ok());
/// let err = classify(json!({"detail": "Not found"})).unwrap_err();
/// assert_eq!(err.to_string(), "Not found");
/// ```
pub fn classify(body: Value) -> Result<Value> {
    if let Some(detail) = field(&body, "detail") {
        return Err(HubError::RemoteDetail {
            message: message_of(detail),
        });
    }

    if let Some(error) = field(&body, "error") {
        return Err(HubError::Remote {
            message: message_of(error),
        });
    }

    Ok(body)
}

/// Returns the `key` sub-field when present, otherwise the whole body.
#[must_use]
pub fn extract(mut body: Value, key: Option<&str>) -> Value {
    match key {
        Some(key) => match body.as_object_mut().and_then(|map| map.remove(key)) {
            Some(inner) => inner,
            None => body,
        },
        None => body,
    }
}

fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| !value.is_null())
}

fn message_of(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}
