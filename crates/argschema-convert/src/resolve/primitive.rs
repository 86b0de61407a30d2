//! Scalar `type` keywords and string `format` values.

use argschema_core::{ScalarKind, TypeDescriptor};
use serde_json::Value;

/// Maps a simple `type` keyword; anything outside the table is `Unknown`.
pub fn simple_type(json_type: Option<&Value>) -> TypeDescriptor {
    match json_type.and_then(Value::as_str) {
        Some("string") => TypeDescriptor::scalar(ScalarKind::String),
        Some("number") => TypeDescriptor::scalar(ScalarKind::Number),
        Some("integer") => TypeDescriptor::scalar(ScalarKind::Integer),
        Some("boolean") => TypeDescriptor::scalar(ScalarKind::Boolean),
        Some("null") => TypeDescriptor::scalar(ScalarKind::Null),
        _ => TypeDescriptor::Unknown,
    }
}

/// Maps the `format` of a string node. Only date and time formats change the
/// representation; every other format stays a plain string.
pub fn formatted_string(format: Option<&Value>) -> TypeDescriptor {
    match format.and_then(Value::as_str) {
        Some("date") => TypeDescriptor::scalar(ScalarKind::Date),
        Some("date-time") => TypeDescriptor::scalar(ScalarKind::DateTime),
        Some("time") => TypeDescriptor::scalar(ScalarKind::Time),
        _ => TypeDescriptor::string(),
    }
}

/// One entry of a multi-valued `type` list.
pub fn type_list_entry(json_type: &Value) -> TypeDescriptor {
    match json_type.as_str() {
        Some("array") => TypeDescriptor::untyped_sequence(),
        Some("object") => TypeDescriptor::Mapping,
        _ => simple_type(Some(json_type)),
    }
}
