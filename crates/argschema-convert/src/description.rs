//! Field descriptions synthesized from schema annotations and constraints.

use serde_json::Value;

const EXAMPLE_LIMIT: usize = 3;

/// Builds the human-readable description of a property.
///
/// Parts, in order and joined with `. `: the schema's own description, its
/// format, allowed values, pattern, numeric bounds, length bounds and up to
/// three examples. Absent parts are skipped.
pub fn build_field_description(schema: &Value) -> String {
    let Some(schema) = schema.as_object() else {
        return String::new();
    };
    let mut parts: Vec<String> = Vec::new();

    if let Some(description) = schema.get("description").and_then(Value::as_str) {
        if !description.is_empty() {
            parts.push(description.to_string());
        }
    }

    if let Some(format) = schema.get("format").filter(|v| is_truthy(v)) {
        parts.push(format!("Format: {}", plain(format)));
    }

    if let Some(values) = schema.get("enum").and_then(Value::as_array) {
        if !values.is_empty() {
            parts.push(format!("Allowed values: [{}]", render_list(values)));
        }
    }

    if let Some(pattern) = schema.get("pattern").filter(|v| is_truthy(v)) {
        parts.push(format!("Pattern: {}", plain(pattern)));
    }

    for (key, label) in [
        ("minimum", "Minimum"),
        ("maximum", "Maximum"),
        ("minLength", "Min length"),
        ("maxLength", "Max length"),
    ] {
        if let Some(bound) = schema.get(key).filter(|v| !v.is_null()) {
            parts.push(format!("{}: {}", label, plain(bound)));
        }
    }

    if let Some(examples) = schema.get("examples").and_then(Value::as_array) {
        if !examples.is_empty() {
            let shown = &examples[..examples.len().min(EXAMPLE_LIMIT)];
            parts.push(format!("Examples: {}", render_list(shown)));
        }
    }

    parts.join(". ")
}

fn render_list(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strings render raw, everything else as JSON text.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_schema_has_empty_description() {
        assert_eq!(build_field_description(&json!({})), "");
        assert_eq!(build_field_description(&json!({ "type": "string" })), "");
        assert_eq!(build_field_description(&json!(true)), "");
    }

    #[test]
    fn parts_follow_fixed_order() {
        let schema = json!({
            "examples": ["a@b.c", "x@y.z", "q@r.s", "extra@ex.am"],
            "maxLength": 64,
            "minLength": 3,
            "pattern": "^.+@.+$",
            "enum": ["a@b.c", null],
            "format": "email",
            "description": "Contact address",
            "minimum": 0,
            "maximum": 1.5
        });
        assert_eq!(
            build_field_description(&schema),
            "Contact address. Format: email. Allowed values: [\"a@b.c\", null]. \
             Pattern: ^.+@.+$. Minimum: 0. Maximum: 1.5. Min length: 3. Max length: 64. \
             Examples: \"a@b.c\", \"x@y.z\", \"q@r.s\""
        );
    }

    #[test]
    fn zero_bounds_are_kept_and_null_bounds_dropped() {
        let schema = json!({ "minimum": 0, "maximum": null, "minLength": 0 });
        assert_eq!(build_field_description(&schema), "Minimum: 0. Min length: 0");
    }

    #[test]
    fn empty_annotations_are_skipped() {
        let schema = json!({ "description": "", "format": "", "enum": [], "pattern": "", "examples": [] });
        assert_eq!(build_field_description(&schema), "");
    }

    #[test]
    fn non_string_examples_render_as_json() {
        let schema = json!({ "examples": [1, true, { "k": "v" }] });
        assert_eq!(build_field_description(&schema), "Examples: 1, true, {\"k\":\"v\"}");
    }
}
