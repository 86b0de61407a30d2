//! `enum` constraints as closed-set literal types.

use super::primitive::simple_type;
use argschema_core::TypeDescriptor;
use serde_json::{Map, Value};

/// Resolves a node carrying `enum`.
///
/// All-string values become a literal set (made nullable when the enum lists
/// `null`). Mixed or non-string values fall back to the node's declared
/// `type`, defaulting to `string`.
pub fn resolve_enum(schema: &Map<String, Value>) -> TypeDescriptor {
    let values = match schema.get("enum").and_then(Value::as_array) {
        Some(values) if !values.is_empty() => values,
        _ => return TypeDescriptor::string(),
    };

    let non_null: Vec<&Value> = values.iter().filter(|v| !v.is_null()).collect();
    if non_null.is_empty() {
        return TypeDescriptor::null();
    }

    let strings: Option<Vec<&str>> = non_null.iter().map(|v| v.as_str()).collect();
    match strings {
        Some(strings) => {
            let literal = TypeDescriptor::literal(strings);
            if non_null.len() < values.len() {
                literal.nullable()
            } else {
                literal
            }
        }
        None => {
            let fallback = Value::String("string".to_string());
            simple_type(Some(schema.get("type").unwrap_or(&fallback)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argschema_core::ScalarKind;
    use serde_json::json;

    fn resolve(schema: Value) -> TypeDescriptor {
        resolve_enum(schema.as_object().expect("schema object"))
    }

    #[test]
    fn string_values_become_literal() {
        assert_eq!(
            resolve(json!({ "enum": ["red", "green"] })),
            TypeDescriptor::literal(["red", "green"])
        );
    }

    #[test]
    fn null_member_makes_literal_optional() {
        assert_eq!(
            resolve(json!({ "enum": ["a", "b", null] })),
            TypeDescriptor::literal(["a", "b"]).nullable()
        );
    }

    #[test]
    fn repeated_values_appear_once() {
        let TypeDescriptor::Literal { values } = resolve(json!({ "enum": ["a", "a", "b"] })) else {
            panic!("expected literal");
        };
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn empty_enum_is_string() {
        assert_eq!(resolve(json!({ "enum": [] })), TypeDescriptor::string());
        assert_eq!(resolve(json!({ "enum": null })), TypeDescriptor::string());
    }

    #[test]
    fn null_only_enum_is_null() {
        assert_eq!(resolve(json!({ "enum": [null] })), TypeDescriptor::null());
    }

    #[test]
    fn mixed_values_fall_back_to_declared_type() {
        assert_eq!(
            resolve(json!({ "enum": [1, "a"], "type": "integer" })),
            TypeDescriptor::scalar(ScalarKind::Integer)
        );
        assert_eq!(resolve(json!({ "enum": [1, 2] })), TypeDescriptor::string());
        assert_eq!(
            resolve(json!({ "enum": [1, 2], "type": "object" })),
            TypeDescriptor::Unknown
        );
    }
}
