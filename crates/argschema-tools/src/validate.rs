//! Argument validation against converted descriptors.

use argschema_core::{RecordDescriptor, ScalarKind, TypeDescriptor, ValidationIssue};
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde_json::Value;

/// Every mismatch between `value` and `descriptor`. Empty means accepted.
pub fn validate_value(descriptor: &TypeDescriptor, value: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check(descriptor, value, "", &mut issues);
    issues
}

/// Validates a tool call's arguments object against its record.
pub fn validate_arguments(record: &RecordDescriptor, args: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_record(record, args, "", &mut issues);
    issues
}

fn check(descriptor: &TypeDescriptor, value: &Value, path: &str, issues: &mut Vec<ValidationIssue>) {
    match descriptor {
        TypeDescriptor::Unknown => {}
        TypeDescriptor::Scalar { scalar } => {
            if let Some(message) = scalar_mismatch(*scalar, value) {
                issues.push(ValidationIssue::new(path, message));
            }
        }
        TypeDescriptor::Literal { values } => {
            let matched = value
                .as_str()
                .is_some_and(|candidate| values.iter().any(|allowed| allowed == candidate));
            if !matched {
                issues.push(ValidationIssue::new(
                    path,
                    format!("expected one of {}, found {}", descriptor, value),
                ));
            }
        }
        TypeDescriptor::Sequence { items } => match value.as_array() {
            Some(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    check(items, element, &format!("{}/{}", path, index), issues);
                }
            }
            None => issues.push(mismatch(path, "array", value)),
        },
        TypeDescriptor::Mapping => {
            if !value.is_object() {
                issues.push(mismatch(path, "object", value));
            }
        }
        TypeDescriptor::Record(record) => check_record(record, value, path, issues),
        TypeDescriptor::Union { members } => {
            let accepted = members.iter().any(|member| {
                let mut scratch = Vec::new();
                check(member, value, path, &mut scratch);
                scratch.is_empty()
            });
            if accepted {
                return;
            }
            let null = TypeDescriptor::null();
            let non_null = members.iter().filter(|member| **member != null).collect::<Vec<_>>();
            match non_null.as_slice() {
                [only] => check(only, value, path, issues),
                _ => issues.push(ValidationIssue::new(
                    path,
                    format!("expected {}, found {}", descriptor, kind_of(value)),
                )),
            }
        }
    }
}

fn check_record(
    record: &RecordDescriptor,
    value: &Value,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(object) = value.as_object() else {
        issues.push(mismatch(path, "object", value));
        return;
    };
    for field in &record.fields {
        let field_path = format!("{}/{}", path, field.name);
        match object.get(&field.name) {
            None if field.required => {
                issues.push(ValidationIssue::new(field_path, "missing required field"));
            }
            None => {}
            Some(Value::Null) if !field.required => {}
            Some(inner) => check(&field.ty, inner, &field_path, issues),
        }
    }
}

fn scalar_mismatch(scalar: ScalarKind, value: &Value) -> Option<String> {
    let accepted = match scalar {
        ScalarKind::String => value.is_string(),
        ScalarKind::Boolean => value.is_boolean(),
        ScalarKind::Null => value.is_null(),
        ScalarKind::Number => value.is_number(),
        ScalarKind::Integer => is_integral(value),
        ScalarKind::Date | ScalarKind::DateTime | ScalarKind::Time => {
            let Some(raw) = value.as_str() else {
                return Some(format!("expected {} string, found {}", scalar, kind_of(value)));
            };
            if parses_as(scalar, raw) {
                return None;
            }
            return Some(format!("'{}' is not a valid {}", raw, scalar));
        }
    };
    if accepted {
        None
    } else {
        Some(format!("expected {}, found {}", scalar, kind_of(value)))
    }
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64()
                || number.is_u64()
                || number.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

fn parses_as(scalar: ScalarKind, raw: &str) -> bool {
    match scalar {
        ScalarKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok(),
        ScalarKind::DateTime => DateTime::parse_from_rfc3339(raw).is_ok(),
        ScalarKind::Time => ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
            .iter()
            .any(|format| NaiveTime::parse_from_str(raw, format).is_ok()),
        _ => false,
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> ValidationIssue {
    ValidationIssue::new(path, format!("expected {}, found {}", expected, kind_of(value)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argschema_core::{ContextName, FieldDescriptor, RecordName};
    use argschema_core::ids::RecordSuffix;
    use serde_json::json;

    fn record(fields: Vec<FieldDescriptor>) -> RecordDescriptor {
        let suffix = RecordSuffix::from_counter(0);
        RecordDescriptor::new(RecordName::generated(&ContextName::new("Args"), &suffix), fields)
    }

    #[test]
    fn integers_accept_integral_floats() {
        let integer = TypeDescriptor::scalar(ScalarKind::Integer);
        assert!(validate_value(&integer, &json!(3)).is_empty());
        assert!(validate_value(&integer, &json!(3.0)).is_empty());
        assert_eq!(validate_value(&integer, &json!(3.5)).len(), 1);
        assert_eq!(validate_value(&integer, &json!("3")).len(), 1);
    }

    #[test]
    fn temporal_scalars_parse_strings() {
        let date = TypeDescriptor::scalar(ScalarKind::Date);
        let date_time = TypeDescriptor::scalar(ScalarKind::DateTime);
        let time = TypeDescriptor::scalar(ScalarKind::Time);

        assert!(validate_value(&date, &json!("2024-02-29")).is_empty());
        assert!(!validate_value(&date, &json!("2023-02-29")).is_empty());
        assert!(validate_value(&date_time, &json!("2024-05-01T12:30:00Z")).is_empty());
        assert!(validate_value(&date_time, &json!("2024-05-01T12:30:00+02:00")).is_empty());
        assert!(!validate_value(&date_time, &json!("2024-05-01")).is_empty());
        assert!(validate_value(&time, &json!("08:15:30.250")).is_empty());
        assert!(validate_value(&time, &json!("08:15")).is_empty());
        assert!(!validate_value(&time, &json!(815)).is_empty());
    }

    #[test]
    fn literals_and_unions() {
        let status = TypeDescriptor::literal(["open", "closed"]).nullable();
        assert!(validate_value(&status, &json!("open")).is_empty());
        assert!(validate_value(&status, &json!(null)).is_empty());
        let issues = validate_value(&status, &json!("pending"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "");

        let mixed = TypeDescriptor::union_of([
            TypeDescriptor::string(),
            TypeDescriptor::scalar(ScalarKind::Integer),
        ]);
        assert!(validate_value(&mixed, &json!(4)).is_empty());
        let issues = validate_value(&mixed, &json!(true));
        assert_eq!(issues[0].message, "expected string | integer, found boolean");
    }

    #[test]
    fn records_report_every_issue_with_paths() {
        let args = record(vec![
            FieldDescriptor::required("query", TypeDescriptor::string(), ""),
            FieldDescriptor::optional("limit", TypeDescriptor::scalar(ScalarKind::Integer), ""),
            FieldDescriptor::required(
                "tags",
                TypeDescriptor::sequence_of(TypeDescriptor::string()),
                "",
            ),
        ]);

        assert!(validate_arguments(&args, &json!({ "query": "rust", "tags": [] })).is_empty());
        assert!(
            validate_arguments(&args, &json!({ "query": "rust", "limit": null, "tags": [], "extra": 1 }))
                .is_empty()
        );

        let issues = validate_arguments(&args, &json!({ "limit": "ten", "tags": ["a", 2] }));
        let paths = issues.iter().map(|issue| issue.path.as_str()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["/query", "/limit", "/tags/1"]);
        assert_eq!(issues[0].message, "missing required field");

        let not_object = validate_arguments(&args, &json!([1, 2]));
        assert_eq!(not_object[0].to_string(), "/: expected object, found array");
    }

    #[test]
    fn unknown_accepts_anything_and_mapping_needs_object() {
        assert!(validate_value(&TypeDescriptor::Unknown, &json!([1, "x"])).is_empty());
        assert!(validate_value(&TypeDescriptor::Mapping, &json!({ "k": 1 })).is_empty());
        assert_eq!(validate_value(&TypeDescriptor::Mapping, &json!("k")).len(), 1);
    }
}
