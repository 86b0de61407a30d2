//! Definition file to validated arguments, through the facade

use argschema::tools::{ToolDefinitionFile, ToolRegistry};
use argschema::{ArgSchemaError, SchemaConverter, TypeDescriptor};
use serde_json::json;
use test_support::support::tools::MCP_TOOL_LIST;
use test_support::{deep_schema, write_tool_file};
use tracing_test::traced_test;

#[test]
fn loads_converts_and_validates() {
    let (_dir, path) = write_tool_file(MCP_TOOL_LIST);
    let file = ToolDefinitionFile::load(&path).unwrap();

    let mut registry = ToolRegistry::new();
    registry.register_all(file.into_definitions()).unwrap();

    for record in registry.descriptors() {
        let (context, _) = argschema::RecordName::parse_generated(record.name.as_str()).unwrap();
        assert!(context.as_str().ends_with("Schema"));
    }

    registry
        .validate_arguments(
            "create event",
            &json!({
                "title": "Standup",
                "starts_at": "2024-06-03T09:00:00Z",
                "attendees": [{ "email": "a@example.com" }, { "email": "b@example.com", "optional": true }]
            }),
        )
        .unwrap();

    let error = registry
        .validate_arguments(
            "create event",
            &json!({ "title": "Standup", "starts_at": "tomorrow", "attendees": [{}] }),
        )
        .unwrap_err();
    let ArgSchemaError::ArgumentValidation { issues, .. } = error else {
        panic!("expected a validation error");
    };
    let paths = issues.iter().map(|issue| issue.path.as_str()).collect::<Vec<_>>();
    assert_eq!(paths, vec!["/starts_at", "/attendees/0/email"]);
}

#[test]
fn descriptors_serialize_with_kind_tags() {
    let record = argschema::convert(
        "lookup",
        &json!({
            "type": "object",
            "properties": {
                "ids": { "type": "array", "items": { "type": "integer" } },
                "mode": { "enum": ["fast", "full"] }
            },
            "required": ["ids"]
        }),
    );
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["fields"][0]["type"]["kind"], "sequence");
    assert_eq!(value["fields"][0]["type"]["items"]["scalar"], "integer");
    assert_eq!(value["fields"][1]["type"]["kind"], "union");
    assert_eq!(value["fields"][1]["type"]["members"][0]["values"], json!(["fast", "full"]));

    let back: argschema::RecordDescriptor = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.fields[1].default_value(), Some(serde_json::Value::Null));
}

#[traced_test]
#[test]
fn depth_guard_is_logged() {
    let converter = SchemaConverter::new().with_config(argschema::ConverterConfig { max_depth: 2 });
    let record = converter.convert("deep", &deep_schema(4));
    let child = record.field("child").unwrap().ty.without_null();
    let grandchild = child.as_record().unwrap().field("child").unwrap().ty.without_null();
    let innermost = grandchild.as_record().unwrap().field("child").unwrap().ty.without_null();
    assert_eq!(innermost, TypeDescriptor::Unknown);
    assert!(logs_contain("depth"));
}
