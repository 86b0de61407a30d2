//! Tests for tool registration, validation and summaries

use argschema_core::{ArgSchemaError, ScalarKind, TypeDescriptor};
use argschema_tools::{ToolDefinition, ToolDefinitionFile, summary};
use serde_json::json;
use test_support::support::tools::{CalculatorInput, MCP_TOOL_LIST, WeatherInput};
use test_support::{deterministic_registry, search_schema, write_tool_file};
use tracing_test::traced_test;

#[test]
fn registers_tools_in_file_order() {
    let file = ToolDefinitionFile::parse(MCP_TOOL_LIST).unwrap();
    let mut registry = deterministic_registry();
    registry.register_all(file.into_definitions()).unwrap();

    assert_eq!(registry.list_tools(), vec!["get-weather", "create event", "ping"]);
    let names = registry
        .descriptors()
        .iter()
        .map(|record| record.name.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "Generated_get_weatherSchema_00000000",
            "Generated_create_eventSchema_00000002",
            "Generated_pingSchema_00000003",
        ]
    );

    let event = registry.get("create event").unwrap();
    let attendees = event.arguments.field("attendees").unwrap();
    assert!(!attendees.required);
    let TypeDescriptor::Sequence { items } = attendees.ty.without_null() else {
        panic!("expected a sequence, got {}", attendees.ty);
    };
    let item = items.as_record().unwrap();
    assert_eq!(item.name.as_str(), "Generated_AttendeesItem_00000001");
    assert_eq!(item.field_names(), vec!["email", "optional"]);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = deterministic_registry();
    let definition = ToolDefinition::new("search", "Search things", search_schema()).unwrap();
    registry.register(definition.clone()).unwrap();

    let error = registry.register(definition).unwrap_err();
    assert!(matches!(error, ArgSchemaError::ToolRegistration(_)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn validates_arguments_through_the_registry() {
    let mut registry = deterministic_registry();
    registry
        .register(ToolDefinition::new("search", "", search_schema()).unwrap())
        .unwrap();

    registry
        .validate_arguments("search", &json!({ "query": "rust", "sort": "date", "since": "2024-01-31" }))
        .unwrap();
    registry
        .validate_arguments("search", &json!({ "query": "rust", "sort": null, "limit": 5.0 }))
        .unwrap();

    let error = registry
        .validate_arguments("search", &json!({ "limit": "ten", "since": "yesterday" }))
        .unwrap_err();
    let ArgSchemaError::ArgumentValidation { tool, issues } = error else {
        panic!("expected a validation error");
    };
    assert_eq!(tool, "search");
    let paths = issues.iter().map(|issue| issue.path.as_str()).collect::<Vec<_>>();
    assert_eq!(paths, vec!["/query", "/limit", "/since"]);

    assert!(matches!(
        registry.validate_arguments("missing", &json!({})),
        Err(ArgSchemaError::ToolNotFound(_))
    ));
}

#[test]
fn typed_tools_flow_through_conversion() {
    let mut registry = deterministic_registry();
    let calculator = registry
        .register_typed::<CalculatorInput>("calculate", "Performs arithmetic")
        .unwrap();

    let args = &calculator.arguments;
    assert_eq!(args.field_names(), vec!["left", "right", "operation", "precision"]);
    assert!(args.field("left").unwrap().required);
    assert_eq!(args.field("left").unwrap().ty, TypeDescriptor::scalar(ScalarKind::Integer));
    assert_eq!(args.field("left").unwrap().description, "Left operand. Format: int64");
    assert_eq!(
        args.field("operation").unwrap().ty,
        TypeDescriptor::literal(["add", "subtract", "multiply", "divide"])
    );
    assert!(!args.field("precision").unwrap().required);

    registry
        .validate_arguments("calculate", &json!({ "left": 1, "right": 2, "operation": "add" }))
        .unwrap();
    assert!(
        registry
            .validate_arguments("calculate", &json!({ "left": 1, "right": 2, "operation": "modulo" }))
            .is_err()
    );

    let weather = registry
        .register_typed::<WeatherInput>("weather", "Forecast lookup")
        .unwrap();
    let location = weather.arguments.field("location").unwrap();
    let record = location.ty.as_record().unwrap();
    assert_eq!(record.name.context().unwrap().as_str(), "Location");
    assert_eq!(record.field_names(), vec!["city", "country"]);
}

#[test]
fn loads_definition_files_from_disk() {
    let (_dir, path) = write_tool_file(MCP_TOOL_LIST);
    let file = ToolDefinitionFile::load(&path).unwrap();
    assert_eq!(file.len(), 3);

    let (_dir, path) = write_tool_file("{\"tools\": 3}");
    assert!(matches!(
        ToolDefinitionFile::load(&path),
        Err(ArgSchemaError::Json(_))
    ));
    assert!(matches!(
        ToolDefinitionFile::load(&path.with_file_name("absent.json")),
        Err(ArgSchemaError::Io(_))
    ));
}

#[traced_test]
#[test]
fn registration_is_logged() {
    let mut registry = deterministic_registry();
    registry
        .register(ToolDefinition::new("search", "", search_schema()).unwrap())
        .unwrap();
    assert!(logs_contain("Registered tool"));
    assert!(logs_contain("Generated_searchSchema_00000000"));
}

#[test]
fn summary_lists_every_field() {
    let file = ToolDefinitionFile::parse(MCP_TOOL_LIST).unwrap();
    let mut registry = deterministic_registry();
    registry.register_all(file.into_definitions()).unwrap();

    insta::assert_snapshot!(summary::render_tool(registry.get("get-weather").unwrap()), @r#"
    get-weather -> Generated_get_weatherSchema_00000000
      location: string (required) - City name
      units: literal["metric", "imperial"] | null (optional) - Unit system. Allowed values: ["metric", "imperial"]
    "#);
    insta::assert_snapshot!(summary::render_tool(registry.get("create event").unwrap()), @r#"
    create event -> Generated_create_eventSchema_00000002
      title: string (required)
      starts_at: date-time (required) - Format: date-time
      attendees: array<Generated_AttendeesItem_00000001> | null (optional)
    "#);
    insta::assert_snapshot!(summary::render_tool(registry.get("ping").unwrap()), @r#"
    ping -> Generated_pingSchema_00000003
      (no arguments)
    "#);
}
