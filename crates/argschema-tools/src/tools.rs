//! Tool definition registration
//!
//! Tools arrive as schema data (an MCP server listing, a plugin manifest, a
//! remote API). Registering a tool converts its input schema once into a
//! [`RecordDescriptor`]; argument validation and TypeScript rendering work
//! from that descriptor afterwards.

use crate::tool_schema::json_schema_value;
use crate::ts_gen::render_typescript;
use crate::validate::validate_value;
use argschema_convert::SchemaConverter;
use argschema_core::{ArgSchemaError, RecordDescriptor, Result, TypeDescriptor};
use argschema_observability::spans;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolName(String);

impl ToolName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArgSchemaError::InvalidArgument(
                "Tool name must be non-empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PascalCase identifier used for generated TypeScript declarations
    /// (`get-weather` becomes `GetWeather`).
    pub fn class_name(&self) -> String {
        let class = self
            .0
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<String>();
        match class.chars().next() {
            None => "Tool".to_string(),
            Some(first) if first.is_ascii_digit() => format!("Tool{}", class),
            Some(_) => class,
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::borrow::Borrow<str> for ToolName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for ToolName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ToolName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        ToolName::new(name).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for ToolName {
    type Error = ArgSchemaError;

    fn try_from(value: String) -> Result<Self> {
        ToolName::new(value)
    }
}

impl TryFrom<&str> for ToolName {
    type Error = ArgSchemaError;

    fn try_from(value: &str) -> Result<Self> {
        ToolName::new(value)
    }
}

impl From<ToolName> for String {
    fn from(value: ToolName) -> Self {
        value.0
    }
}

fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

/// A tool as it is described on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: ToolName,
    #[serde(default)]
    pub description: String,
    /// JSON Schema for the tool's arguments.
    #[serde(alias = "inputSchema", alias = "parameters", default = "empty_object_schema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: &str, description: impl Into<String>, input_schema: Value) -> Result<Self> {
        Ok(Self {
            name: ToolName::new(name)?,
            description: description.into(),
            input_schema,
        })
    }

    /// Definition whose input schema is derived from a Rust type.
    pub fn typed<T: JsonSchema>(name: &str, description: impl Into<String>) -> Result<Self> {
        Self::new(name, description, json_schema_value::<T>())
    }
}

/// A definition together with its converted argument record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedTool {
    pub definition: ToolDefinition,
    pub arguments: RecordDescriptor,
}

impl ConvertedTool {
    pub fn convert(converter: &SchemaConverter, definition: ToolDefinition) -> Self {
        let span = spans::convert_tool(definition.name.as_str());
        let _guard = span.enter();
        let arguments = converter.convert(definition.name.as_str(), &definition.input_schema);
        Self {
            definition,
            arguments,
        }
    }

    pub fn name(&self) -> &ToolName {
        &self.definition.name
    }

    /// Checks `args` against the argument record, reporting every mismatch.
    pub fn validate(&self, args: &Value) -> Result<()> {
        let span = spans::validate_arguments(self.name().as_str());
        let _guard = span.enter();
        let descriptor = TypeDescriptor::Record(self.arguments.clone());
        let issues = validate_value(&descriptor, args);
        if issues.is_empty() {
            tracing::debug!(tool = %self.name(), "Arguments accepted");
            Ok(())
        } else {
            tracing::debug!(tool = %self.name(), issues = issues.len(), "Arguments rejected");
            Err(ArgSchemaError::ArgumentValidation {
                tool: self.name().to_string(),
                issues,
            })
        }
    }
}

/// Registry of converted tool definitions, in registration order.
pub struct ToolRegistry {
    converter: SchemaConverter,
    tools: HashMap<ToolName, ConvertedTool>,
    order: Vec<ToolName>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self::with_converter(SchemaConverter::new())
    }

    pub fn with_converter(converter: SchemaConverter) -> Self {
        Self {
            converter,
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn converter(&self) -> &SchemaConverter {
        &self.converter
    }

    /// Convert and register a tool definition.
    ///
    /// # Errors
    /// `ToolRegistration` when a tool of the same name is already registered.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<&ConvertedTool> {
        if self.tools.contains_key(&definition.name) {
            return Err(ArgSchemaError::ToolRegistration(format!(
                "Tool '{}' is already registered",
                definition.name
            )));
        }
        let converted = ConvertedTool::convert(&self.converter, definition);
        self.insert(converted)
    }

    /// Register an already converted tool without converting it again.
    pub fn register_converted(&mut self, converted: ConvertedTool) -> Result<&ConvertedTool> {
        if self.tools.contains_key(converted.name()) {
            return Err(ArgSchemaError::ToolRegistration(format!(
                "Tool '{}' is already registered",
                converted.name()
            )));
        }
        self.insert(converted)
    }

    /// Register a tool whose arguments are described by a Rust type.
    pub fn register_typed<T: JsonSchema>(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<&ConvertedTool> {
        self.register(ToolDefinition::typed::<T>(name, description)?)
    }

    pub fn register_all<I>(&mut self, definitions: I) -> Result<()>
    where
        I: IntoIterator<Item = ToolDefinition>,
    {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    fn insert(&mut self, converted: ConvertedTool) -> Result<&ConvertedTool> {
        let name = converted.name().clone();
        tracing::info!(
            tool = %name,
            record = %converted.arguments.name,
            fields = converted.arguments.fields.len(),
            "Registered tool"
        );
        self.order.push(name.clone());
        let entry = self.tools.entry(name).or_insert(converted);
        Ok(entry)
    }

    /// Get a registered tool by name
    pub fn get(&self, name: &str) -> Option<&ConvertedTool> {
        self.tools.get(name)
    }

    fn require(&self, name: &str) -> Result<&ConvertedTool> {
        self.get(name)
            .ok_or_else(|| ArgSchemaError::ToolNotFound(name.to_string()))
    }

    /// List all registered tool names
    pub fn list_tools(&self) -> Vec<String> {
        self.order.iter().map(ToString::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConvertedTool> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Argument records of every registered tool
    pub fn descriptors(&self) -> Vec<&RecordDescriptor> {
        self.iter().map(|tool| &tool.arguments).collect()
    }

    pub fn validate_arguments(&self, name: &str, args: &Value) -> Result<()> {
        self.require(name)?.validate(args)
    }

    pub fn typescript_declarations(&self) -> Result<String> {
        let tools = self.iter().collect::<Vec<_>>();
        render_typescript(&tools)
    }

    pub fn write_typescript_declarations(&self, path: &std::path::Path) -> Result<()> {
        let declarations = self.typescript_declarations()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, declarations)?;
        Ok(())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_names_must_not_be_blank() {
        assert!(ToolName::new("search").is_ok());
        assert!(matches!(
            ToolName::new("  "),
            Err(ArgSchemaError::InvalidArgument(_))
        ));
        let parsed: std::result::Result<ToolDefinition, _> =
            serde_json::from_value(json!({ "name": "", "inputSchema": {} }));
        assert!(parsed.is_err());
    }

    #[test]
    fn class_name_is_pascal_case() {
        assert_eq!(ToolName::new("get-weather").unwrap().class_name(), "GetWeather");
        assert_eq!(ToolName::new("My Tool").unwrap().class_name(), "MyTool");
        assert_eq!(ToolName::new("read_file").unwrap().class_name(), "ReadFile");
        assert_eq!(ToolName::new("2fa").unwrap().class_name(), "Tool2fa");
        assert_eq!(ToolName::new("!!").unwrap().class_name(), "Tool");
    }

    #[test]
    fn definitions_accept_every_schema_spelling() {
        for key in ["input_schema", "inputSchema", "parameters"] {
            let raw = json!({
                "name": "lookup",
                key: { "type": "object", "properties": { "id": { "type": "string" } } }
            });
            let definition: ToolDefinition = serde_json::from_value(raw).unwrap();
            assert_eq!(definition.input_schema["properties"]["id"]["type"], "string");
            assert_eq!(definition.description, "");
        }
    }

    #[test]
    fn definitions_without_schema_get_an_empty_object() {
        let definition: ToolDefinition =
            serde_json::from_value(json!({ "name": "ping" })).unwrap();
        assert_eq!(definition.input_schema, empty_object_schema());
    }
}
