use crate::tools::{ToolDefinition, ToolName};
use argschema_core::{ArgSchemaError, Result};
use argschema_observability::spans;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum ToolFileShape {
    Wrapped { tools: Vec<ToolDefinition> },
    Bare(Vec<ToolDefinition>),
}

/// Tool definitions loaded from a JSON file, either `{"tools": [...]}`
/// (the shape of an MCP `tools/list` result) or a bare array.
#[derive(Debug, Clone, Default)]
pub struct ToolDefinitionFile {
    tools: Vec<ToolDefinition>,
}

impl ToolDefinitionFile {
    pub fn load(path: &Path) -> Result<Self> {
        let span = spans::load_tool_file(path);
        let _guard = span.enter();
        let raw = std::fs::read_to_string(path)?;
        let file = Self::parse(&raw)?;
        tracing::debug!(tools = file.tools.len(), "Loaded tool definitions");
        Ok(file)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let tools = match serde_json::from_str::<ToolFileShape>(raw)? {
            ToolFileShape::Wrapped { tools } | ToolFileShape::Bare(tools) => tools,
        };
        Self::from_definitions(tools)
    }

    /// # Errors
    /// `ToolRegistration` when two definitions share a name.
    pub fn from_definitions(tools: Vec<ToolDefinition>) -> Result<Self> {
        let mut seen: HashSet<&ToolName> = HashSet::new();
        for tool in &tools {
            if !seen.insert(&tool.name) {
                return Err(ArgSchemaError::ToolRegistration(format!(
                    "Tool '{}' is defined more than once",
                    tool.name
                )));
            }
        }
        Ok(Self { tools })
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name.as_str() == name)
    }

    pub fn into_definitions(self) -> Vec<ToolDefinition> {
        self.tools
    }

    /// Definitions named in `names`, in the order given.
    ///
    /// # Errors
    /// `ToolNotFound` listing every missing name.
    pub fn select(&self, names: &[String]) -> Result<Vec<ToolDefinition>> {
        let mut resolved = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            match self.by_name(name) {
                Some(definition) => resolved.push(definition.clone()),
                None => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(ArgSchemaError::ToolNotFound(missing.join(", ")));
        }
        Ok(resolved)
    }
}
