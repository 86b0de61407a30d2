//! Conversion entry points.

use crate::naming::tool_context;
use crate::resolve::Resolver;
use crate::resolve::record::{PropertySet, required_names};
use argschema_core::{ContextName, RecordDescriptor, TypeDescriptor};
use argschema_id::{RandomSuffixSource, SuffixSource};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Nesting depth past which nodes resolve to `Unknown`.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Deepest schema nesting that is still resolved. The top-level record's
    /// fields sit at depth 1.
    pub max_depth: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Converts tool input schemas into record descriptors.
///
/// Cheap to clone and safe to share between threads; clones draw record
/// suffixes from the same source.
#[derive(Clone)]
pub struct SchemaConverter {
    suffixes: Arc<dyn SuffixSource>,
    config: ConverterConfig,
}

impl SchemaConverter {
    /// Converter with random record suffixes and the default configuration.
    pub fn new() -> Self {
        Self::with_suffix_source(RandomSuffixSource)
    }

    pub fn with_suffix_source(source: impl SuffixSource + 'static) -> Self {
        Self {
            suffixes: Arc::new(source),
            config: ConverterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a tool's input schema into its argument record.
    ///
    /// The record is named after the tool (spaces and hyphens replaced by
    /// underscores, suffixed `Schema`). Missing `properties` give a record
    /// without fields.
    pub fn convert(&self, tool_name: &str, schema: &Value) -> RecordDescriptor {
        let empty = Map::new();
        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let required = required_names(schema.get("required"));

        let record = self.resolver().build_record(
            &tool_context(tool_name),
            &PropertySet::from_map(properties),
            &required,
            0,
        );
        tracing::debug!(
            tool = tool_name,
            record = %record.name,
            fields = record.fields.len(),
            "Converted tool schema"
        );
        record
    }

    /// Resolves a single schema node under a context name.
    pub fn resolve(&self, node: &Value, context_name: &str) -> TypeDescriptor {
        self.resolver().resolve(node, &ContextName::new(context_name), 1)
    }

    /// Builds a record straight from a property map and required names.
    pub fn build_record(
        &self,
        context_name: &str,
        properties: &Map<String, Value>,
        required: &[&str],
    ) -> RecordDescriptor {
        self.resolver().build_record(
            &ContextName::new(context_name),
            &PropertySet::from_map(properties),
            required,
            0,
        )
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.suffixes.as_ref(), self.config.max_depth)
    }
}

impl Default for SchemaConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchemaConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaConverter")
            .field("suffixes", &self.suffixes.construction())
            .field("config", &self.config)
            .finish()
    }
}

/// Converts with a fresh random-suffix converter.
pub fn convert(tool_name: &str, schema: &Value) -> RecordDescriptor {
    SchemaConverter::new().convert(tool_name, schema)
}
