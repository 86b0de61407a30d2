//! Type resolution engine.
//!
//! Classifies a schema node and routes it to the matching resolver. The
//! precedence is fixed: `$ref`, `enum`, `allOf`, `anyOf`/`oneOf`, a `type`
//! list, `array`, `object`, formatted strings, then simple scalars.

pub mod composition;
pub mod container;
pub mod enums;
pub mod primitive;
pub mod record;
pub mod union;

use argschema_core::{ContextName, TypeDescriptor};
use argschema_id::SuffixSource;
use serde_json::Value;

/// Holds what a single conversion needs while it recurses.
pub(crate) struct Resolver<'a> {
    suffixes: &'a dyn SuffixSource,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(suffixes: &'a dyn SuffixSource, max_depth: usize) -> Self {
        Self { suffixes, max_depth }
    }

    pub(crate) fn resolve(&self, node: &Value, context: &ContextName, depth: usize) -> TypeDescriptor {
        if depth > self.max_depth {
            tracing::warn!(
                context = %context,
                depth,
                max_depth = self.max_depth,
                "Schema nesting exceeds depth limit; resolving as unknown"
            );
            return TypeDescriptor::Unknown;
        }

        let Some(schema) = node.as_object() else {
            return TypeDescriptor::Unknown;
        };
        if schema.is_empty() || schema.contains_key("$ref") {
            return TypeDescriptor::Unknown;
        }

        if schema.contains_key("enum") {
            return enums::resolve_enum(schema);
        }
        if schema.contains_key("allOf") {
            return self.resolve_all_of(schema, context, depth);
        }
        if schema.contains_key("anyOf") || schema.contains_key("oneOf") {
            return self.resolve_alternatives(schema, context, depth);
        }

        match schema.get("type") {
            Some(Value::Array(types)) => union::resolve_type_list(types),
            Some(Value::String(t)) if t == "array" => self.resolve_array(schema, context, depth),
            Some(Value::String(t)) if t == "object" => self.resolve_object(schema, context, depth),
            Some(Value::String(t)) if t == "string" && schema.contains_key("format") => {
                primitive::formatted_string(schema.get("format"))
            }
            other => primitive::simple_type(other),
        }
    }
}
