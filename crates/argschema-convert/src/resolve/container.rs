//! `array` and `object` nodes.

use super::Resolver;
use super::record::{PropertySet, required_names};
use argschema_core::{ContextName, TypeDescriptor};
use serde_json::{Map, Value};

impl Resolver<'_> {
    /// A sequence of the resolved `items`, or an untyped sequence.
    pub(crate) fn resolve_array(
        &self,
        schema: &Map<String, Value>,
        context: &ContextName,
        depth: usize,
    ) -> TypeDescriptor {
        match schema.get("items") {
            Some(items) if items.as_object().is_some_and(|o| !o.is_empty()) => {
                TypeDescriptor::sequence_of(self.resolve(items, &context.item(), depth + 1))
            }
            _ => TypeDescriptor::untyped_sequence(),
        }
    }

    /// A record over `properties`, or a generic mapping when there are none.
    pub(crate) fn resolve_object(
        &self,
        schema: &Map<String, Value>,
        context: &ContextName,
        depth: usize,
    ) -> TypeDescriptor {
        match schema.get("properties").and_then(Value::as_object) {
            Some(properties) if !properties.is_empty() => {
                let required = required_names(schema.get("required"));
                self.build_record(context, &PropertySet::from_map(properties), &required, depth)
                    .into()
            }
            _ => TypeDescriptor::Mapping,
        }
    }
}
