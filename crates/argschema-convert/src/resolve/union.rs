//! `anyOf` / `oneOf` branches and multi-valued `type` lists.

use super::Resolver;
use super::primitive::type_list_entry;
use argschema_core::{ContextName, TypeDescriptor};
use serde_json::{Map, Value};

impl Resolver<'_> {
    /// Resolves every branch of `anyOf` (or, failing that, `oneOf`) under the
    /// same context and joins them with the union rule. Branches pinned with
    /// `const` count as plain strings.
    pub(crate) fn resolve_alternatives(
        &self,
        schema: &Map<String, Value>,
        context: &ContextName,
        depth: usize,
    ) -> TypeDescriptor {
        let key = if schema.contains_key("anyOf") { "anyOf" } else { "oneOf" };
        let branches = schema
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        TypeDescriptor::union_of(branches.iter().map(|branch| {
            if branch.as_object().is_some_and(|b| b.contains_key("const")) {
                TypeDescriptor::string()
            } else {
                self.resolve(branch, context, depth + 1)
            }
        }))
    }
}

/// Union over the entries of a `type` list.
pub fn resolve_type_list(types: &[Value]) -> TypeDescriptor {
    TypeDescriptor::union_of(types.iter().map(type_list_entry))
}
