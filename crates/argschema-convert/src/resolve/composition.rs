//! `allOf` composition, approximated as a property-union merge.

use super::Resolver;
use super::record::{PropertySet, required_names};
use argschema_core::{ContextName, TypeDescriptor};
use serde_json::{Map, Value};

impl Resolver<'_> {
    /// Merges every `allOf` branch into one record.
    ///
    /// Later branches overwrite same-named properties and `required` lists
    /// concatenate. Properties of `anyOf`/`oneOf` variants nested in a branch
    /// are folded in only when the name is new, and stay optional. Variants
    /// that were mutually exclusive end up side by side as optional fields.
    pub(crate) fn resolve_all_of(
        &self,
        schema: &Map<String, Value>,
        context: &ContextName,
        depth: usize,
    ) -> TypeDescriptor {
        let mut properties = PropertySet::default();
        let mut required: Vec<&str> = Vec::new();
        let mut found_type: Option<&Value> = None;

        let branches = schema.get("allOf").and_then(Value::as_array);
        for branch in branches.into_iter().flatten().filter_map(Value::as_object) {
            if let Some(t) = branch.get("type").filter(|t| is_declared(t)) {
                found_type = Some(t);
            }

            if let Some(branch_properties) = branch.get("properties").and_then(Value::as_object) {
                for (name, property) in branch_properties {
                    properties.overwrite(name, property);
                }
            }

            required.extend(required_names(branch.get("required")));

            for union_key in ["anyOf", "oneOf"] {
                let variants = branch.get(union_key).and_then(Value::as_array);
                for variant in variants.into_iter().flatten() {
                    let Some(variant_properties) = variant.get("properties").and_then(Value::as_object)
                    else {
                        continue;
                    };
                    for (name, property) in variant_properties {
                        properties.insert_absent(name, property);
                    }
                }
            }
        }

        if !properties.is_empty() {
            return self.build_record(context, &properties, &required, depth).into();
        }

        match found_type.and_then(Value::as_str) {
            Some("array") => TypeDescriptor::untyped_sequence(),
            _ => TypeDescriptor::Mapping,
        }
    }
}

fn is_declared(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
