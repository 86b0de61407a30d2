//! Schema helpers for tools whose arguments are Rust types.

use schemars::{JsonSchema, generate::SchemaSettings};
use serde_json::Value;

/// JSON Schema for `T`, in the shape tool definitions carry.
///
/// Nested types are inlined rather than placed under `$defs`, since `$ref`
/// is never followed during conversion.
pub fn json_schema_value<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft2020_12()
        .with(|settings| {
            settings.inline_subschemas = true;
            settings.meta_schema = None;
        })
        .into_generator();
    let mut schema = generator.into_root_schema_for::<T>();
    schema.remove("title");
    serde_json::to_value(&schema).unwrap_or(Value::Null)
}
