//! Typed tool argument descriptors from JSON Schema.
//!
//! This crate re-exports the workspace: the schema converter and descriptor
//! tree always, tool handling and tracing setup behind the `tools` and
//! `observability` features.
//!
//! ```
//! use serde_json::json;
//!
//! let record = argschema::convert(
//!     "My Tool",
//!     &json!({
//!         "type": "object",
//!         "properties": { "x": { "type": "string" } },
//!         "required": ["x"]
//!     }),
//! );
//! assert!(record.name.as_str().starts_with("Generated_My_ToolSchema_"));
//! assert_eq!(record.field_names(), vec!["x"]);
//! assert!(record.fields[0].required);
//! ```

pub use argschema_convert::{
    ConverterConfig, DEFAULT_MAX_DEPTH, SchemaConverter, build_field_description, convert,
};
pub use argschema_core::{
    ArgSchemaError, ContextName, FieldDescriptor, RecordDescriptor, RecordName, Result,
    ScalarKind, TypeDescriptor, ValidationIssue, ids,
};

#[cfg(feature = "tools")]
pub mod tools {
    pub use argschema_tools::*;
}

#[cfg(feature = "observability")]
pub mod observability {
    pub use argschema_observability::*;
}
