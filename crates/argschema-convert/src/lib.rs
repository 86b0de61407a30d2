//! JSON Schema to type descriptor conversion.
//!
//! [`SchemaConverter::convert`] turns a tool's input schema into a named
//! [`RecordDescriptor`](argschema_core::RecordDescriptor). Nested objects
//! become their own uniquely named records; unsupported or malformed schema
//! fragments degrade to `Unknown`, plain strings or generic containers
//! instead of failing.

pub mod converter;
pub mod description;
pub mod naming;
pub mod resolve;

pub use converter::{ConverterConfig, DEFAULT_MAX_DEPTH, SchemaConverter, convert};
pub use description::build_field_description;
pub use naming::{sanitize_tool_name, title_case, tool_context};
