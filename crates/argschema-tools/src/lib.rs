//! Tool definitions, registry, argument validation and TypeScript output.

pub mod summary;
pub mod tool_catalog;
pub mod tool_schema;
pub mod tools;
pub mod ts_gen;
pub mod validate;

pub use tool_catalog::ToolDefinitionFile;
pub use tool_schema::json_schema_value;
pub use tools::{ConvertedTool, ToolDefinition, ToolName, ToolRegistry};
pub use ts_gen::render_typescript;
pub use validate::{validate_arguments, validate_value};
