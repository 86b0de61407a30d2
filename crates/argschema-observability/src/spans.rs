//! Named spans for the conversion pipeline.

use std::path::Path;
use tracing::Span;

pub fn convert_tool(tool: &str) -> Span {
    tracing::info_span!("convert_tool", tool = tool)
}

pub fn load_tool_file(path: &Path) -> Span {
    tracing::info_span!("load_tool_file", path = %path.display())
}

pub fn validate_arguments(tool: &str) -> Span {
    tracing::debug_span!("validate_arguments", tool = tool)
}

pub fn render_typescript(tools: usize) -> Span {
    tracing::debug_span!("render_typescript", tools)
}
