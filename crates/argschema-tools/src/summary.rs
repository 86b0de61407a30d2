//! Plain-text summary of converted tools.

use crate::tools::ConvertedTool;
use argschema_core::RecordDescriptor;

/// One line per field: `  name: type (required|optional) - description`.
pub fn render_record(record: &RecordDescriptor) -> String {
    record
        .fields
        .iter()
        .map(|field| {
            let mut line = format!(
                "  {}: {} ({})",
                field.name,
                field.ty,
                if field.required { "required" } else { "optional" }
            );
            if !field.description.is_empty() {
                line.push_str(" - ");
                line.push_str(&field.description);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header line with the tool and record names, then the record's fields.
pub fn render_tool(tool: &ConvertedTool) -> String {
    let header = format!("{} -> {}", tool.name(), tool.arguments.name);
    if tool.arguments.fields.is_empty() {
        format!("{}\n  (no arguments)", header)
    } else {
        format!("{}\n{}", header, render_record(&tool.arguments))
    }
}
