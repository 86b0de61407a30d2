use crate::tools::ConvertedTool;
use argschema_core::{ArgSchemaError, RecordDescriptor, Result, ScalarKind, TypeDescriptor};
use argschema_observability::spans;
use genco::lang::js;
use genco::prelude::*;
use std::collections::HashSet;

/// Renders TypeScript declarations for the argument records of `tools`.
///
/// Every generated record becomes one `export interface`, nested records
/// before the records using them. Each tool also gets an
/// `export type <Class>Args` alias for its root record.
pub fn render_typescript(tools: &[&ConvertedTool]) -> Result<String> {
    let span = spans::render_typescript(tools.len());
    let _guard = span.enter();

    let mut tokens: js::Tokens = quote!();
    quote_in!(tokens => $("// TypeScript declarations for tool arguments"));
    tokens.push();
    quote_in!(tokens => $("// This file is auto-generated - do not edit manually"));
    tokens.line();

    let mut emitted: HashSet<&str> = HashSet::new();
    for tool in tools {
        let nested = tool.arguments.fields.iter().flat_map(|field| field.ty.records());
        for record in nested.chain(std::iter::once(&tool.arguments)) {
            if emitted.insert(record.name.as_str()) {
                let interface = render_interface(record);
                quote_in!(tokens => $(interface));
                tokens.line();
            }
        }

        let alias = format!("{}Args", tool.name().class_name());
        let target = tool.arguments.name.to_string();
        quote_in!(tokens => export type $(alias) = $(target););
        tokens.line();
    }

    tokens
        .to_file_string()
        .map_err(|e| ArgSchemaError::TypeScriptRender(e.to_string()))
}

fn render_interface(record: &RecordDescriptor) -> js::Tokens {
    let name = record.name.to_string();
    if record.fields.is_empty() {
        return quote!(export interface $(name) {});
    }

    let mut body: js::Tokens = quote!();
    for field in &record.fields {
        if !field.description.is_empty() {
            let doc = format!("/** {} */", doc_text(&field.description));
            quote_in!(body => $(doc));
            body.push();
        }
        let marker = if field.required { "" } else { "?" };
        let line = format!(
            "{}{}: {};",
            property_key(&field.name),
            marker,
            ts_type(&field.ty)
        );
        quote_in!(body => $(line));
        body.push();
    }
    quote! {
        export interface $(name) {
            $(body)
        }
    }
}

/// TypeScript spelling of a descriptor.
pub fn ts_type(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::Unknown => "unknown".to_string(),
        TypeDescriptor::Scalar { scalar } => match scalar {
            ScalarKind::String | ScalarKind::Date | ScalarKind::DateTime | ScalarKind::Time => {
                "string".to_string()
            }
            ScalarKind::Number | ScalarKind::Integer => "number".to_string(),
            ScalarKind::Boolean => "boolean".to_string(),
            ScalarKind::Null => "null".to_string(),
        },
        TypeDescriptor::Literal { values } => values
            .iter()
            .map(|value| serde_json::Value::String(value.clone()).to_string())
            .collect::<Vec<_>>()
            .join(" | "),
        TypeDescriptor::Sequence { items } => format!("Array<{}>", ts_type(items)),
        TypeDescriptor::Mapping => "Record<string, unknown>".to_string(),
        TypeDescriptor::Record(record) => record.name.to_string(),
        TypeDescriptor::Union { members } => members
            .iter()
            .map(ts_type)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let identifier = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if identifier {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}

fn doc_text(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}
