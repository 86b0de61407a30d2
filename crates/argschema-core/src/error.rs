//! Error types for argschema
//!
//! Schema conversion itself never fails; these errors cover the surfaces
//! around it (tool registration, argument validation, rendering, file I/O).

use std::fmt;
use thiserror::Error;

/// Main error type for argschema
#[derive(Error, Debug)]
pub enum ArgSchemaError {
    /// Invalid argument provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool registration error
    #[error("Tool registration error: {0}")]
    ToolRegistration(String),

    /// Arguments did not match the tool's descriptor
    #[error("Invalid arguments for tool '{tool}': {}", summarize(.issues))]
    ArgumentValidation {
        tool: String,
        issues: Vec<ValidationIssue>,
    },

    /// Runtime configuration error
    #[error("Runtime configuration error: {0}")]
    Configuration(String),

    /// TypeScript rendering error
    #[error("TypeScript render error: {0}")]
    TypeScriptRender(String),

    /// I/O error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One mismatch between a value and its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Slash-separated location of the offending value; empty for the root.
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "/: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ArgSchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_issue() {
        let error = ArgSchemaError::ArgumentValidation {
            tool: "search".to_string(),
            issues: vec![
                ValidationIssue::new("/query", "missing required field"),
                ValidationIssue::new("", "expected object, found array"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Invalid arguments for tool 'search': /query: missing required field; /: expected object, found array"
        );
    }
}
