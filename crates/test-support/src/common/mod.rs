//! Deterministic converters and registries.

mod schemas;

pub use schemas::*;

use argschema_convert::{ConverterConfig, SchemaConverter};
use argschema_core::ids::SequenceSuffixSource;
use argschema_tools::ToolRegistry;
use std::path::PathBuf;
use tempfile::TempDir;

/// Converter whose record suffixes count up from `00000000`.
pub fn deterministic_converter() -> SchemaConverter {
    SchemaConverter::with_suffix_source(SequenceSuffixSource::new())
}

pub fn deterministic_converter_with_depth(max_depth: usize) -> SchemaConverter {
    deterministic_converter().with_config(ConverterConfig { max_depth })
}

pub fn deterministic_registry() -> ToolRegistry {
    ToolRegistry::with_converter(deterministic_converter())
}

/// Writes `contents` to `tools.json` inside a fresh temporary directory.
///
/// The directory lives as long as the returned guard.
pub fn write_tool_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tools.json");
    std::fs::write(&path, contents).expect("write tool file");
    (dir, path)
}
