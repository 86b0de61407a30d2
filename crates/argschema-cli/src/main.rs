//! argschema
//!
//! Converts the tool definitions in a JSON file into argument descriptors and
//! prints them as JSON, a plain summary or TypeScript declarations. With
//! `--validate`, checks a set of arguments against one tool instead.

use anyhow::Context;
use argschema_convert::{ConverterConfig, DEFAULT_MAX_DEPTH, SchemaConverter};
use argschema_core::ids::SequenceSuffixSource;
use argschema_core::{RecordDescriptor, Result};
use argschema_observability::{LogFormat, tracing_setup};
use argschema_tools::{ConvertedTool, ToolDefinition, ToolDefinitionFile, ToolName, ToolRegistry, summary};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Summary,
    Typescript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormatChoice {
    Text,
    Json,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Text => LogFormat::Text,
            LogFormatChoice::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
struct RunnerConfig {
    tools_file: PathBuf,
    tool: Option<String>,
    format: OutputFormat,
    validate: Option<Value>,
    converter: ConverterConfig,
    deterministic: bool,
    log_level: String,
    log_format: LogFormat,
}

#[derive(Debug, Parser)]
#[command(name = "argschema")]
#[command(about = "Convert tool input schemas into typed argument descriptors", long_about = None)]
struct Cli {
    /// JSON file with tool definitions, `{"tools": [...]}` or a bare array.
    #[arg(value_name = "TOOLS_FILE")]
    tools_file: PathBuf,

    /// Only convert the named tool.
    #[arg(long)]
    tool: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Validate these JSON arguments against `--tool` instead of printing.
    #[arg(long, value_name = "JSON_ARGS", requires = "tool")]
    validate: Option<String>,

    /// Deepest schema nesting that is still resolved.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Number generated records sequentially instead of randomly.
    #[arg(long)]
    deterministic: bool,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format (logs go to stderr).
    #[arg(long, value_enum, default_value_t = LogFormatChoice::Text)]
    log_format: LogFormatChoice,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RunnerConfig> {
        if self.max_depth == 0 {
            anyhow::bail!("--max-depth must be at least 1");
        }
        let validate = self
            .validate
            .map(|raw| serde_json::from_str::<Value>(&raw))
            .transpose()
            .context("--validate expects a JSON value")?;

        Ok(RunnerConfig {
            tools_file: self.tools_file,
            tool: self.tool,
            format: self.format,
            validate,
            converter: ConverterConfig {
                max_depth: self.max_depth,
            },
            deterministic: self.deterministic,
            log_level: self.log_level,
            log_format: self.log_format.into(),
        })
    }
}

fn build_converter(config: &RunnerConfig) -> SchemaConverter {
    let converter = if config.deterministic {
        SchemaConverter::with_suffix_source(SequenceSuffixSource::new())
    } else {
        SchemaConverter::new()
    };
    converter.with_config(config.converter)
}

fn select_definitions(file: ToolDefinitionFile, tool: Option<&str>) -> Result<Vec<ToolDefinition>> {
    match tool {
        Some(name) => file.select(&[name.to_string()]),
        None => Ok(file.into_definitions()),
    }
}

/// Converts every definition on the blocking pool.
///
/// Sequential numbering only stays reproducible when one task draws every
/// suffix, so `sequential` converts in a single task.
async fn convert_all(
    converter: Arc<SchemaConverter>,
    definitions: Vec<ToolDefinition>,
    sequential: bool,
) -> anyhow::Result<Vec<ConvertedTool>> {
    if sequential {
        let converted = tokio::task::spawn_blocking(move || {
            definitions
                .into_iter()
                .map(|definition| ConvertedTool::convert(&converter, definition))
                .collect::<Vec<_>>()
        })
        .await
        .context("Conversion task failed")?;
        return Ok(converted);
    }

    let mut tasks = JoinSet::new();
    for (index, definition) in definitions.into_iter().enumerate() {
        let converter = Arc::clone(&converter);
        tasks.spawn_blocking(move || (index, ConvertedTool::convert(&converter, definition)));
    }

    let mut converted = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        converted.push(joined.context("Conversion task failed")?);
    }
    converted.sort_by_key(|(index, _)| *index);
    Ok(converted.into_iter().map(|(_, tool)| tool).collect())
}

#[derive(Serialize)]
struct ToolOutput<'a> {
    name: &'a ToolName,
    description: &'a str,
    arguments: &'a RecordDescriptor,
}

fn render(registry: &ToolRegistry, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let tools = registry
                .iter()
                .map(|tool| ToolOutput {
                    name: tool.name(),
                    description: &tool.definition.description,
                    arguments: &tool.arguments,
                })
                .collect::<Vec<_>>();
            serde_json::to_string_pretty(&tools).context("Failed to serialize descriptors")
        }
        OutputFormat::Summary => Ok(registry
            .iter()
            .map(summary::render_tool)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Typescript => registry
            .typescript_declarations()
            .context("Failed to render TypeScript declarations"),
    }
}

async fn run(config: RunnerConfig) -> anyhow::Result<String> {
    let file = ToolDefinitionFile::load(&config.tools_file)
        .with_context(|| format!("Failed to load {}", config.tools_file.display()))?;
    let definitions = select_definitions(file, config.tool.as_deref())?;
    info!(tools = definitions.len(), "Converting tool definitions");

    let converter = Arc::new(build_converter(&config));
    let converted = convert_all(Arc::clone(&converter), definitions, config.deterministic).await?;

    let mut registry = ToolRegistry::with_converter(converter.as_ref().clone());
    for tool in converted {
        registry.register_converted(tool)?;
    }

    if let (Some(args), Some(tool)) = (&config.validate, config.tool.as_deref()) {
        registry.validate_arguments(tool, args)?;
        debug!(tool, "Arguments validated");
        return Ok(format!("{}: arguments are valid", tool));
    }

    render(&registry, config.format)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config().context("Failed to parse arguments")?;
    tracing_setup::init_tracing(&config.log_level, config.log_format)
        .context("Failed to initialize tracing")?;

    let output = run(config).await?;
    println!("{}", output);
    Ok(())
}
