//! Command line harness
//!
//! Reads a mutation document, validates it (optionally after auto-fixing)
//! and renders the report. The exit status reflects `valid`.

use crate::logging::init_logging;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use storedesk_validate::{
    ConfigLoader, FileConfig, MutationValidator, OutputFormat, Reporter, ValidationReport,
    example, registry,
};
use tracing::info;

/// Source label used when the document is read from stdin
pub const STDIN_SOURCE: &str = "<stdin>";

/// Command line interface for storedesk
#[derive(Parser, Debug)]
#[command(name = "storedesk")]
#[command(about = "storedesk - validate and repair GraphQL mutations before they reach the store API")]
#[command(version)]
pub struct Cli {
    /// Mutation document to validate (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run the auto-fixer first and validate the fixed text
    #[arg(long)]
    pub fix: bool,

    /// Report format: human or json (overrides `output.format`)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Print the catalog example for FIELD and exit
    #[arg(long, value_name = "FIELD", conflicts_with = "list_fields")]
    pub example: Option<String>,

    /// Print the registered mutation fields and exit
    #[arg(long)]
    pub list_fields: bool,
}

/// Rendered report and the validity it describes
#[derive(Debug, Clone)]
pub struct Execution {
    pub output: String,
    pub valid: bool,
}

/// Full CLI flow; returns whether the document was valid
pub fn run(cli: &Cli) -> Result<bool> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    let format = cli.format.unwrap_or(config.output.format);

    if cli.list_fields {
        println!("{}", list_fields(format)?);
        return Ok(true);
    }

    if let Some(field) = &cli.example {
        println!("{}", example_text(field)?);
        return Ok(true);
    }

    let (source, text) = read_input(cli.file.as_deref())?;
    let execution = execute(cli, &config, &source, &text)?;
    print!("{}", execution.output);
    Ok(execution.valid)
}

/// Validate `text` and render the report; no I/O
pub fn execute(cli: &Cli, config: &FileConfig, source: &str, text: &str) -> Result<Execution> {
    let validator = MutationValidator::with_settings(&config.validator)?;
    let format = cli.format.unwrap_or(config.output.format);

    let report = if cli.fix {
        let outcome = validator.fix_with_report(text);
        if outcome.changed() {
            info!(fields = ?outcome.applied, "Auto-fix rewrote the mutation");
        }
        let result = validator.validate(&outcome.text);
        ValidationReport::new(source, result).with_fixed_text(outcome.text)
    } else {
        ValidationReport::new(source, validator.validate(text))
    };

    Ok(Execution {
        valid: report.result.valid,
        output: Reporter::render(&report, format),
    })
}

/// Registered field names, one per line or as a JSON array
pub fn list_fields(format: OutputFormat) -> Result<String> {
    let names = registry().field_names();
    match format {
        OutputFormat::Human => Ok(names.join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&names).context("Failed to serialize field names")
        }
    }
}

pub fn example_text(field: &str) -> Result<&'static str> {
    example(field).ok_or_else(|| {
        anyhow!(
            "No example for field `{field}`. Known fields: {}",
            registry().field_names().join(", ")
        )
    })
}

fn read_input(file: Option<&Path>) -> Result<(String, String)> {
    match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read mutation from stdin")?;
            Ok((STDIN_SOURCE.to_string(), text))
        }
    }
}
