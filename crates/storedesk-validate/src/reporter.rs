//! Validation Report Generation
//!
//! Generates reports in two formats:
//! - JSON for tooling and the dashboard
//! - Human-readable for terminal output

use crate::diagnostics::{Diagnostic, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown output format: {other}. Use human or json")),
        }
    }
}

/// Validation result plus the context of the run that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Timestamp of the validation run
    pub timestamp: String,
    /// Where the mutation text came from (file path or `<stdin>`)
    pub source: String,
    /// Text after auto-fixing, when the fixer was run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_text: Option<String>,
    pub result: ValidationResult,
}

impl ValidationReport {
    pub fn new(source: impl Into<String>, result: ValidationResult) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: source.into(),
            fixed_text: None,
            result,
        }
    }

    pub fn with_fixed_text(mut self, text: impl Into<String>) -> Self {
        self.fixed_text = Some(text.into());
        self
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    pub fn render(report: &ValidationReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => Self::to_human_readable(report),
            OutputFormat::Json => Self::to_json(report),
        }
    }

    /// Generate JSON report
    pub fn to_json(report: &ValidationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &ValidationReport) -> String {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("=== Mutation Validation Report ===\n\n");
        let _ = writeln!(output, "Timestamp: {}", report.timestamp);
        let _ = writeln!(output, "Source:    {}", report.source);
        let _ = writeln!(
            output,
            "Operation: {}\n",
            result.operation_name.as_deref().unwrap_or("<missing>")
        );

        output.push_str("--- Summary ---\n");
        let field_names = result.field_names();
        if field_names.is_empty() {
            let _ = writeln!(output, "Fields:      0");
        } else {
            let _ = writeln!(
                output,
                "Fields:      {} ({})",
                field_names.len(),
                field_names.join(", ")
            );
        }
        let _ = writeln!(output, "Variables:   {}", result.variables.len());
        let _ = writeln!(output, "Errors:      {}", result.errors.len());
        let _ = writeln!(output, "Warnings:    {}", result.warnings.len());
        let _ = writeln!(output, "Suggestions: {}", result.suggestions.len());
        output.push('\n');

        let status = if result.valid { "PASSED" } else { "FAILED" };
        let _ = writeln!(output, "Status: {status}\n");

        Self::section(&mut output, "Errors", &result.errors);
        Self::section(&mut output, "Warnings", &result.warnings);
        Self::section(&mut output, "Suggestions", &result.suggestions);

        if !result.variables.is_empty() {
            output.push_str("--- Variables ---\n");
            for (name, type_name) in &result.variables {
                let _ = writeln!(output, "  ${name}: {type_name}");
            }
            output.push('\n');
        }

        if let Some(fixed) = &report.fixed_text {
            output.push_str("--- Fixed Mutation ---\n");
            output.push_str(fixed);
            output.push_str("\n\n");
        }

        output
    }

    fn section(output: &mut String, title: &str, diagnostics: &[Diagnostic]) {
        if diagnostics.is_empty() {
            return;
        }
        let _ = writeln!(output, "--- {title} ---");
        for d in diagnostics {
            let _ = writeln!(output, "  [{}] {}", d.code, d.message);
        }
        output.push('\n');
    }
}
