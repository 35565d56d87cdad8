//! Structured output types for machine-readable CLI responses.
//!
//! When `--format json` is specified, commands emit these types as JSON
//! instead of human-readable text.

use serde::Serialize;

use open_mainframe_jessub::SubmissionOutcome;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Output from the generate command.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    pub status: String,
    pub job_name: String,
    pub environment: String,
    pub requests: usize,
    /// Requests that produced no statements.
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    pub jcl: String,
}

/// Output from the submit and run commands.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutput {
    pub job_file: String,
    pub port: String,
    #[serde(flatten)]
    pub outcome: SubmissionOutcome,
}

/// Output from the explain command.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainOutput {
    pub code: String,
    pub known: bool,
    pub description: String,
}

/// Print a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize JSON: {}", e),
    }
}
