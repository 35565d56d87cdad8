//! Submit command - hands an existing job file to the configured port.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{IntoDiagnostic, Result};

use open_mainframe_jessub::{SubmissionOutcome, SubmissionService, SubmitContext};

use crate::config::CsdJobConfig;
use crate::output::{print_json, OutputFormat, SubmitOutput};

/// Submit `job_file` through the port selected by `config`.
pub async fn submit_file(
    config: &CsdJobConfig,
    job_file: PathBuf,
    ctx: SubmitContext,
) -> Result<(&'static str, SubmissionOutcome)> {
    let service = Arc::new(SubmissionService::new(config.submission.build_port()));
    let port = service.port_name();

    let outcome = match config.submission.timeout() {
        Some(limit) => service.submit_with_timeout(job_file, ctx, limit).await?,
        None => tokio::task::spawn_blocking(move || service.submit(&job_file, &ctx))
            .await
            .into_diagnostic()?,
    };
    Ok((port, outcome))
}

/// Print an outcome and turn a failed submission into an error exit.
pub fn report(
    job_file: &std::path::Path,
    port: &str,
    outcome: SubmissionOutcome,
    format: OutputFormat,
) -> Result<()> {
    let success = outcome.success;
    let return_code = outcome.return_code.clone();

    if format.is_json() {
        print_json(&SubmitOutput {
            job_file: job_file.display().to_string(),
            port: port.to_string(),
            outcome,
        });
    } else {
        println!("{}", outcome.message);
    }

    if success {
        Ok(())
    } else {
        Err(miette::miette!("submission failed with return code {return_code}"))
    }
}

/// Run the submit command.
pub async fn run(
    config: &CsdJobConfig,
    job_file: PathBuf,
    ctx: SubmitContext,
    format: OutputFormat,
) -> Result<()> {
    let (port, outcome) = submit_file(config, job_file.clone(), ctx).await?;
    report(&job_file, port, outcome, format)
}
