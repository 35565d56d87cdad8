//! Generate command - builds the DFHCSDUP job for a change group.

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};

use open_mainframe_csdgen::JobGenerator;

use crate::input::{load_environments, load_requests, select_environment};
use crate::output::{print_json, GenerateOutput, OutputFormat};

/// A generated job and what went into it.
#[derive(Debug, Clone)]
pub struct BuiltJob {
    pub text: String,
    pub job_name: String,
    pub environment: String,
    pub request_ids: Vec<u64>,
    pub requests: usize,
    pub skipped: usize,
}

/// Load inputs and generate the job text.
pub fn build_job(requests: &Path, environments: &Path, env: Option<&str>) -> Result<BuiltJob> {
    let requests = load_requests(requests)?;
    let environments = load_environments(environments)?;
    let target = select_environment(&environments, env)?;

    let generated = JobGenerator::new(&environments).generate_counted(&requests, Some(target));

    Ok(BuiltJob {
        text: generated.text,
        job_name: target.job_name(),
        environment: target.name.clone(),
        request_ids: requests.iter().filter_map(|r| r.id).collect(),
        requests: requests.len(),
        skipped: generated.skipped,
    })
}

/// Run the generate command.
pub fn run(
    requests: &Path,
    environments: &Path,
    env: Option<&str>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let job = build_job(requests, environments, env)?;
    tracing::info!(
        job = %job.job_name,
        environment = %job.environment,
        requests = job.requests,
        skipped = job.skipped,
        "job generated"
    );

    if let Some(path) = output {
        std::fs::write(path, &job.text)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write job file: {}", path.display()))?;
    }

    if format.is_json() {
        print_json(&GenerateOutput {
            status: "success".to_string(),
            job_name: job.job_name,
            environment: job.environment,
            requests: job.requests,
            skipped: job.skipped,
            output_file: output.map(|p| p.display().to_string()),
            jcl: job.text,
        });
    } else if output.is_none() {
        print!("{}", job.text);
    }
    Ok(())
}
