//! Run command - generate, spool, and submit in one step.

use std::path::Path;

use miette::Result;

use open_mainframe_jessub::{JobSpool, SubmitContext};

use crate::commands::generate::build_job;
use crate::commands::submit::{report, submit_file};
use crate::config::CsdJobConfig;
use crate::output::OutputFormat;

/// Run the run command.
pub async fn run(
    config: &CsdJobConfig,
    requests: &Path,
    environments: &Path,
    env: Option<&str>,
    user: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let job = build_job(requests, environments, env)?;
    if job.text.is_empty() {
        miette::bail!("no change requests to submit");
    }

    let spool = JobSpool::from_config(&config.spool);
    let path = spool.write(&job.job_name, &job.text)?;
    tracing::info!(path = %path.display(), job = %job.job_name, "job file written");

    let ctx = SubmitContext {
        user,
        environment: Some(job.environment),
        request_ids: job.request_ids,
    };
    let (port, outcome) = submit_file(config, path.clone(), ctx).await?;
    report(&path, port, outcome, format)
}
