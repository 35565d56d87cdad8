//! csdjob — generate and submit DFHCSDUP jobs for CICS CSD change requests.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

use open_mainframe_csdjob::commands;
use open_mainframe_csdjob::output::OutputFormat;
use open_mainframe_csdjob::{CsdJobConfig, Overrides};
use open_mainframe_jessub::{SubmitContext, SubmitMode};

/// csdjob CLI.
#[derive(Parser)]
#[command(name = "csdjob", version, about = "csdjob — CICS CSD change jobs for DFHCSDUP")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the DFHCSDUP job for a group of change requests.
    Generate {
        /// JSON file with the change requests.
        requests: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        /// Write the job to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Submit an existing job file.
    Submit {
        /// Job file to submit.
        job_file: PathBuf,
        /// User on whose behalf the job is submitted.
        #[arg(long)]
        user: Option<String>,
        /// Target environment name, for the submission log.
        #[arg(long)]
        env: Option<String>,
        /// Change request ids the job implements.
        #[arg(long = "request-id")]
        request_ids: Vec<u64>,
        #[command(flatten)]
        submit: SubmitArgs,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Generate, spool, and submit the job for a group of change requests.
    Run {
        /// JSON file with the change requests.
        requests: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        /// User on whose behalf the job is submitted.
        #[arg(long)]
        user: Option<String>,
        #[command(flatten)]
        submit: SubmitArgs,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Describe a transfer return code.
    Explain {
        /// Two-character return code (e.g. 16, A0).
        code: String,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// JSON file with the environment directory.
    #[arg(long)]
    environments: PathBuf,
    /// Target environment name; may be omitted when the directory has one entry.
    #[arg(long)]
    env: Option<String>,
}

#[derive(Args)]
struct SubmitArgs {
    /// Simulate the submission.
    #[arg(long, conflicts_with = "live")]
    mock: bool,
    /// Submit through the native transfer library.
    #[arg(long)]
    live: bool,
    /// Directory for spooled job files.
    #[arg(long)]
    jcl_dir: Option<PathBuf>,
}

impl SubmitArgs {
    fn overrides(&self) -> Overrides {
        let mode = if self.live {
            Some(SubmitMode::Live)
        } else if self.mock {
            Some(SubmitMode::Mock)
        } else {
            None
        };
        Overrides {
            mode,
            jcl_dir: self.jcl_dir.clone(),
        }
    }
}

fn load_config(path: Option<&PathBuf>, submit: &SubmitArgs) -> Result<CsdJobConfig> {
    let mut config = CsdJobConfig::load(path.map(PathBuf::as_path))?;
    config.apply(&submit.overrides());
    tracing::debug!(
        mode = ?config.submission.mode,
        jcl_dir = %config.spool.jcl_dir.display(),
        "configuration"
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "open_mainframe_csdjob=info,open_mainframe_jessub=info,open_mainframe_csdgen=warn",
        )
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            requests,
            target,
            output,
            format,
        } => commands::generate::run(
            &requests,
            &target.environments,
            target.env.as_deref(),
            output.as_deref(),
            format,
        ),
        Commands::Submit {
            job_file,
            user,
            env,
            request_ids,
            submit,
            format,
        } => {
            let config = load_config(cli.config.as_ref(), &submit)?;
            let ctx = SubmitContext {
                user,
                environment: env,
                request_ids,
            };
            commands::submit::run(&config, job_file, ctx, format).await
        }
        Commands::Run {
            requests,
            target,
            user,
            submit,
            format,
        } => {
            let config = load_config(cli.config.as_ref(), &submit)?;
            commands::run::run(
                &config,
                &requests,
                &target.environments,
                target.env.as_deref(),
                user,
                format,
            )
            .await
        }
        Commands::Explain { code, format } => {
            commands::explain::run(&code, format);
            Ok(())
        }
    }
}
