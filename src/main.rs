//! prv - merge-readiness verdicts for GitHub pull requests

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pr_verdict::types::Overall;

/// Merge-readiness verdicts for GitHub pull requests
#[derive(Parser)]
#[command(name = "prv", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Report whether a pull request is ready to merge
    Status {
        /// Pull request number
        pr_number: u64,

        /// Workflow filename to evaluate (defaults to the configured
        /// workflow, then ci.yml)
        #[arg(long)]
        workflow: Option<String>,

        /// Repository as OWNER/REPO (defaults to $GITHUB_REPOSITORY, then
        /// the config file)
        #[arg(long)]
        repo: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status {
            pr_number,
            workflow,
            repo,
        } => match cli::status::run_status(pr_number, workflow.as_deref(), repo.as_deref()).await {
            Ok(Overall::Ready) => ExitCode::SUCCESS,
            Ok(Overall::NotReady) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
