//! Status command - report a PR's merge readiness

use crate::cli::context::CommandContext;
use crate::cli::style::Stylize;
use anstream::println;
use pr_verdict::error::Result;
use pr_verdict::status::{evaluate_pr, render_report};
use pr_verdict::types::{AggregateStatus, Overall};

/// Run the status command
///
/// Returns the overall verdict; the caller maps it to the process exit
/// code (0 = ready, 1 = not ready).
pub async fn run_status(
    pr_number: u64,
    workflow: Option<&str>,
    repo: Option<&str>,
) -> Result<Overall> {
    let ctx = CommandContext::new(repo, workflow)?;

    let evaluation = evaluate_pr(ctx.platform.as_ref(), pr_number, &ctx.workflow).await?;

    println!(
        "{} {}",
        format!("PR #{}:", evaluation.details.number).emphasis(),
        evaluation.details.title
    );
    println!(
        "{}",
        format!(
            "branch {}, workflow {}",
            evaluation.details.head_ref, ctx.workflow
        )
        .muted()
    );
    println!();

    print_report(&evaluation.status);

    Ok(evaluation.status.overall)
}

/// Print the rendered report, coloring the final verdict line
fn print_report(status: &AggregateStatus) {
    let report = render_report(status);
    let mut lines: Vec<&str> = report.lines().collect();
    let verdict = lines.pop().unwrap_or_default();

    for line in &lines {
        println!("{line}");
    }
    if status.overall == Overall::Ready {
        println!("{}", verdict.success());
    } else {
        println!("{}", verdict.warn());
    }
}
