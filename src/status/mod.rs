//! Merge-readiness resolution
//!
//! The four stages - resolve the latest run, aggregate its jobs, scan the
//! comment thread for a review verdict, compose both halves into one
//! decision - are pure functions over typed data, unit-testable with
//! canned values. Only [`evaluate_pr`] performs I/O, fetching each stage's
//! input through the platform service.

mod compose;
mod evaluate;
mod jobs;
mod resolve;
mod review;

pub use compose::{compose, render_report};
pub use evaluate::{PrEvaluation, evaluate_pr};
pub use jobs::aggregate_jobs;
pub use resolve::{RunResolution, resolve_run};
pub use review::scan_review;
