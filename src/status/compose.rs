//! Verdict composition - merge the CI and review halves into one decision

use crate::types::{AggregateStatus, CiOutcome, Overall, ReviewVerdict};

/// Glyph for a passing line in the rendered report
const PASS_GLYPH: char = '\u{2713}'; // ✓
/// Glyph for a failing line in the rendered report
const FAIL_GLYPH: char = '\u{2717}'; // ✗

/// Compose the final aggregate status (PURE)
///
/// `Ready` iff CI passed and the review verdict is approving (LGTM or
/// COMMENTS). `NoRuns` and `InProgress` both force `NotReady` regardless
/// of review; there is no retry or polling here - each invocation is a
/// single point-in-time snapshot.
#[must_use]
pub fn compose(ci: CiOutcome, review: ReviewVerdict) -> AggregateStatus {
    let overall = if ci.is_green() && review.is_approving() {
        Overall::Ready
    } else {
        Overall::NotReady
    };

    AggregateStatus {
        ci,
        review,
        overall,
    }
}

/// Render the diagnostic report for an aggregate status (PURE)
///
/// One CI line (glyph, status, first line of detail in parentheses, then
/// any enumerated failing jobs), one review line, an issues block when the
/// review carried one, and the final verdict line.
#[must_use]
pub fn render_report(status: &AggregateStatus) -> String {
    let mut out = String::new();

    let ci_glyph = if status.ci.is_green() {
        PASS_GLYPH
    } else {
        FAIL_GLYPH
    };
    let mut detail_lines = status.ci.detail.lines();
    let summary = detail_lines.next().unwrap_or_default();
    out.push_str(&format!("{ci_glyph} CI: {} ({summary})\n", status.ci.status));
    for line in detail_lines {
        out.push_str(line);
        out.push('\n');
    }

    let review_glyph = if status.review.is_approving() {
        PASS_GLYPH
    } else {
        FAIL_GLYPH
    };
    out.push_str(&format!("{review_glyph} Review: {}\n", status.review));

    if let Some(issues) = status.review.issues() {
        out.push_str("  Issues:\n");
        for line in issues.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", status.overall));
    out
}
