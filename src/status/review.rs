//! Review verdict scanning - a small, explicit grammar over comment bodies
//!
//! The scanner walks the PR's comment history from newest to oldest and
//! stops at the first body containing a recognized verdict marker. Within
//! one body, markers are tested in fixed priority order: LGTM, then
//! CHANGES_REQUESTED, then COMMENTS. Comments without any marker are
//! skipped silently; an empty or markerless history yields `NoReview`.

use crate::types::{PrComment, ReviewVerdict};
use regex::Regex;
use std::sync::LazyLock;

/// Approval marker
const LGTM_MARKER: &str = "LGTM";
/// Blocking-review marker
const CHANGES_REQUESTED_MARKER: &str = "CHANGES_REQUESTED";
/// Non-blocking-review marker
const COMMENTS_MARKER: &str = "COMMENTS";
/// Glyph prefixing standalone flagged-issue lines
const ISSUE_LINE_MARKER: char = '\u{274c}'; // ❌

/// Matches a Markdown "Problems" heading at any level
static PROBLEMS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#{1,6}\s*problems\b").expect("valid regex"));

/// Matches any Markdown heading
static ANY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").expect("valid regex"));

/// Scan the comment history for the authoritative review verdict (PURE)
///
/// `comments` must be in chronological (oldest-first) order, as the
/// platform returns them. Once a body matches any marker, older comments
/// are never consulted.
#[must_use]
pub fn scan_review(comments: &[PrComment]) -> ReviewVerdict {
    for comment in comments.iter().rev() {
        if comment.body.contains(LGTM_MARKER) {
            return ReviewVerdict::Lgtm;
        }
        if comment.body.contains(CHANGES_REQUESTED_MARKER) {
            return ReviewVerdict::ChangesRequested {
                issues: extract_issues(&comment.body),
            };
        }
        if comment.body.contains(COMMENTS_MARKER) {
            return ReviewVerdict::Comments;
        }
    }
    ReviewVerdict::NoReview
}

/// Extract the itemized issues from a changes-requested comment
///
/// Prefers a delimited "Problems" section: everything between a Problems
/// heading and the next heading that is not itself a Problems heading.
/// Falls back to standalone lines prefixed with the flagged-issue glyph.
/// Neither found means no issues block, not an error.
fn extract_issues(body: &str) -> Option<String> {
    problems_section(body).or_else(|| flagged_lines(body))
}

fn problems_section(body: &str) -> Option<String> {
    let mut section = Vec::new();
    let mut in_section = false;

    for line in body.lines() {
        if PROBLEMS_HEADING.is_match(line) {
            in_section = true;
            continue;
        }
        if in_section && ANY_HEADING.is_match(line) {
            break;
        }
        if in_section {
            section.push(line);
        }
    }

    if !in_section {
        return None;
    }

    let text = section.join("\n").trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

fn flagged_lines(body: &str) -> Option<String> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with(ISSUE_LINE_MARKER))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
