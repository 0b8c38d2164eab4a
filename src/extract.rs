//! Field extraction from captured tool output.
//!
//! Each extractor scans the free-form text a tool printed and pulls out
//! one scalar field. Extraction cannot fail, it can only not match: every
//! function returns a `String`, empty when the expected text is absent.
//! The report does not distinguish "tool failed" from "tool found nothing
//! to report".

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn rating_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Your code has been rated at (-?\d+(?:\.\d+)?)/10").unwrap()
    })
}

fn ran_tests_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Ran (\d+) tests?").unwrap())
}

fn coverage_total_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^TOTAL\b.*?(\d+%)\s*$").unwrap())
}

fn leading_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)").unwrap())
}

fn assertion_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bassert").unwrap())
}

/// Numeric rating token from the linter's fixed summary phrase,
/// e.g. `8.42` out of `Your code has been rated at 8.42/10 (...)`.
pub fn lint_rating(output: &str) -> String {
    capture_first(rating_re(), output)
}

/// Test count from the runner's `Ran N tests` line.
pub fn test_count(output: &str) -> String {
    capture_first(ran_tests_re(), output)
}

/// Trailing percentage of the coverage table's `TOTAL` row.
pub fn coverage_total(output: &str) -> String {
    capture_first(coverage_total_re(), output)
}

/// The last non-empty output line verbatim: the runner's overall
/// pass/fail summary.
pub fn final_line(output: &str) -> String {
    output
        .lines()
        .rev()
        .map(str::trim_end)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Trailing total from line-counter output: the leading count on the
/// final line. With multiple input files that line is the `N total` row;
/// with a single file it is the file's own count.
pub fn line_total(output: &str) -> String {
    output
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map(|line| capture_first(leading_count_re(), line))
        .unwrap_or_default()
}

/// Count assertion statements across test files by direct text search.
/// Computed from the files themselves, not from the test runner's output.
/// Unreadable files contribute nothing.
pub fn count_assertions(root: &Path, files: &[PathBuf]) -> String {
    let total: usize = files
        .iter()
        .map(|file| {
            let path = root.join(file);
            match fs::read_to_string(&path) {
                Ok(content) => assertion_re().find_iter(&content).count(),
                Err(e) => {
                    log::warn!("cannot read {} for assertion count: {e}", path.display());
                    0
                }
            }
        })
        .sum();
    total.to_string()
}

fn capture_first(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
