//! The `report` subcommand: run the fixed analysis sequence and render
//! the summary.
//!
//! Control flow is strictly linear. Each target set gets a line count and
//! a lint score; the test run with coverage happens once at the end. The
//! three analyses are data-independent but still run back-to-back, each
//! blocking until its tool exits.

use crate::config::ScorecardConfig;
use crate::extract;
use crate::report::{Report, Section};
use crate::tools::ToolRunner;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct ReportConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn run(config: ReportConfig) -> Result<()> {
    if config.plain {
        colored::control::set_override(false);
    }

    let scorecard = ScorecardConfig::load(&config.path, config.config.as_deref())?;
    let runner = ToolRunner::new(&config.path);
    let report = generate_report(&runner, &scorecard);
    let output = report.render();

    if let Some(path) = config.output {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
    } else {
        print!("{output}");
    }
    Ok(())
}

/// Build the report: one section per target set, then the single test
/// section. Sections appear in configuration order; a failed or missing
/// tool degrades to blank fields, never to an aborted run.
pub fn generate_report(runner: &ToolRunner, config: &ScorecardConfig) -> Report {
    let mut report = Report::default();

    for target in &config.targets {
        log::info!("analyzing target set: {}", target.name);
        let files = runner.expand_globs(&target.globs);

        let lines = count_lines(runner, &config.tools.line_counter, &files);
        let rating = lint_score(runner, &config.tools.linter, &files);

        report.push(
            Section::new(target.name.clone())
                .field("lines", lines)
                .field("lint score", rating),
        );
    }

    if let Some(section) = test_section(runner, config) {
        report.push(section);
    }

    report
}

fn count_lines(runner: &ToolRunner, line_counter: &str, files: &[PathBuf]) -> String {
    let mut args: Vec<OsString> = vec!["-l".into()];
    args.extend(files.iter().map(OsString::from));
    let output = runner.run_captured(line_counter, &args);
    extract::line_total(&output)
}

fn lint_score(runner: &ToolRunner, linter: &str, files: &[PathBuf]) -> String {
    let args: Vec<OsString> = files.iter().map(OsString::from).collect();
    let output = runner.run_captured(linter, &args);
    extract::lint_rating(&output)
}

/// The test run happens once, not per target set, and only when a
/// coverage package is configured.
fn test_section(runner: &ToolRunner, config: &ScorecardConfig) -> Option<Section> {
    if config.tests.package.is_empty() {
        log::info!("no test package configured, skipping test section");
        return None;
    }

    log::info!("running test suite with coverage");
    let args: Vec<OsString> = vec![
        "--with-coverage".into(),
        format!("--cover-package={}", config.tests.package).into(),
    ];
    let output = runner.run_captured(&config.tools.test_runner, &args);

    let test_files = runner.expand_globs(&config.tests.test_globs);
    let assertions = extract::count_assertions(runner.root(), &test_files);

    Some(
        Section::new("test suite")
            .field("tests run", extract::test_count(&output))
            .field("assertions", assertions)
            .field("coverage", extract::coverage_total(&output))
            .field("result", extract::final_line(&output)),
    )
}
