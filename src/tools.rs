//! External command invocation.
//!
//! Every analysis in the report is produced by shelling out to a
//! pre-configured external tool and scanning its captured output. The
//! runner never treats a tool failure as fatal: a missing binary or a
//! failed spawn yields empty output and a warning, so the corresponding
//! report fields render blank instead of aborting the run.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs external analysis tools from a fixed working directory.
pub struct ToolRunner {
    root: PathBuf,
}

impl ToolRunner {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Invoke `program` with `args`, blocking until it exits, and return
    /// its combined stdout and stderr. Test runners write their summary
    /// to stderr, so both streams feed the extractors.
    ///
    /// A non-zero exit status is not an error: linters exit non-zero on
    /// findings and test runners on failing tests, and their output is
    /// still the report's input.
    pub fn run_captured<S: AsRef<OsStr>>(&self, program: &str, args: &[S]) -> String {
        if which::which(program).is_err() {
            log::warn!("tool not found in PATH, section will be blank: {program}");
            return String::new();
        }

        let output = match Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::warn!("failed to run {program}: {e}");
                return String::new();
            }
        };

        if !output.status.success() {
            log::debug!("{program} exited with {}", output.status);
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        combined
    }

    /// Expand a target set's glob patterns into a file list, relative to
    /// the project root, in pattern order. An unmatched pattern simply
    /// contributes nothing.
    pub fn expand_globs(&self, globs: &[String]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for pattern in globs {
            let absolute = self.root.join(pattern);
            let Some(pattern_str) = absolute.to_str() else {
                log::warn!("skipping non-UTF-8 glob pattern: {}", absolute.display());
                continue;
            };
            match glob::glob(pattern_str) {
                Ok(paths) => {
                    for entry in paths {
                        match entry {
                            Ok(path) if path.is_file() => {
                                // Tools run with cwd at the root, so hand
                                // them root-relative paths.
                                let relative = path
                                    .strip_prefix(&self.root)
                                    .map(Path::to_path_buf)
                                    .unwrap_or(path);
                                files.push(relative);
                            }
                            Ok(_) => {}
                            Err(e) => log::warn!("glob error under {pattern}: {e}"),
                        }
                    }
                }
                Err(e) => log::warn!("invalid glob pattern {pattern}: {e}"),
            }
        }
        files
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
