use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named group of file-glob patterns treated as one unit for
/// line-counting and linting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSet {
    /// Label printed as the report section header
    pub name: String,

    /// Glob patterns, relative to the project root
    pub globs: Vec<String>,
}

/// External program names. The report sequence is fixed; only the
/// binaries it shells out to are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Line counter invoked with the expanded file list
    #[serde(default = "default_line_counter")]
    pub line_counter: String,

    /// Static-analysis linter whose output ends in a rating line
    #[serde(default = "default_linter")]
    pub linter: String,

    /// Test runner invoked with coverage instrumentation enabled
    #[serde(default = "default_test_runner")]
    pub test_runner: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            line_counter: default_line_counter(),
            linter: default_linter(),
            test_runner: default_test_runner(),
        }
    }
}

/// Settings for the single test-run section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// Package name handed to the coverage instrumentation
    #[serde(default)]
    pub package: String,

    /// Globs searched for assertion statements (direct text search,
    /// independent of the test runner's own output)
    #[serde(default)]
    pub test_globs: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            test_globs: Vec::new(),
        }
    }
}

/// Full configuration for one report run. The target list is ordered and
/// immutable for the run; sections are rendered in exactly this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardConfig {
    #[serde(default)]
    pub targets: Vec<TargetSet>,

    #[serde(default)]
    pub tools: ToolConfig,

    #[serde(default)]
    pub tests: TestConfig,
}

impl ScorecardConfig {
    /// Load configuration for a project root. An explicit path must exist;
    /// the conventional `.scorecard.toml` is optional and absence falls
    /// back to defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let conventional = root.join(".scorecard.toml");
                if !conventional.exists() {
                    log::info!("no .scorecard.toml found, using default configuration");
                    return Ok(Self::default());
                }
                conventional
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

fn default_line_counter() -> String {
    "wc".to_string()
}

fn default_linter() -> String {
    "pylint".to_string()
}

fn default_test_runner() -> String {
    "nosetests".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_tools() {
        let tools = ToolConfig::default();
        assert_eq!(tools.line_counter, "wc");
        assert_eq!(tools.linter, "pylint");
        assert_eq!(tools.test_runner, "nosetests");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = indoc::indoc! {r#"
            [[targets]]
            name = "source files"
            globs = ["pelita/**/*.py"]

            [[targets]]
            name = "test files"
            globs = ["test/**/*.py"]

            [tools]
            linter = "ruff"

            [tests]
            package = "pelita"
            test_globs = ["test/**/*.py"]
        "#};

        let config: ScorecardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].name, "source files");
        assert_eq!(config.tools.linter, "ruff");
        // Unspecified tools keep their defaults
        assert_eq!(config.tools.line_counter, "wc");
        assert_eq!(config.tests.package, "pelita");
    }

    #[test]
    fn test_missing_conventional_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScorecardConfig::load(dir.path(), None).unwrap();
        assert!(config.targets.is_empty());
        assert_eq!(config.tools.line_counter, "wc");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".scorecard.toml");
        std::fs::write(&path, "targets = not valid toml").unwrap();
        assert!(ScorecardConfig::load(dir.path(), None).is_err());
    }
}
