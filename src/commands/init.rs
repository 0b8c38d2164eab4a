use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".scorecard.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Scorecard Configuration

[[targets]]
name = "source files"
globs = ["src/**/*.py"]

[[targets]]
name = "test files"
globs = ["test/**/*.py"]

[[targets]]
name = "all files"
globs = ["src/**/*.py", "test/**/*.py"]

[tools]
line_counter = "wc"
linter = "pylint"
test_runner = "nosetests"

[tests]
package = "src"
test_globs = ["test/**/*.py"]
"#;

    fs::write(&config_path, default_config)?;
    println!("Created .scorecard.toml configuration file");

    Ok(())
}
