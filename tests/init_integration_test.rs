use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("scorecard")
        .unwrap()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join(".scorecard.toml")).unwrap();
    assert!(content.contains("[[targets]]"));
    assert!(content.contains("line_counter"));

    // The generated file must parse back into a valid configuration
    let parsed = scorecard::ScorecardConfig::load(dir.path(), None).unwrap();
    assert_eq!(parsed.targets.len(), 3);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".scorecard.toml"), "# existing\n").unwrap();

    Command::cargo_bin("scorecard")
        .unwrap()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure();

    let content = fs::read_to_string(dir.path().join(".scorecard.toml")).unwrap();
    assert_eq!(content, "# existing\n");
}

#[test]
fn test_init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".scorecard.toml"), "# existing\n").unwrap();

    Command::cargo_bin("scorecard")
        .unwrap()
        .arg("init")
        .arg("--force")
        .current_dir(dir.path())
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join(".scorecard.toml")).unwrap();
    assert!(content.contains("[[targets]]"));
}
