use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("outlay").unwrap();
    cmd.env("OUTLAY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("categories"))
        .stdout(contains("config"));
}

#[test]
fn config_shows_paths_and_defaults() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("config.json"))
        .stdout(contains("audit.log"))
        .stdout(contains("Undo window:      4s"));
}

#[test]
fn categories_in_grid_order() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("1. [F] Food"))
        .stdout(contains("8. [G] Gifts"));
}

#[test]
fn init_writes_editable_settings() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Wrote settings"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"currency_symbol\": \"$\""));
}

#[test]
fn edited_categories_are_listed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "categories": [ { "title": "Coffee", "icon": "C" } ] }"#,
    )
    .unwrap();

    cmd(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("1. [C] Coffee"))
        .stdout(contains("Food").not());
}

#[test]
fn malformed_settings_fail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    cmd(&dir).arg("config").assert().failure();
}

#[test]
fn blank_category_title_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "categories": [ { "title": "Coffee" }, { "title": "" } ] }"#,
    )
    .unwrap();

    cmd(&dir)
        .arg("categories")
        .assert()
        .failure()
        .stderr(contains("Category #2"));
}

#[test]
fn log_with_no_entries() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(contains("No audit entries yet."));
}

#[test]
fn log_shows_newest_entries() {
    let dir = TempDir::new().unwrap();
    let lines = [
        r#"{"timestamp":"2024-06-14T09:00:00Z","operation":"create","entity_type":"expense","entity_id":"exp-1","entity_name":"Food"}"#,
        r#"{"timestamp":"2024-06-14T09:00:02Z","operation":"delete","entity_type":"expense","entity_id":"exp-1","entity_name":"Food"}"#,
        r#"{"timestamp":"2024-06-14T09:01:00Z","operation":"create","entity_type":"expense","entity_id":"exp-2","entity_name":"Transport"}"#,
    ];
    std::fs::write(dir.path().join("audit.log"), lines.join("\n") + "\n").unwrap();

    cmd(&dir)
        .args(["log", "-n", "2"])
        .assert()
        .success()
        .stdout(contains("DELETE Expense exp-1 (Food)"))
        .stdout(contains("CREATE Expense exp-2 (Transport)"))
        .stdout(contains("CREATE Expense exp-1").not());
}
