#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const RULES: &str = r#"action_keywords:
  - follow up
  - "action:"
action_prefixes:
  - "TODO:"
"#;

const HEADER: &str = "action,owner,due_date,account,priority,confidence,source_line";

fn actions(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("extract-actions").unwrap();
    cmd.current_dir(dir.path())
        .env("ACTIONS_ROOT", dir.path())
        .env_remove("ACTIONS_CONFIG")
        .env_remove("ACTIONS_INPUT")
        .env_remove("ACTIONS_OUTPUT");
    cmd
}

fn write(dir: &TempDir, rel: &str, contents: &str) {
    let path = dir.path().join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn setup(notes: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(&dir, "config/action_rules.yaml", RULES);
    write(&dir, "data/notes.txt", notes);
    dir
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// ---------------------------------------------------------------------------
// extract-actions run
// ---------------------------------------------------------------------------

#[test]
fn run_extracts_fields_into_csv() {
    let dir = setup(
        "Action: Send proposal. Owner: Jane Doe) Due: 2024-03-01 P2 Account: Acme Corp - renewal\n\
         just a regular note\n",
    );
    actions(&dir)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 actions to"));

    let mut rdr = csv::Reader::from_path(dir.path().join("data/actions.csv")).unwrap();
    assert_eq!(rdr.headers().unwrap().iter().collect::<Vec<_>>().join(","), HEADER);
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].iter().collect::<Vec<_>>(),
        vec![
            "Action: Send proposal. Owner: Jane Doe) Due: 2024-03-01 P2 Account: Acme Corp - renewal",
            "Jane Doe",
            "2024-03-01",
            "Acme Corp",
            "P2",
            "High",
            "1",
        ]
    );
}

#[test]
fn run_on_empty_notes_writes_header_only() {
    let dir = setup("");
    actions(&dir)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 0 actions"));
    assert_eq!(read(&dir.path().join("data/actions.csv")), format!("{HEADER}\n"));
}

#[test]
fn run_preserves_order_and_line_numbers() {
    let dir = setup("TODO: first\nnoise\n\nplease follow up P3\nTODO: first\n");
    actions(&dir).arg("run").assert().success();

    let mut rdr = csv::Reader::from_path(dir.path().join("data/actions.csv")).unwrap();
    let lines: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap().get(6).unwrap().to_string())
        .collect();
    assert_eq!(lines, vec!["1", "4", "5"]);
}

#[test]
fn run_splits_carriage_return_and_form_feed_lines() {
    let dir = setup("TODO: a\rTODO: b\rnote\x0cTODO: c\r");
    actions(&dir)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 actions"));

    let mut rdr = csv::Reader::from_path(dir.path().join("data/actions.csv")).unwrap();
    let rows: Vec<(String, String)> = rdr
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r.get(0).unwrap().to_string(), r.get(6).unwrap().to_string())
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("TODO: a".to_string(), "1".to_string()),
            ("TODO: b".to_string(), "2".to_string()),
            ("TODO: c".to_string(), "4".to_string()),
        ]
    );
}

#[test]
fn run_overwrites_previous_output() {
    let dir = setup("TODO: only one\n");
    write(&dir, "data/actions.csv", "stale,contents\nmore\nrows\nhere\n");
    actions(&dir).arg("run").assert().success();
    assert_eq!(read(&dir.path().join("data/actions.csv")).lines().count(), 2);
}

#[test]
fn run_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config/action_rules.yaml", RULES);

    actions(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing input file"));
    assert!(!dir.path().join("data/actions.csv").exists());
}

#[test]
fn run_missing_input_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config/action_rules.yaml", RULES);
    write(&dir, "data/actions.csv", "from last week\n");

    actions(&dir).arg("run").assert().failure();
    assert_eq!(read(&dir.path().join("data/actions.csv")), "from last week\n");
}

#[test]
fn run_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "data/notes.txt", "TODO: x\n");

    actions(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing config file"));
    assert!(!dir.path().join("data/actions.csv").exists());
}

#[test]
fn run_malformed_config_fails() {
    let dir = setup("TODO: x\n");
    write(&dir, "config/action_rules.yaml", "action_keywords: follow up\n");

    actions(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
    assert!(!dir.path().join("data/actions.csv").exists());
}

#[test]
fn run_with_explicit_paths() {
    let dir = TempDir::new().unwrap();
    write(&dir, "rules.yaml", "action_prefixes: [\"- [ ]\"]\n");
    write(&dir, "inbox/monday.txt", "- [ ] file expenses Owner: Kim)\n- [x] done\n");

    actions(&dir)
        .args([
            "--config",
            "rules.yaml",
            "run",
            "--input",
            "inbox/monday.txt",
            "--output",
            "reports/monday.csv",
        ])
        .assert()
        .success();

    let out = read(&dir.path().join("reports/monday.csv"));
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("- [ ] file expenses Owner: Kim),Kim,,,,High,1"));
}

#[test]
fn run_reads_paths_from_env() {
    let dir = TempDir::new().unwrap();
    write(&dir, "rules.yaml", RULES);
    write(&dir, "notes.md", "follow up with Dana\n");

    actions(&dir)
        .env("ACTIONS_CONFIG", "rules.yaml")
        .env("ACTIONS_INPUT", "notes.md")
        .env("ACTIONS_OUTPUT", "out.csv")
        .arg("run")
        .assert()
        .success();
    assert!(read(&dir.path().join("out.csv")).contains("follow up with Dana"));
}

#[test]
fn run_json_prints_summary() {
    let dir = setup("TODO: a\nTODO: b\n");
    let out = actions(&dir)
        .args(["run", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["records"], 2);
    assert!(value["output"].as_str().unwrap().ends_with("actions.csv"));
}

#[test]
fn run_dry_run_does_not_write() {
    let dir = setup("TODO: call Acme Owner: Raj) P1\n");
    actions(&dir)
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confidence"))
        .stdout(predicate::str::contains("Raj"));
    assert!(!dir.path().join("data/actions.csv").exists());
}

#[test]
fn run_dry_run_json_lists_records() {
    let dir = setup("note\nTODO: call Acme P1\n");
    let out = actions(&dir)
        .args(["run", "--dry-run", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["priority"], "P1");
    assert_eq!(records[0]["source_line"], 2);
    assert_eq!(records[0]["confidence"], "High");
}

#[test]
fn run_word_boundary_config() {
    let dir = setup("Preview the slides\nreview the slides\n");
    write(
        &dir,
        "config/action_rules.yaml",
        "word_boundary: true\naction_keywords: [review]\n",
    );
    actions(&dir).arg("run").assert().success();

    let out = read(&dir.path().join("data/actions.csv"));
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("review the slides,,,,,Medium,2"));
}

// ---------------------------------------------------------------------------
// extract-actions check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_match_and_fields() {
    let dir = setup("");
    actions(&dir)
        .args(["check", "TODO:", "ship", "it", "Due:", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matched prefix 'TODO:'"))
        .stdout(predicate::str::contains("2024-06-01"));
}

#[test]
fn check_reports_non_action() {
    let dir = setup("");
    actions(&dir)
        .args(["check", "just a regular note"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not an action"));
}

#[test]
fn check_json() {
    let dir = setup("");
    let out = actions(&dir)
        .args(["--json", "check", "Will follow up (Owner: Mo)"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["is_action"], true);
    assert_eq!(value["matched"]["rule"], "keyword");
    assert_eq!(value["matched"]["value"], "follow up");
    assert_eq!(value["record"]["owner"], "Mo");
}

// ---------------------------------------------------------------------------
// extract-actions config
// ---------------------------------------------------------------------------

#[test]
fn config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    actions(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default rules"));
    assert!(dir.path().join("config/action_rules.yaml").exists());

    actions(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = setup("");
    actions(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(read(&dir.path().join("config/action_rules.yaml")), RULES);
}

#[test]
fn config_validate_fails_on_blank_keyword() {
    let dir = setup("");
    write(
        &dir,
        "config/action_rules.yaml",
        "action_keywords:\n  - send\n  - \"\"\n",
    );
    actions(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] action_keywords[1]"));
}

#[test]
fn config_show_lists_rules() {
    let dir = setup("");
    actions(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"follow up\""))
        .stdout(predicate::str::contains("\"TODO:\""));
}
