//! End-to-end tests of the archerymath binary.

use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn archerymath(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("archerymath").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("ARCHERYMATH_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_score_command() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(archerymath(&dir).args(["score", "-r", "wa1440_90", "--handicap", "1"]));
    assert_eq!(out.trim(), "AGB handicap 1 on a WA 1440 (90m): 1396");
}

#[test]
fn test_score_per_pass_with_scheme() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "score", "-r", "york", "--handicap", "50", "-s", "AGBold", "--per-pass",
    ]));
    assert!(out.starts_with("AGBold handicap 50 on a York:"));
    assert_eq!(out.lines().filter(|l| l.trim_start().starts_with("pass")).count(), 3);
}

#[test]
fn test_handicap_command() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "handicap", "-r", "wa720_70", "--score", "500", "--int-prec",
    ]));
    assert!(out.trim_end().ends_with("44"), "{}", out);
}

#[test]
fn test_table_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("table.csv");
    stdout_of(archerymath(&dir).args([
        "table",
        "-r",
        "wa1440_90,wa1440_70",
        "--from",
        "1",
        "--to",
        "3",
        "-f",
        "csv",
        "-o",
        path.to_str().unwrap(),
    ]));
    let written = fs::read_to_string(path).unwrap();
    assert_eq!(written.lines().nth(1), Some("1,1396,1412"));
}

#[test]
fn test_classify_command() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "classify",
        "-d",
        "outdoor",
        "-r",
        "wa1440_90",
        "--score",
        "1390",
        "--bowstyle",
        "compound",
        "--gender",
        "male",
    ]));
    assert!(out.trim_end().ends_with("1390: EMB"), "{}", out);
}

#[test]
fn test_age_command() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "age",
        "--birth-year",
        "2010",
        "--event-year",
        "2025",
    ]));
    assert!(out.trim_end().ends_with("under16"), "{}", out);
}

#[test]
fn test_rounds_filter_lists_loaded_rounds() {
    let dir = TempDir::new().unwrap();
    let rounds = dir.path().join("club.json");
    fs::write(
        &rounds,
        indoc! {r#"
            [
              {
                "codename": "club_short",
                "name": "Club Short",
                "location": "outdoor",
                "passes": [
                  {"n_arrows": 36, "scoring": "10_zone", "diameter": 80, "distance": 30, "dist_unit": "m"}
                ]
              }
            ]
        "#},
    )
    .unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "--round-file",
        rounds.to_str().unwrap(),
        "rounds",
        "--filter",
        "club",
    ]));
    assert!(out.contains("club_short"));
    assert!(!out.contains("york"));
}

#[test]
fn test_table_csv_quotes_custom_round_names() {
    let dir = TempDir::new().unwrap();
    let rounds = dir.path().join("club.json");
    fs::write(
        &rounds,
        indoc! {r#"
            [
              {
                "codename": "club_long",
                "name": "Club, Long",
                "location": "outdoor",
                "passes": [
                  {"n_arrows": 36, "scoring": "10_zone", "diameter": 122, "distance": 50, "dist_unit": "m"}
                ]
              }
            ]
        "#},
    )
    .unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "--round-file",
        rounds.to_str().unwrap(),
        "table",
        "-r",
        "club_long",
        "--from",
        "10",
        "--to",
        "12",
        "-f",
        "csv",
    ]));
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("handicap,\"Club, Long\""));
    assert!(lines
        .filter(|line| !line.is_empty())
        .all(|line| line.split(',').count() == 2));
}

#[test]
fn test_classify_old_outdoor() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(archerymath(&dir).args([
        "classify", "-d", "old-outdoor", "-r", "york", "--score", "1000", "--bowstyle",
        "recurve", "--gender", "male",
    ]));
    assert!(out.trim_end().ends_with("1000: B"), "{}", out);
}

#[test]
fn test_init_then_config_is_used() {
    let dir = TempDir::new().unwrap();
    stdout_of(archerymath(&dir).arg("init"));
    let config = dir.path().join(".archerymath.toml");
    assert!(config.exists());

    let contents = fs::read_to_string(&config).unwrap();
    fs::write(&config, contents.replace("scheme = \"AGB\"", "scheme = \"AA\"")).unwrap();
    let out = stdout_of(archerymath(&dir).args(["score", "-r", "wa1440_90", "--handicap", "100"]));
    assert!(out.starts_with("AA handicap 100"), "{}", out);

    let second = archerymath(&dir).arg("init").output().unwrap();
    assert!(!second.status.success());
}

#[test]
fn test_unknown_round_fails() {
    let dir = TempDir::new().unwrap();
    let output = archerymath(&dir)
        .args(["score", "-r", "nope", "--handicap", "10"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}
