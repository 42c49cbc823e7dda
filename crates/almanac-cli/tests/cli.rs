use assert_cmd::Command;
use predicates::prelude::*;

fn almanac() -> Command {
    Command::cargo_bin("almanac").unwrap()
}

#[test]
fn show_text() {
    almanac()
        .args(["show", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01 (Monday)"))
        .stdout(predicate::str::contains("day number:  2460311"))
        .stdout(predicate::str::contains("ISO week:    2024-W01"));
}

#[test]
fn show_json() {
    let output = almanac()
        .args(["show", "2023-01-01", "--json", "--lang", "de"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["date"], "2023-01-01");
    assert_eq!(value["weekday"], "Sonntag");
    assert_eq!(value["day_of_year"], 1);
    assert_eq!(value["iso_week"]["year"], 2022);
    assert_eq!(value["iso_week"]["week"], 52);
}

#[test]
fn add_negative_days() {
    almanac()
        .args(["add", "2024-03-01", "-1"])
        .assert()
        .success()
        .stdout("2024-02-29 (Thursday)\n");
}

#[test]
fn between_dates() {
    almanac()
        .args(["between", "2024-01-01", "2025-01-01"])
        .assert()
        .success()
        .stdout("366\n");
}

#[test]
fn easter_in_norwegian() {
    almanac()
        .args(["easter", "2024", "--lang", "nb"])
        .assert()
        .success()
        .stdout("2024-03-31 (Søndag 31. Mars)\n");
}

#[test]
fn week_of_date() {
    almanac()
        .args(["week", "2024-12-30"])
        .assert()
        .success()
        .stdout("2025-W01\n");
}

#[test]
fn format_template() {
    almanac()
        .args(["format", "%Y-%m-%d is a %A, %Z stays", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout("2024-01-01 is a Monday, %Z stays\n");
}

#[test]
fn format_uses_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("almanac.toml");
    std::fs::write(&path, "language = \"sv\"\nformat = \"%_A %e %_B\"\n").unwrap();

    almanac()
        .args(["format", "--date", "2024-03-04", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("måndag 4 mars\n");

    // --lang wins over the config language
    almanac()
        .args(["format", "--date", "2024-03-04", "--lang", "en", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("monday 4 march\n");
}

#[test]
fn invalid_date_fails() {
    almanac()
        .args(["show", "2023-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date argument '2023-02-30'"))
        .stderr(predicate::str::contains("Illegal date"));
}

#[test]
fn malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "unknown = 1\n").unwrap();

    almanac()
        .args(["week", "2024-01-01", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse TOML config"));
}

#[test]
fn unknown_config_language_falls_back_to_english() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("almanac.toml");
    std::fs::write(&path, "language = \"fr\"\n").unwrap();

    almanac()
        .args(["format", "%A", "--date", "2024-01-01", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Monday\n");
}

#[test]
fn config_language_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("almanac.toml");
    std::fs::write(&path, "language = \"DE\"\n").unwrap();

    almanac()
        .args(["format", "%A", "--date", "2024-01-01", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Montag\n");
}
