use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const PEOPLE: &str = r#"[
  {"firstName": "Ana", "lastName": "Lee", "address": "1 Elm St", "phone": "555-0100"},
  {"firstName": "Bo", "lastName": "Ng", "address": "2 Oak Ave", "phone": "555-0101"},
  {"firstName": "Anab", "lastName": "Roy", "address": "3 Pine Rd", "phone": "555-0102"}
]"#;

fn write_people(dir: &Path) -> PathBuf {
    let path = dir.join("people.json");
    std::fs::write(&path, PEOPLE).unwrap();
    path
}

/// A command isolated from the user's real config and data.
fn dirsearch(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dirsearch").unwrap();
    cmd.env("DIRSEARCH_HOME", home)
        .env_remove("DIRSEARCH_DATA")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn test_search_matches_full_name_in_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["search", "an"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 people"))
        .stdout(predicate::str::contains("1. Ana Lee"))
        .stdout(predicate::str::contains("2. Anab Roy"))
        .stdout(predicate::str::contains("Bo Ng").not());
}

#[test]
fn test_search_spans_first_and_last_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .arg("--data")
        .arg(&data)
        .args(["search", "A", "L"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 person"))
        .stdout(predicate::str::contains("Ana Lee"));
}

#[test]
fn test_blank_query_differs_by_policy() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["--policy", "live", "search", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start typing to search."));

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["--policy", "submit", "search", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 people"));
}

#[test]
fn test_submit_without_enter_shows_everyone() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["--policy", "submit", "search", "--no-commit", "zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 people"));

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["--policy", "submit", "search", "zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found!"));
}

#[test]
fn test_show_prints_detail_card() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["show", "2", "an"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Anab Roy"))
        .stdout(predicate::str::contains("Location: 3 Pine Rd"))
        .stdout(predicate::str::contains("Contact Number: 555-0102"))
        .stdout(predicate::str::contains("Profile Image: Not available"));
}

#[test]
fn test_show_out_of_range_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["show", "3", "an"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No result at index 3 (2 shown)"));
}

#[test]
fn test_list_uses_bundled_sample_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    dirsearch(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 people"))
        .stdout(predicate::str::contains("1. Aarav Sharma"));
}

#[test]
fn test_interactive_session_over_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .write_stdin("an\n:view 1\n:close\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching 3 people (live mode)"))
        .stdout(predicate::str::contains("2. Anab Roy"))
        .stdout(predicate::str::contains("Name: Ana Lee"));
}

#[test]
fn test_config_policy_is_used_by_later_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_people(temp_dir.path());

    dirsearch(temp_dir.path())
        .args(["config", "policy", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("policy set to submit"));

    dirsearch(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("policy = submit"));

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .args(["search", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 people"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    dirsearch(temp_dir.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_bad_data_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("broken.json");
    std::fs::write(&data, "{ not a list").unwrap();

    dirsearch(temp_dir.path())
        .env("DIRSEARCH_DATA", &data)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_set_repairs_broken_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();

    dirsearch(temp_dir.path())
        .args(["config", "policy", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("policy set to submit"));

    dirsearch(temp_dir.path())
        .args(["config", "policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("policy = submit"));
}
