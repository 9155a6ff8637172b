//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `gradebook` command isolated inside `dir`: no ambient config, no
/// environment override of the data file.
fn gradebook(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("GRADEBOOK_DATA_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("book.json")
}

fn run_ok(dir: &TempDir, args: &[&str]) {
    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(dir))
        .args(args)
        .assert()
        .success();
}

fn seed(dir: &TempDir) {
    run_ok(
        dir,
        &["add-student", "--email", "a@x.com", "--first-name", "Ann", "--last-name", "Lee"],
    );
    run_ok(
        dir,
        &["add-student", "--email", "b@x.com", "--first-name", "Bob", "--last-name", "Ray"],
    );
    run_ok(dir, &["add-course", "--name", "Algebra", "--term", "Fall", "--credits", "3"]);
    run_ok(dir, &["enroll", "--email", "a@x.com", "--course", "Algebra"]);
    run_ok(dir, &["enroll", "--email", "b@x.com", "--course", "Algebra"]);
    run_ok(
        dir,
        &["grade", "--email", "a@x.com", "--course", "Algebra", "--grade", "90"],
    );
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student record manager"));
}

#[test]
fn ann_lee_transcript() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["transcript", "--email", "a@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript for Ann Lee (a@x.com)"))
        .stdout(predicate::str::contains("GPA: 90.00"))
        .stdout(predicate::str::contains("Algebra: 90"));

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["transcript", "--email", "b@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra: Not graded"));
}

#[test]
fn enroll_unknown_student_fails_without_changes() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let before = std::fs::read_to_string(data_file(&dir)).unwrap();

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["enroll", "--email", "ghost@x.com", "--course", "Algebra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("student not found: ghost@x.com"));

    let after = std::fs::read_to_string(data_file(&dir)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn duplicate_student_is_rejected() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["add-student", "--email", "a@x.com", "--first-name", "X", "--last-name", "Y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("student already exists"));
}

#[test]
fn grade_out_of_scale_is_rejected() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["grade", "--email", "b@x.com", "--course", "Algebra", "--grade", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid grade 150"));
}

#[test]
fn non_numeric_grade_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .args(["grade", "--email", "a@x.com", "--course", "Algebra", "--grade", "A+"])
        .assert()
        .failure();
}

#[test]
fn rank_orders_by_gpa() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    run_ok(
        &dir,
        &["grade", "--email", "b@x.com", "--course", "Algebra", "--grade", "95"],
    );

    let output = gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["rank", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows[0]["email"], "b@x.com");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[1]["email"], "a@x.com");
}

#[test]
fn rank_text_table() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .arg("rank")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee"))
        .stdout(predicate::str::contains("90.00"));
}

#[test]
fn search_by_grade() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["search", "--course", "Algebra", "--grade", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee - a@x.com"))
        .stdout(predicate::str::contains("Bob").not());

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .args(["search", "--course", "Algebra", "--grade", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn courses_and_summary() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra"))
        .stdout(predicate::str::contains("Fall"));

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enrolled"))
        .stdout(predicate::str::contains("90.00"));
}

#[test]
fn empty_book_listing() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses yet."));
    assert!(!data_file(&dir).exists());
}

#[test]
fn unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .args(["courses", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn shell_session_saves_on_request() {
    let dir = TempDir::new().unwrap();

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .arg("shell")
        .write_stdin("2\nAlgebra\nFall\nx\n2\nAlgebra\nFall\n3\n9\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved data found."))
        .stdout(predicate::str::contains("invalid credits"))
        .stdout(predicate::str::contains("Data saved successfully."))
        .stdout(predicate::str::contains("Goodbye!"));

    gradebook(dir.path())
        .arg("--data-file")
        .arg(data_file(&dir))
        .arg("shell")
        .write_stdin("8\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data loaded successfully."))
        .stdout(predicate::str::contains("- Algebra (Fall, 3 credits)"));
}

#[test]
fn config_file_sets_data_file_and_scale() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("gradebook.toml"),
        "data_file = \"records/four_point.json\"\n\n[grade_scale]\nmax = 4.0\n",
    )
    .unwrap();

    let run = |args: &[&str]| gradebook(dir.path()).args(args).assert();

    run(&["add-student", "--email", "a@x.com", "--first-name", "Ann", "--last-name", "Lee"])
        .success();
    run(&["add-course", "--name", "Algebra", "--term", "Fall", "--credits", "3"]).success();
    run(&["enroll", "--email", "a@x.com", "--course", "Algebra"]).success();
    run(&["grade", "--email", "a@x.com", "--course", "Algebra", "--grade", "90"])
        .failure()
        .stderr(predicate::str::contains("between 0 and 4"));
    run(&["grade", "--email", "a@x.com", "--course", "Algebra", "--grade", "3.5"]).success();

    assert!(dir.path().join("records/four_point.json").exists());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    gradebook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created gradebook.toml"));
    assert!(dir.path().join("gradebook.toml").exists());

    gradebook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .args(["--config", "nope.toml", "courses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
