//! Runs the built binary against piped input.

#![allow(deprecated)] // Command::cargo_bin is deprecated in recent assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

fn registrar(stdin: impl Into<Vec<u8>>) -> assert_cmd::assert::Assert {
    Command::cargo_bin("registrar")
        .unwrap()
        .args(["--no-banner", "-q"])
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .write_stdin(stdin)
        .assert()
}

#[test]
fn exit_right_away() {
    registrar("exit\n")
        .success()
        .stdout(predicate::str::contains("STUDENT COURSE REGISTRATION SYSTEM"))
        .stdout(predicate::str::contains("Enter Password").not());
}

#[test]
fn empty_input_terminates_cleanly() {
    registrar("").success();
}

#[test]
fn student_sees_grade_given_by_teacher() {
    let script: &str = "\
s01 isha123
3
4
t01 sandesh123
2 s01 CSC101 A
3
s01 isha123
3
4
exit
";

    registrar(script)
        .success()
        .stdout(predicate::str::contains("No grades assigned yet."))
        .stdout(predicate::str::contains("Grade assigned successfully."))
        .stdout(predicate::str::contains("CSC101: A"));
}

#[test]
fn garbage_menu_choice_does_not_crash() {
    registrar("admin admin123\nfive\n6\nexit\n")
        .success()
        .stdout(predicate::str::contains("Invalid choice 'five'"));
}

#[test]
fn invalid_utf8_line_is_reported_and_skipped() {
    registrar(&b"admin admin123\n\xff\n5\n6\nexit\n"[..])
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("All Students:"));
}

#[test]
fn wrong_password_is_reported() {
    registrar("admin nope\nexit\n")
        .success()
        .stdout(predicate::str::contains("Invalid Credentials."));
}

#[test]
fn verbose_flag_shows_startup_log() {
    Command::cargo_bin("registrar")
        .unwrap()
        .args(["--no-banner", "-q", "-v"])
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded 5 courses, 2 teachers and 3 students"))
        .stderr(predicate::str::contains("session closed"));
}

#[test]
fn help_lists_flags() {
    Command::cargo_bin("registrar")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-banner"))
        .stdout(predicate::str::contains("--quiet"));
}
