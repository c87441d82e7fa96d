//! Integration tests for the asu CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const HELLO: &[u8] = b"Hello, World!\n";

fn asu() -> Command {
    Command::cargo_bin("asu").unwrap()
}

#[test]
fn test_help_command() {
    asu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AppleSingle utility"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_version_command() {
    asu()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("asu"));
}

#[test]
fn test_invalid_command() {
    asu()
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_create_then_info() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("hello.txt");
    let archive = dir.path().join("hello.as");
    fs::write(&data, HELLO).unwrap();

    asu()
        .arg("create")
        .arg("--data-fork")
        .arg(&data)
        .args(["--filetype", "TXT", "--auxtype", "$0000"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    asu()
        .arg("info")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Real Name: HELLO.TXT"))
        .stdout(predicate::str::contains("File Type: 0x04"))
        .stdout(predicate::str::contains("Data Fork: Present, 14 bytes"))
        .stdout(predicate::str::contains("Resource Fork: Not present"));
}

#[test]
fn test_create_from_stdin_to_stdout() {
    let output = asu()
        .args(["create", "--stdout", "--stdin-fork", "data", "--name", "piped"])
        .write_stdin(HELLO)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(&output[..4], &[0x00, 0x05, 0x16, 0x00]);
    asu()
        .args(["info", "--stdin"])
        .write_stdin(output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Real Name: PIPED"));
}

#[test]
fn test_create_requires_fork() {
    asu()
        .args(["create", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select at least one fork type"));
}

#[test]
fn test_create_rejects_bad_name() {
    asu()
        .args(["create", "--stdout", "--stdin-fork", "data", "--name", "123"])
        .write_stdin(HELLO)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_extract_with_fix_text() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("hello.txt");
    let archive = dir.path().join("hello.as");
    fs::write(&data, HELLO).unwrap();

    asu()
        .arg("create")
        .arg("--fix-text")
        .arg("--data-fork")
        .arg(&data)
        .arg(&archive)
        .assert()
        .success();

    asu()
        .args(["extract", "--stdout", "--fix-text"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(HELLO);

    let base = dir.path().join("out");
    asu()
        .arg("extract")
        .arg("-o")
        .arg(&base)
        .arg(&archive)
        .assert()
        .success();
    let raw = fs::read(dir.path().join("out.data")).unwrap();
    assert!(raw.iter().all(|b| b & 0x80 != 0));
}

#[test]
fn test_extract_keeps_real_name_inside_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let work = dir.path().join("work");
    fs::create_dir(&work).unwrap();

    let archive = applesingle::write_entries(&[
        applesingle::Entry::real_name(b"../escaped".to_vec()),
        applesingle::Entry::data_fork(b"pwned".to_vec()),
    ])
    .unwrap();
    fs::write(work.join("evil.as"), archive).unwrap();

    asu()
        .current_dir(&work)
        .args(["extract", "evil.as"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'escaped.data'"));

    assert!(!dir.path().join("escaped.data").exists());
    assert_eq!(fs::read(work.join("escaped.data")).unwrap(), b"pwned");
}

#[test]
fn test_extract_missing_resource_fork() {
    let archive = asu()
        .args(["create", "--stdout", "--stdin-fork", "data", "--name", "a"])
        .write_stdin(HELLO)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    asu()
        .args(["extract", "--stdin", "--stdout", "--fork", "resource"])
        .write_stdin(archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data in the resource fork"));
}

#[test]
fn test_edit_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("prog");
    let archive = dir.path().join("prog.as");
    fs::write(&data, [0x60]).unwrap();

    asu()
        .arg("create")
        .arg("--data-fork")
        .arg(&data)
        .arg(&archive)
        .assert()
        .success();

    asu()
        .args([
            "edit",
            "--auxtype",
            "0x0803",
            "--backup-date",
            "2007-12-03T10:15:30Z",
        ])
        .arg(&archive)
        .assert()
        .success();

    asu()
        .arg("info")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Real Name: PROG"))
        .stdout(predicate::str::contains("Auxtype: 0x0803"))
        .stdout(predicate::str::contains("Backup: 2007-12-03T10:15:30+00:00"));
}

#[test]
fn test_filter_removes_entries() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("hello.txt");
    let archive = dir.path().join("hello.as");
    let filtered = dir.path().join("filtered.as");
    fs::write(&data, HELLO).unwrap();

    asu()
        .arg("create")
        .arg("--data-fork")
        .arg(&data)
        .arg(&archive)
        .assert()
        .success();

    asu()
        .args(["filter", "--msdos", "--exclude", "8"])
        .arg("-o")
        .arg(&filtered)
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed the following entries:"))
        .stdout(predicate::str::contains("- ProDOS File Info"))
        .stdout(predicate::str::contains("- File Dates Info"));

    asu()
        .args(["analyze"])
        .arg(&filtered)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries = 2"))
        .stdout(predicate::str::contains("The entirety of the file was used."));
}

#[test]
fn test_filter_single_os_flag() {
    asu()
        .args(["filter", "--prodos", "--mac", "--stdout", "x.as"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_analyze_rejects_garbage() {
    asu()
        .args(["analyze", "--stdin", "-v"])
        .write_stdin(vec![0u8; 32])
        .assert()
        .failure()
        .stdout(predicate::str::contains("| Magic number"))
        .stderr(predicate::str::contains("Error: "));
}
