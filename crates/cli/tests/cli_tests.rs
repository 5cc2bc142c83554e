use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rentdesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rentdesk").unwrap();
    cmd.env("RENTDESK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    rentdesk(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan sessions"));
}

#[test]
fn test_session_create_and_list() {
    let dir = TempDir::new().unwrap();

    rentdesk(&dir).args(["session", "new", "Event A"]).assert().success();
    rentdesk(&dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event A"));
    // creating does not activate
    rentdesk(&dir)
        .args(["session", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session"));
}

#[test]
fn test_scan_without_active_session_fails() {
    let dir = TempDir::new().unwrap();

    rentdesk(&dir)
        .args(["scan", "--equipment-id", "7", "--name", "PA Speaker", "--barcode", "EQ-0007"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active scan session"));
}

#[test]
fn test_serialized_rescan_reports_already_scanned() {
    let dir = TempDir::new().unwrap();

    rentdesk(&dir).args(["session", "new", "Event A", "--activate"]).assert().success();

    let scan = [
        "scan",
        "--equipment-id",
        "7",
        "--name",
        "PA Speaker",
        "--barcode",
        "EQ-0007",
        "--serial",
        "SN1",
    ];
    rentdesk(&dir).args(scan).assert().success().stderr(predicate::str::contains("added"));
    rentdesk(&dir)
        .args(scan)
        .assert()
        .success()
        .stderr(predicate::str::contains("already scanned"));
}

#[test]
fn test_items_pages_a_session() {
    let dir = TempDir::new().unwrap();

    let out = rentdesk(&dir)
        .args(["session", "new", "Event A", "--activate"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let id = String::from_utf8(out.stdout).unwrap().trim().to_owned();

    rentdesk(&dir)
        .args([
            "scan",
            "--equipment-id",
            "7",
            "--name",
            "PA Speaker",
            "--barcode",
            "EQ-0007",
            "--serial",
            "SN1",
        ])
        .assert()
        .success();
    rentdesk(&dir)
        .args(["scan", "--equipment-id", "8", "--name", "XLR Cable", "--barcode", "EQ-0008"])
        .assert()
        .success();

    rentdesk(&dir)
        .args(["items", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("PA Speaker"))
        .stdout(predicate::str::contains("showing 1-2 of 2"));

    rentdesk(&dir)
        .args(["items", &id, "--query", "cable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XLR Cable"))
        .stdout(predicate::str::contains("showing 1-1 of 1"));
}
