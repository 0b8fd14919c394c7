//! End-to-end sessions driven through the compiled binary

use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.current_dir(dir.path()).env_remove("EXPENSE_TRACKER_FILE");
    cmd
}

#[test]
fn add_two_and_total() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\nCoffee\n4.50\nFood\n1\nBus\n2.00\nTransport\n5\n4\n12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json not found. Starting with empty data."))
        .stdout(predicate::str::contains("Total expenses: 6.50"))
        .stdout(predicate::str::contains(
            "ID: 1, Description: Coffee, Amount: 4.50, Category: Food",
        ))
        .stdout(predicate::str::contains(
            "ID: 2, Description: Bus, Amount: 2.00, Category: Transport",
        ))
        .stdout(predicate::str::contains("Exiting the program. Goodbye!"));

    assert!(dir.path().join("expenses.json").exists());
}

#[test]
fn data_survives_restart() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\nRent\n900\nHome\n12\n")
        .assert()
        .success();

    tracker(&dir)
        .write_stdin("4\n1\nTea\n1.25\nFood\n4\n12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data loaded from expenses.json (1 expenses, 0 budgets)"))
        .stdout(predicate::str::contains("ID: 1, Description: Rent, Amount: 900.00"))
        .stdout(predicate::str::contains("ID: 2, Description: Tea, Amount: 1.25"));
}

#[test]
fn export_writes_header_and_rows() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\nCoffee\n4.50\nFood\n1\nBus\n2.00\nTransport\n9\nout.csv\n12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses exported to out.csv"));

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Description,Amount,Category,Date");
    assert!(lines[1].starts_with("1,Coffee,4.50,Food,"));
    assert!(lines[2].starts_with("2,Bus,2.00,Transport,"));
}

#[test]
fn budget_warning_for_current_month() {
    let dir = TempDir::new().unwrap();
    let month = Local::now().month();
    let script = format!("7\n{m}\n100\n1\nDinner\n150\nFood\n8\n{m}\n12\n", m = month);

    tracker(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Warning: You have exceeded your budget for month {} by 50.00",
            month
        )));
}

#[test]
fn malformed_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.json"), "{ not json").unwrap();

    tracker(&dir)
        .write_stdin("4\n12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error reading expenses.json. Starting with empty data.",
        ))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn end_of_input_exits_without_saving() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\nCoffee\n4.50\nFood\n")
        .assert()
        .success();

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn data_file_flag_and_history() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["--data-file", "ledger.json"])
        .write_stdin("1\nCoffee\n4.50\nFood\n12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to ledger.json"));

    assert!(dir.path().join("ledger.json").exists());
    assert!(dir.path().join("ledger.audit.log").exists());

    tracker(&dir)
        .args(["--data-file", "ledger.json", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 1 (Coffee)"));
}

#[test]
fn no_audit_skips_log() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("--no-audit")
        .write_stdin("1\nCoffee\n4.50\nFood\n12\n")
        .assert()
        .success();

    assert!(dir.path().join("expenses.json").exists());
    assert!(!dir.path().join("expenses.audit.log").exists());
}
