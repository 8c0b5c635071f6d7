use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("EXPENSES_LOG");
    cmd
}

fn add(dir: &TempDir, amount: &str, date: &str, category: &str, description: &str) {
    expenses(dir)
        .args(["add", amount, "-d", date, "-c", category, "-m", description])
        .assert()
        .success();
}

#[test]
fn add_then_list_and_show() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "12.50", "-d", "2024-03-04", "-c", "Food", "-m", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #1"))
        .stdout(predicate::str::contains("Amount:      $12.50"));

    add(&dir, "40", "2024-03-05", "Transport", "train");

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("train"))
        .stdout(predicate::str::contains("$40.00"));

    expenses(&dir)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category:    Transport"))
        .stdout(predicate::str::contains("Description: train"));
}

#[test]
fn empty_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount."));

    expenses(&dir)
        .args(["add", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount."));

    expenses(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn edit_keeps_unspecified_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "12.50", "2024-03-04", "Food", "lunch");

    expenses(&dir)
        .args(["edit", "1", "--amount", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense #1"))
        .stdout(predicate::str::contains("$15.00"))
        .stdout(predicate::str::contains("Description: lunch"));

    expenses(&dir)
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change"));
}

#[test]
fn delete_then_missing() {
    let dir = TempDir::new().unwrap();
    add(&dir, "9.99", "2024-03-04", "Other", "socks");

    expenses(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: #1"));

    expenses(&dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 1"));

    expenses(&dir)
        .args(["delete", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 99"));
}

#[test]
fn budget_progress_labels() {
    let dir = TempDir::new().unwrap();
    add(&dir, "500", "2024-05-02", "Rent", "");

    expenses(&dir)
        .args(["budget", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Budget Progress: $500 / $800"));

    add(&dir, "450", "2024-05-20", "Food", "");

    expenses(&dir)
        .args(["budget", "--period", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Monthly Budget Exceeded: $950 / $800 (18.8% over)",
        ))
        .stdout(predicate::str::contains("OVER"));

    // Other months are unaffected
    expenses(&dir)
        .args(["budget", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Budget Progress: $0 / $800"));
}

#[test]
fn monthly_report() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses available to plot."));

    add(&dir, "100", "2024-01-10", "Food", "");
    add(&dir, "50", "2024-01-20", "Food", "");
    add(&dir, "75", "2024-02-01", "Utilities", "");

    expenses(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("$150.00"))
        .stdout(predicate::str::contains("2024-02"));

    let out = dir.path().join("monthly.csv");
    expenses(&dir)
        .args(["report", "monthly", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly totals (2 months)"));

    let csv = fs::read_to_string(&out).unwrap();
    assert_eq!(csv, "month,total\n2024-01,150.00\n2024-02,75.00\n");
}

#[test]
fn export_and_import() {
    let dir = TempDir::new().unwrap();
    add(&dir, "12.50", "2024-03-04", "Food", "lunch");

    expenses(&dir)
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("lunch"));

    let out = dir.path().join("all.csv");
    expenses(&dir)
        .args(["export", "csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses as csv"));
    assert!(fs::read_to_string(&out).unwrap().contains("12.50"));

    let input = dir.path().join("import.csv");
    fs::write(
        &input,
        "date,amount,category,description\n\
         2024-04-01,20.00,Transport,bus pass\n\
         2024-04-02,oops,Food,bad\n",
    )
    .unwrap();

    expenses(&dir)
        .args(["import", "--dry-run"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 1 rows valid"))
        .stderr(predicate::str::contains("Skipped line 3"));

    expenses(&dir)
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expenses, skipped 1 rows."));

    expenses(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("bus pass"));
}

#[test]
fn audit_records_mutations() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries."));

    add(&dir, "5", "2024-03-04", "Food", "coffee");
    expenses(&dir)
        .args(["edit", "1", "--amount", "6"])
        .assert()
        .success();

    expenses(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE expense #1"))
        .stdout(predicate::str::contains("UPDATE expense #1"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.db"))
        .stdout(predicate::str::contains("Monthly budget:  $800.00"));
}

#[test]
fn date_format_setting_changes_display_only() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"date_format": "%d/%m/%Y"}"#,
    )
    .unwrap();
    add(&dir, "3", "2024-03-04", "Food", "tea");

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("04/03/2024"));

    expenses(&dir)
        .arg("config")
        .assert()
        .stdout(predicate::str::contains("Date format:     %d/%m/%Y"));

    expenses(&dir)
        .args(["export", "csv"])
        .assert()
        .stdout(predicate::str::contains("2024-03-04"));
}
