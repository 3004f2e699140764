use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

fn script_command(home: &std::path::Path) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("finance_tracker")?;
    cmd.env("FINANCE_TRACKER_CLI_SCRIPT", "1")
        .env("FINANCE_TRACKER_HOME", home)
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn script_mode_runs_full_flow_and_saves() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    script_command(home.path())?
        .write_stdin("Alice\n1\nmonthly\n300\n2\n1500\n3\ngroceries\n200\n4\n6\n7\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--- Financial Summary ---")
                .and(predicate::str::contains("Remaining Budget: $1300.00"))
                .and(predicate::str::contains("Data saved successfully.")),
        );

    let saved = fs::read_to_string(home.path().join("finance_data.txt"))?;
    assert!(saved.starts_with("Name: Alice\nBudget Period: monthly\n"));
    assert!(saved.ends_with("Savings Goal: $300.00\n"));
    Ok(())
}

#[test]
fn script_mode_reprompts_invalid_input() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    script_command(home.path())?
        .write_stdin("Bob\n42\n2\n-5\nten\n800\n7\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid menu choice.")
                .and(predicate::str::contains(
                    "Invalid income amount. Please enter a positive number.",
                ))
                .and(predicate::str::contains("Income set to $800.00.")),
        );
    Ok(())
}

#[test]
fn over_budget_report_warns() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    script_command(home.path())?
        .write_stdin("Carol\n2\n500\n3\nrent\n700\n4\n7\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Remaining Budget: $-200.00")
                .and(predicate::str::contains("Warning: You are over budget!")),
        );
    Ok(())
}

#[test]
fn delete_reports_missing_and_empty_expenses() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    script_command(home.path())?
        .write_stdin("Dana\n5\n3\ngym\n30\n5\nspa\n5\ngym\n7\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No expenses to delete.")
                .and(predicate::str::contains("- gym"))
                .and(predicate::str::contains("Expense not found."))
                .and(predicate::str::contains("Expense 'gym' deleted successfully.")),
        );
    Ok(())
}

#[test]
fn configured_json_lines_destination_is_used() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    fs::write(
        home.path().join("config.json"),
        r#"{"data_file": "snapshots.jsonl", "snapshot_format": "json_lines"}"#,
    )?;
    script_command(home.path())?
        .write_stdin("Erin\n2\n100\n6\n7\n")
        .assert()
        .success();

    let saved = fs::read_to_string(home.path().join("snapshots.jsonl"))?;
    let value: serde_json::Value = serde_json::from_str(saved.trim_end())?;
    assert_eq!(value["name"], "Erin");
    assert_eq!(value["income"], 100.0);
    Ok(())
}

#[test]
fn end_of_input_exits_successfully() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    script_command(home.path())?
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No name entered. Exiting."));
    Ok(())
}
