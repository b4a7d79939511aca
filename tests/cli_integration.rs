//! CLI integration tests for clientele
//!
//! These tests write fixture data files into a temp directory, run the
//! binary against them, and assert on the report output.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the clientele binary
fn clientele_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("clientele"))
}

/// Three orders; totals 30.00, 12.50, 5.25.
const ORDER_DATA: &str = "\
widget;gadget,30.00
doodad,12.50
gizmo,5.25
";

/// Five clients over three states. Order requests sum to 7, so the
/// cursor wraps the three-order pool twice:
///   Doe   -> 30.00            (spend 30.00)
///   Smith -> 12.50, 5.25      (spend 17.75)
///   Brown -> none             (spend 0)
///   Stone -> 30.00, 12.50, 5.25  (spend 47.75)
///   King  -> 30.00            (spend 30.00)
const CLIENT_DATA: &str = "\
Jane,Doe,21,F,12,Main St,Springfield,CA,90210,1
John,Smith,34,M,9,Elm Ave,Albany,NY,12207,2
Alice,Brown,68,F,4,Oak Ln,Fresno,CA,93650,0
Bob,Stone,45,M,77,Pine Rd,San Jose,CA,95112,3
Carol,King,25,F,5,Lake Dr,Reno,NV,89501,1
";

/// Write the standard fixtures and return the directory
fn setup_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), CLIENT_DATA, ORDER_DATA);
    dir
}

fn write_data(dir: &Path, clients: &str, orders: &str) {
    fs::write(dir.join("ClientData.csv"), clients).unwrap();
    fs::write(dir.join("OrderData.csv"), orders).unwrap();
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_report_text_output() {
    let dir = setup_data();

    clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        // (21 + 34 + 68 + 45 + 25) / 5
        .stdout(predicate::str::contains("Average age: 38.6"))
        .stdout(predicate::str::contains("Female clients aged 18-25 (2):"))
        .stdout(predicate::str::contains("Any clients without orders: true"))
        .stdout(predicate::str::contains(
            "Any clients with zero total spend: true",
        ))
        .stdout(predicate::str::contains("Biggest spender: Bob Stone (47.75)"))
        .stdout(predicate::str::contains("Average spend, male clients: 32.75"))
        .stdout(predicate::str::contains("CA addresses (3):"))
        .stdout(predicate::str::contains(
            "State with the most clients: CA (3 clients)",
        ))
        .stdout(predicate::str::contains("Top spender in CA: Bob Stone (47.75)"));
}

#[test]
fn test_report_lists_ca_last_names_and_big_states() {
    let dir = setup_data();

    let assert = clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let names_section = stdout.split("CA client last names:").nth(1).unwrap();
    assert!(names_section.contains("Doe"));
    assert!(names_section.contains("Brown"));
    assert!(names_section.contains("Stone"));

    let states_section = stdout.split("States with more than 2 clients:").nth(1).unwrap();
    assert!(states_section.contains("CA"));
    assert!(!states_section.contains("NY\n"));
}

#[test]
fn test_report_json_output() {
    let dir = setup_data();

    let assert = clientele_cmd()
        .current_dir(dir.path())
        .args(["report", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["clients"], 5);
    assert!((report["average_age"].as_f64().unwrap() - 38.6).abs() < 1e-9);
    assert_eq!(report["young_female_clients"].as_array().unwrap().len(), 2);
    assert_eq!(report["any_clients_without_orders"], true);
    assert_eq!(report["any_zero_total_spenders"], true);
    assert_eq!(report["biggest_spender"]["name"], "Bob Stone");
    assert!((report["average_male_spend"].as_f64().unwrap() - 32.75).abs() < 1e-9);
    assert_eq!(report["ca_addresses"].as_array().unwrap().len(), 3);
    assert_eq!(
        report["ca_last_names"],
        serde_json::json!(["Doe", "Brown", "Stone"])
    );
    assert_eq!(
        report["states_with_more_than_two_clients"],
        serde_json::json!(["CA"])
    );
    assert_eq!(report["busiest_state"], "CA");
    assert_eq!(report["top_spender_by_state"]["CA"], "Bob Stone");
    assert_eq!(report["top_spender_by_state"]["NY"], "John Smith");
    assert_eq!(report["top_spender_by_state"]["NV"], "Carol King");
    assert_eq!(report["ca_top_spender"], "Bob Stone");
}

#[test]
fn test_report_with_explicit_file_flags() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("people.txt"), CLIENT_DATA).unwrap();
    fs::write(dir.path().join("purchases.txt"), ORDER_DATA).unwrap();

    clientele_cmd()
        .current_dir(dir.path())
        .args([
            "report",
            "--client-file",
            "people.txt",
            "--order-file",
            "purchases.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average age: 38.6"));
}

#[test]
fn test_report_without_ca_clients_fails() {
    let dir = TempDir::new().unwrap();
    write_data(
        dir.path(),
        "John,Smith,34,M,9,Elm Ave,Albany,NY,12207,1\n",
        ORDER_DATA,
    );

    clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no clients in state CA"));
}

#[test]
fn test_report_without_male_clients_fails() {
    let dir = TempDir::new().unwrap();
    write_data(
        dir.path(),
        "Jane,Doe,21,F,12,Main St,Springfield,CA,90210,1\n",
        ORDER_DATA,
    );

    clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no male clients"));
}

// =============================================================================
// Load Failure Tests
// =============================================================================

#[test]
fn test_missing_client_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("OrderData.csv"), ORDER_DATA).unwrap();

    clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open client file"));
}

#[test]
fn test_malformed_total_fails_with_line_number() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), CLIENT_DATA, "widget,30.00\ngadget,oops\n");

    clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("invalid total"));
}

#[test]
fn test_empty_order_pool_with_requests_fails() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), CLIENT_DATA, "");

    clientele_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("order pool is empty"));
}

// =============================================================================
// Sample Tests
// =============================================================================

#[test]
fn test_sample_shows_five_by_default() {
    let dir = setup_data();

    clientele_cmd()
        .current_dir(dir.path())
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 5 of 5 clients:"))
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("Carol King"));
}

#[test]
fn test_sample_count_flag_limits_output() {
    let dir = setup_data();

    clientele_cmd()
        .current_dir(dir.path())
        .args(["sample", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 5 clients:"))
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("John Smith"))
        .stdout(predicate::str::contains("Alice Brown").not());
}

#[test]
fn test_sample_json_output() {
    let dir = setup_data();

    let assert = clientele_cmd()
        .current_dir(dir.path())
        .args(["sample", "--format", "json", "--count", "1"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let clients: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(clients.as_array().unwrap().len(), 1);
    assert_eq!(clients[0]["first_name"], "Jane");
    assert_eq!(clients[0]["address"]["state"], "CA");
    assert_eq!(clients[0]["orders"][0]["total"], 30.0);
}

#[test]
fn test_sample_of_empty_dataset() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "", "");

    clientele_cmd()
        .current_dir(dir.path())
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients loaded."));
}
