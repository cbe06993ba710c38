use assert_cmd::cargo::cargo_bin_cmd;
use chrono::NaiveDate;
use predicates::prelude::*;
use shipdash_testing::{ShipmentFixture, TestWorld, assertions};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn run_dashboard(world: &TestWorld, extra: &[&str]) -> serde_json::Value {
    let mut cmd = cargo_bin_cmd!("shipdash");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "dashboard", "--today", "2024-01-10"])
        .args(extra);
    let output = cmd.output().expect("Failed to run dashboard");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("dashboard JSON")
}

#[test]
fn test_three_day_window_buckets_by_arrival() {
    let shipments = ShipmentFixture::new(anchor())
        .arriving_on("A", "Acme Corp", "01/10/24")
        .arriving_on("B", "Globex", "01/12/24")
        .arriving_on("C", "Initech", "01/20/24")
        .to_json();
    let world = TestWorld::new().with_shipments(&shipments);

    let json = run_dashboard(&world, &["--days", "3"]);

    assertions::assert_fetch_status(&json, "SUCCESS").unwrap();
    assertions::assert_day_keys(&json, &["01/10/24", "01/11/24", "01/12/24"]).unwrap();
    assert_eq!(assertions::house_bills_on(&json, "01/10/24").unwrap(), vec!["A"]);
    assert!(assertions::house_bills_on(&json, "01/11/24").unwrap().is_empty());
    assert_eq!(assertions::house_bills_on(&json, "01/12/24").unwrap(), vec!["B"]);
    assert_eq!(json["content"]["outside_window"], 1);
}

#[test]
fn test_default_window_is_seven_days() {
    let world = TestWorld::new().with_shipments(&ShipmentFixture::new(anchor()).to_json());

    let json = run_dashboard(&world, &[]);
    let days = json["content"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[6]["key"], "01/16/24");
}

#[test]
fn test_empty_list_yields_empty_days() {
    let world = TestWorld::new().with_shipments("[]");

    let json = run_dashboard(&world, &["--days", "3"]);
    let days = json["content"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert!(days.iter().all(|d| d["shipments"].as_array().unwrap().is_empty()));
    assert_eq!(json["badge"]["label"], "No shipments found");
}

#[test]
fn test_unparseable_arrival_is_dropped() {
    let shipments = ShipmentFixture::new(anchor())
        .arriving_in("GOOD", "Acme Corp", 1)
        .arriving_on("BAD", "Acme Corp", "soon")
        .to_json();
    let world = TestWorld::new().with_shipments(&shipments);

    let json = run_dashboard(&world, &["--days", "2"]);
    assert_eq!(assertions::house_bills_on(&json, "01/11/24").unwrap(), vec!["GOOD"]);
    assert_eq!(json["content"]["arriving_in_window"], 1);
    assert_eq!(json["content"]["total_shipments"], 2);
}

#[test]
fn test_unreachable_endpoint_reports_error_and_exits_nonzero() {
    let world = TestWorld::new().with_endpoint("http://127.0.0.1:1/shipments");

    let mut cmd = cargo_bin_cmd!("shipdash");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "dashboard"]);
    let output = cmd.output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assertions::assert_fetch_status(&json, "ERROR").unwrap();
    assert_eq!(json["badge"]["level"], "error");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_unsupported_scheme_still_renders_error_view() {
    let world = TestWorld::new().with_endpoint("ftp://example.com/shipments.json");

    let mut cmd = cargo_bin_cmd!("shipdash");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "dashboard"]);
    let output = cmd.output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assertions::assert_fetch_status(&json, "ERROR").unwrap();
    assert_eq!(json["badge"]["level"], "error");
    assert!(
        json["content"]["message"]
            .as_str()
            .unwrap()
            .contains("unsupported scheme")
    );
}

#[test]
fn test_malformed_payload_is_error_state() {
    let world = TestWorld::new().with_shipments(r#"{"shipments": []}"#);

    let mut cmd = cargo_bin_cmd!("shipdash");
    world.configure_command(&mut cmd).arg("dashboard");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Error loading shipments"));
}

#[test]
fn test_quiet_prints_key_and_count() {
    let shipments = ShipmentFixture::new(anchor())
        .arriving_in("A", "Acme Corp", 0)
        .arriving_in("B", "Globex", 0)
        .to_json();
    let world = TestWorld::new().with_shipments(&shipments);

    let mut cmd = cargo_bin_cmd!("shipdash");
    world
        .configure_command(&mut cmd)
        .args(["dashboard", "--today", "2024-01-10", "--days", "2", "--quiet"]);
    cmd.assert()
        .success()
        .stdout("01/10/24\t2\n01/11/24\t0\n");
}

#[test]
fn test_compact_collapses_long_days() {
    let shipments = ShipmentFixture::new(anchor())
        .arriving_in("A", "Acme Corp", 0)
        .arriving_in("B", "Globex", 0)
        .arriving_in("C", "Initech", 0)
        .to_json();
    let world = TestWorld::new().with_shipments(&shipments);

    let mut cmd = cargo_bin_cmd!("shipdash");
    world.configure_command(&mut cmd).args([
        "dashboard",
        "--today",
        "2024-01-10",
        "--days",
        "1",
        "--per-day",
        "1",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wed 01/10/24 (today) (3)"))
        .stdout(predicate::str::contains("... and 2 more"));
}
