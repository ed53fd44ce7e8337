use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/sample_network.json")
        .canonicalize()
        .expect("fixture dataset present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("hubnet-cli");
    cmd.env_remove("HUBNET_DATASET")
        .env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(fixture_path());
    cmd
}

#[test]
fn routes_prints_shortest_and_all_paths() {
    let mut cmd = prepare_command();
    cmd.args(["routes", "--from", "Lima Central", "--to", "Puno Dock"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest: Lima Central -> Cusco Central -> Cusco Depot -> Puno Dock (3 hops)",
        ))
        .stdout(predicate::str::contains("All routes (2):"));
}

#[test]
fn routes_json_uses_camel_case_fields() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "routes", "--from", "Callao Port", "--to", "Lima Central"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(
        value["shortestPath"],
        serde_json::json!(["Callao Port", "Lima Central"])
    );
    assert!(value["allPaths"].as_array().is_some_and(|paths| !paths.is_empty()));
}

#[test]
fn unknown_hub_warns_with_suggestion_and_reports_no_route() {
    let mut cmd = prepare_command();
    cmd.args(["routes", "--from", "Lima Centrl", "--to", "Puno Dock"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route found"))
        .stderr(predicate::str::contains("Unknown hub 'Lima Centrl'"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn disconnected_hubs_report_no_route() {
    let mut cmd = prepare_command();
    cmd.args(["routes", "--from", "Tacna Store", "--to", "Lima Central"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route found"))
        .stderr(predicate::str::contains("Unknown hub").not());
}

#[test]
fn graph_json_contains_adjacency_and_city_groups() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "graph"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(
        value["graph"]["Lima Central"],
        serde_json::json!(["Callao Port", "Cusco Central"])
    );
    assert_eq!(value["graph"]["Tacna Store"], serde_json::json!([]));
    assert_eq!(
        value["groupedHubsByCity"]["Lima"],
        serde_json::json!(["Lima Central", "Callao Port"])
    );
}

#[test]
fn graph_text_lists_hubs() {
    let mut cmd = prepare_command();
    cmd.arg("graph");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Graph (8 hubs):"))
        .stdout(predicate::str::contains("Hubs by city:"));
}

#[test]
fn city_route_lists_cities_with_hub_codes() {
    let mut cmd = prepare_command();
    cmd.args(["city-route", "--from", "Lima", "--to", "Puno"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "City route: Lima -> Arequipa -> Puno (2 hops)",
        ))
        .stdout(predicate::str::contains("  Arequipa [AQP01]"))
        .stdout(predicate::str::contains("  Puno [PUN01]"))
        .stdout(predicate::str::contains("Arequipa Yard").not());
}

#[test]
fn city_route_json_is_null_for_unknown_city() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "city-route", "--from", "Arequpa", "--to", "Lima"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("null"))
        .stderr(predicate::str::contains(
            "Unknown city 'Arequpa'. Did you mean 'Arequipa'?",
        ));
}

#[test]
fn city_without_routes_is_not_reported_as_unknown() {
    let mut cmd = prepare_command();
    cmd.args(["city-route", "--from", "Tacna", "--to", "Lima"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route found"))
        .stderr(predicate::str::contains("City 'Tacna' has hubs but no routes"))
        .stderr(predicate::str::contains("Unknown city").not());
}

#[test]
fn dataset_can_come_from_environment() {
    let mut cmd = cargo_bin_cmd!("hubnet-cli");
    cmd.env("HUBNET_DATASET", fixture_path())
        .env("RUST_LOG", "error")
        .args(["routes", "--from", "Cusco Central", "--to", "Cusco Depot"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(1 hops)"));
}

#[test]
fn missing_dataset_fails() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("hubnet-cli");
    cmd.env_remove("HUBNET_DATASET")
        .env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(temp.path().join("absent.db"))
        .arg("graph");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to locate the hub dataset"));
}
