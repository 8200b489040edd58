use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::cargo::{self};
use predicates::prelude::*;
use predicates::str::contains;

const SCHEMA: &str = "question,type,options\nName,text\nRole,select,Dev|PM\nPets,checkbox,cat|---|dog|fish\n";

fn temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("schemacard-cli-{stamp}-{name}"))
}

fn schema_file() -> PathBuf {
    let path = temp_path("schema.csv");
    fs::write(&path, SCHEMA).unwrap();
    path
}

#[test]
fn prints_preview_for_assignments() {
    let schema = schema_file();
    let mut cmd = cargo::cargo_bin_cmd!("schemacard");
    cmd.arg("--schema")
        .arg(&schema)
        .args(["--set", "Name=Ada", "--set", "Role=Dev", "--set", "Pets=dog|cat"])
        .assert()
        .success()
        .stdout(contains(
            "Name: Ada\nRole: Dev\nPets: dog / cat\nX Profile Card Generator",
        ));
    let _ = fs::remove_file(schema);
}

#[test]
fn reads_schema_from_stdin() {
    let mut cmd = cargo::cargo_bin_cmd!("schemacard");
    cmd.args(["--schema", "-", "--json"])
        .write_stdin(SCHEMA)
        .assert()
        .success()
        .stdout(contains("\"label\": \"Pets\"").and(contains("\"text\": \"-\"")));
}

#[test]
fn missing_schema_fails_with_notice() {
    let mut cmd = cargo::cargo_bin_cmd!("schemacard");
    cmd.args(["--schema", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(contains("failed to load schema"));
}

#[test]
fn unknown_option_is_rejected() {
    let schema = schema_file();
    let mut cmd = cargo::cargo_bin_cmd!("schemacard");
    cmd.arg("--schema")
        .arg(&schema)
        .args(["--set", "Role=CEO"])
        .assert()
        .failure()
        .stderr(contains("cannot set 'Role'"));
    let _ = fs::remove_file(schema);
}

#[test]
fn exports_svg_card() {
    let schema = schema_file();
    let out = temp_path("card.svg");
    let mut cmd = cargo::cargo_bin_cmd!("schemacard");
    cmd.arg("--schema")
        .arg(&schema)
        .args(["--set", "Name=Ada", "--svg", "--export"])
        .arg(&out)
        .assert()
        .success();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Ada"));
    let _ = fs::remove_file(schema);
    let _ = fs::remove_file(out);
}
