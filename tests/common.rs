#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    cargo_bin_cmd!("roadlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roadlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and plan a deterministic one-day trip for 2025-09-22
pub fn init_db_with_trip(db_path: &str) {
    rdl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rdl()
        .args([
            "--db",
            db_path,
            "--test",
            "plan",
            "Chicago",
            "Cleveland",
            "New York",
            "--distance",
            "800",
            "--drive-hours",
            "9",
            "--date",
            "2025-09-22",
        ])
        .assert()
        .success();
}
