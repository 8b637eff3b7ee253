#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pcl() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
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

/// Write a small two-employee roster file and return its path
pub fn write_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(
        &p,
        r#"{
  "1001": { "name": "Maria Silva", "title": "Analyst", "company": "Acme" },
  "1002": { "name": "Joao Pereira", "title": "Technician", "company": "Acme" }
}
"#,
    )
    .expect("write roster");
    p
}

/// Initialize the schema in the given DB file (creates tables + migrations)
pub fn init_test_db(db_path: &str) {
    pcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one punch for `code` at the given wall-clock stamp
pub fn punch_at(db_path: &str, roster: &str, code: &str, stamp: &str) {
    pcl()
        .args([
            "--db", db_path, "--roster", roster, "--test", "punch", code, "--at", stamp,
        ])
        .assert()
        .success();
}
