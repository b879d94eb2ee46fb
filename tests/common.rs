#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_HOME: AtomicUsize = AtomicUsize::new(0);

/// Monday 2025-10-13, before lunch opens.
pub const MONDAY_MORNING: &str = "2025-10-13 09:00";

/// Binary under test, isolated from any real `~/.rtable/rtable.conf`.
/// Every invocation gets its own empty `HOME`, so parallel tests never share a config.
pub fn rtb() -> Command {
    let home = fresh_home();

    let mut cmd = cargo_bin_cmd!("rtable");
    cmd.env("HOME", &home);
    cmd
}

/// Empty directory unique to this process and call
pub fn fresh_home() -> PathBuf {
    let n = NEXT_HOME.fetch_add(1, Ordering::Relaxed);
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("rtable_home_{}_{}", process::id(), n));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).ok();
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtable.sqlite", name));
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

/// Initialize the store for a test
pub fn init_db(db_path: &str) {
    rtb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Book `time` on `date` for a party of `party` under `name`
pub fn reserve(db_path: &str, date: &str, time: &str, party: &str, name: &str) {
    rtb()
        .args([
            "--db",
            db_path,
            "--now",
            MONDAY_MORNING,
            "reserve",
            date,
            time,
            "--party",
            party,
            "--name",
            name,
            "--email",
            "guest@example.com",
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    // Wednesday dinner and Thursday lunch
    reserve(db_path, "2025-10-15", "20:00", "4", "Ada Lovelace");
    reserve(db_path, "2025-10-16", "13:00", "2", "Alan Turing");
}
