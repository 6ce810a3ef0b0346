#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesince::core::store::ItemStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimesince")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesince.sqlite", name));
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

/// Fresh store on a unique temp file
pub fn fresh_store(name: &str) -> ItemStore {
    let db_path = setup_test_db(name);
    ItemStore::open(&db_path).expect("open store")
}

/// Initialize DB through the CLI
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn ids(store: &ItemStore) -> Vec<i64> {
    store
        .list_all()
        .expect("list")
        .into_iter()
        .map(|it| it.id)
        .collect()
}
