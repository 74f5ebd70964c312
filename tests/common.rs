#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rainlog::core::RecordStore;
use rainlog::db::SqliteStorage;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated paths for one test: HOME, data DB and session file all live
/// inside the temp dir, which is removed when dropped.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
    pub session: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = path_str(dir.path().join("rain.sqlite"));
        let session = path_str(dir.path().join("session.sqlite"));
        Self { dir, db, session }
    }

    /// `rainlog --db <db> --session <session>` with a clean environment.
    pub fn rl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rainlog");
        cmd.env("HOME", self.dir.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("RAINLOG_LAT")
            .env_remove("RAINLOG_LNG")
            .env_remove("RAINLOG_LOG")
            .args(["--db", &self.db, "--session", &self.session]);
        cmd
    }

    /// init + login, ready for mutations.
    pub fn init_as_admin(&self) {
        self.rl().args(["--test", "init"]).assert().success();
        self.rl().args(["login", "admin123"]).assert().success();
    }

    pub fn add(&self, date: &str, amount: &str) {
        self.rl().args(["add", date, amount]).assert().success();
    }

    /// Records as persisted, newest first.
    pub fn stored_ids(&self) -> Vec<String> {
        let store = RecordStore::load(SqliteStorage::open(&self.db).expect("open db")).expect("load");
        store.list().iter().map(|r| r.id.clone()).collect()
    }
}

fn path_str(p: PathBuf) -> String {
    p.to_string_lossy().to_string()
}
