#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use expense_core::{
    core::{FixedClock, Tracker},
    core::utils::PathResolver,
    domain::UserProfile,
    storage::{DirReceiptStore, JsonStorage},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Opens a tracker over `base` with the clock pinned to `today`.
pub fn open_tracker(base: &PathBuf, today: NaiveDate) -> Tracker {
    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    let receipts =
        DirReceiptStore::new(PathResolver::receipts_dir_in(base)).expect("create receipt store");
    Tracker::open(
        Box::new(storage),
        Box::new(receipts),
        Box::new(FixedClock::new(today)),
    )
    .expect("open tracker")
}

/// Fresh tracker in its own directory with `uid` signed in.
pub fn signed_in_tracker(uid: &str, today: NaiveDate) -> (Tracker, PathBuf) {
    let base = temp_base();
    let mut tracker = open_tracker(&base, today);
    tracker.login(UserProfile::new(uid));
    (tracker, base)
}
