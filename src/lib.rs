#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps per-user expenses, categories, and monthly budgets, and
//! folds expense records into today / week / month / year spending totals.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod summary;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use summary::{period_totals, week_number, PeriodTotals};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
