//! Today / this week / this month / this year spending totals.
//!
//! Weeks are numbered by day of year: days 1-7 are week 1, days 8-14 are
//! week 2, and so on, restarting every January 1st. This is not ISO-8601
//! week numbering; December 31st is always week 53 and never shares a week
//! with the following January 1st.

use std::ops::Add;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::ExpenseRecord;

/// Running totals per period, all relative to one reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub today: f64,
    pub this_week: f64,
    pub this_month: f64,
    pub this_year: f64,
}

impl PeriodTotals {
    fn record(&mut self, date: NaiveDate, amount: f64, today: NaiveDate) {
        let same_year = date.year() == today.year();
        if date == today {
            self.today += amount;
        }
        if same_year && week_number(date) == week_number(today) {
            self.this_week += amount;
        }
        if same_year && date.month() == today.month() {
            self.this_month += amount;
        }
        if same_year {
            self.this_year += amount;
        }
    }
}

impl Add for PeriodTotals {
    type Output = PeriodTotals;

    fn add(self, rhs: PeriodTotals) -> PeriodTotals {
        PeriodTotals {
            today: self.today + rhs.today,
            this_week: self.this_week + rhs.this_week,
            this_month: self.this_month + rhs.this_month,
            this_year: self.this_year + rhs.this_year,
        }
    }
}

/// `ceil((days since January 1st + 1) / 7)`, so January 1st-7th is week 1.
pub fn week_number(date: NaiveDate) -> u32 {
    date.ordinal0() / 7 + 1
}

/// Folds `records` into period totals relative to `today`.
///
/// `today` is taken once by the caller so every record is judged against the
/// same date, even if the fold runs across midnight.
pub fn period_totals(records: &[ExpenseRecord], today: NaiveDate) -> PeriodTotals {
    let totals = records
        .iter()
        .fold(PeriodTotals::default(), |mut totals, record| {
            totals.record(record.date, record.amount, today);
            totals
        });
    tracing::debug!(records = records.len(), %today, ?totals, "aggregated period totals");
    totals
}
