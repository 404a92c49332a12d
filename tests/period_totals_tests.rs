mod common;

use common::{date, signed_in_tracker};
use expense_core::{
    domain::{ExpenseDraft, ExpenseRecord, UserId},
    period_totals, week_number, PeriodTotals,
};
use uuid::Uuid;

fn record(amount: f64, y: i32, m: u32, d: u32) -> ExpenseRecord {
    ExpenseRecord::new(UserId::new("u1"), amount, date(y, m, d), "Market", Uuid::new_v4())
}

#[test]
fn every_period_is_zero_for_no_records() {
    for today in [date(2025, 1, 1), date(2024, 2, 29), date(2025, 12, 31)] {
        assert_eq!(period_totals(&[], today), PeriodTotals::default());
    }
}

#[test]
fn week_boundaries_follow_day_of_year() {
    let today = date(2025, 3, 5); // day 64, week 10
    assert_eq!(week_number(today), 10);
    let records = vec![
        record(1.0, 2025, 2, 26), // day 57, week 9
        record(2.0, 2025, 2, 27), // day 58, week 9
        record(4.0, 2025, 3, 1),  // day 60, week 9
        record(8.0, 2025, 3, 4),  // day 63, week 9
        record(16.0, 2025, 3, 11), // day 70, week 10
        record(32.0, 2025, 3, 12), // day 71, week 11
    ];
    let totals = period_totals(&records, today);
    assert_eq!(totals.this_week, 16.0);
    assert_eq!(totals.this_month, 4.0 + 8.0 + 16.0 + 32.0);
    assert_eq!(totals.this_year, 63.0);
    assert_eq!(totals.today, 0.0);
}

#[test]
fn leap_years_shift_week_buckets_after_february() {
    // 2024-03-01 is day 61 (week 9); 2025-03-01 is day 60 (week 9).
    assert_eq!(week_number(date(2024, 3, 1)), 9);
    assert_eq!(week_number(date(2024, 3, 4)), 10);
    assert_eq!(week_number(date(2025, 3, 4)), 9);
}

#[test]
fn year_boundary_never_merges_weeks() {
    let totals = period_totals(&[record(70.0, 2025, 12, 31)], date(2026, 1, 1));
    assert_eq!(totals, PeriodTotals::default());

    let totals = period_totals(&[record(70.0, 2026, 1, 1)], date(2025, 12, 31));
    assert_eq!(totals, PeriodTotals::default());
}

#[test]
fn tracker_captures_today_from_its_clock() {
    let (mut tracker, _) = signed_in_tracker("alice", date(2025, 1, 8));
    let category = tracker.add_category("Groceries").expect("category").id;
    for (amount, day) in [(50.0, "2025-01-08"), (30.0, "2025-01-05"), (100.0, "2024-12-20")] {
        tracker
            .add_expense(ExpenseDraft::new(amount, "Shopping", category, day))
            .expect("add expense");
    }

    let totals = tracker.period_totals().expect("totals");
    assert_eq!(totals.today, 50.0);
    assert_eq!(totals.this_week, 50.0);
    assert_eq!(totals.this_month, 80.0);
    assert_eq!(totals.this_year, 80.0);
}
