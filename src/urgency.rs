use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Days ahead (inclusive) at which a due date still counts as due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// How pressing a pending maintenance is.
///
/// Variants are declared most urgent first, so the derived `Ord` is the
/// ranking used when sorting pending lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    DueSoon,
    Upcoming,
}

/// Whole calendar days from `today` to `due`. Negative when `due` is past.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

pub fn classify(due: NaiveDate, today: NaiveDate) -> Urgency {
    match days_until(due, today) {
        d if d < 0 => Urgency::Overdue,
        d if d <= DUE_SOON_WINDOW_DAYS => Urgency::DueSoon,
        _ => Urgency::Upcoming,
    }
}

/// The caller's current calendar date, time of day discarded.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
