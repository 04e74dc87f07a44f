// src/utils/clock.rs

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Source of the current instant.
///
/// Handlers never call `Utc::now()` directly so tests can pin "today".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The UTC calendar day an instant falls on.
pub fn calendar_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Calendar day as stored in the `students.day` column (`YYYY-MM-DD`).
pub fn day_key(instant: DateTime<Utc>) -> String {
    calendar_day(instant).format("%Y-%m-%d").to_string()
}

/// Fixed-width UTC timestamp (`YYYY-MM-DDTHH:MM:SS.mmmZ`).
///
/// Every stored timestamp has the same width, so comparing the strings in SQL
/// orders them chronologically.
pub fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
