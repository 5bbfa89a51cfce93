//! The trailing recency window used to admit articles into the feed.

use chrono::{Duration, Local, NaiveDate};

/// Default window length in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// A date range anchored at the start of a search run.
///
/// Built once per run and passed down, so every source is judged against the
/// same bounds regardless of when its page was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RecencyWindow {
    /// Window covering `days` days up to and including `today`.
    ///
    /// A window reaching past the earliest representable date starts there.
    pub fn ending_at(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Window ending at today's local date. Call once per run.
    pub fn current(days: u32) -> Self {
        Self::ending_at(Local::now().date_naive(), days)
    }

    /// Whether an article dated `date` belongs in the feed.
    ///
    /// The lower bound is inclusive. Future-dated articles are kept; sources
    /// are trusted not to publish them.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start
    }
}
