//! Fixed 7-day week windows over a season.

use crate::constants::DAYS_PER_WEEK;
use chrono::{Days, NaiveDate};
use std::fmt;

/// Date format used in API query parameters and log lines.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// One week window of the season. Windows are contiguous and non-overlapping:
/// window `i` starts `(i - 1) * 7` days after the season start and ends 6 days later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// 1-based week index.
    pub index: u32,
    /// First day of the window, inclusive.
    pub start: NaiveDate,
    /// Last day of the window, inclusive.
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Computes window `index` for a season starting on `season_start`.
    ///
    /// Returns `None` for index 0 or when the window would fall outside
    /// chrono's supported date range.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use mls_schedule::data_fetcher::WeekWindow;
    ///
    /// let season_start = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
    /// let window = WeekWindow::new(season_start, 2).unwrap();
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2026, 2, 23).unwrap());
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    /// ```
    pub fn new(season_start: NaiveDate, index: u32) -> Option<Self> {
        let offset_weeks = u64::from(index.checked_sub(1)?);
        let start = season_start.checked_add_days(Days::new(offset_weeks * DAYS_PER_WEEK))?;
        let end = start.checked_add_days(Days::new(DAYS_PER_WEEK - 1))?;
        Some(WeekWindow { index, start, end })
    }

    /// Lower bound for the `match_date[gte]` query parameter.
    pub fn start_param(&self) -> String {
        self.start.format(QUERY_DATE_FORMAT).to_string()
    }

    /// Upper bound for the `match_date[lte]` query parameter.
    pub fn end_param(&self) -> String {
        self.end.format(QUERY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "week {}: {} to {}",
            self.index,
            self.start_param(),
            self.end_param()
        )
    }
}

/// Yields windows `1..=total_weeks` in order. Stops early if a window
/// cannot be represented.
pub fn season_windows(season_start: NaiveDate, total_weeks: u32) -> impl Iterator<Item = WeekWindow> {
    (1..=total_weeks).map_while(move |index| WeekWindow::new(season_start, index))
}
