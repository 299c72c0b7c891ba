//! Kickoff conversion into the target timezone.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::error::AppError;

/// Calendar date in the target timezone.
pub const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// 12-hour clock without a leading zero on the hour, e.g. `6:30 PM`.
pub const GAME_TIME_FORMAT: &str = "%-I:%M %p";

/// Abbreviation in effect at the instant, e.g. `PST` or `PDT`.
pub const TIMEZONE_FORMAT: &str = "%Z";

/// A kickoff instant rendered in the target timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalKickoff {
    pub date: String,
    pub time: String,
    pub zone: String,
}

/// Converts an RFC 3339 kickoff instant (any offset, `Z` included) into `tz`.
///
/// The abbreviation reflects daylight saving at that particular instant, so
/// the same timezone yields `PST` for winter kickoffs and `PDT` for summer ones.
///
/// # Example
/// ```
/// use mls_schedule::export::localize_kickoff;
///
/// let kickoff = localize_kickoff("2026-03-01T02:30:00Z", chrono_tz::America::Los_Angeles).unwrap();
/// assert_eq!(kickoff.date, "2026-02-28");
/// assert_eq!(kickoff.time, "6:30 PM");
/// assert_eq!(kickoff.zone, "PST");
/// ```
pub fn localize_kickoff(raw: &str, tz: Tz) -> Result<LocalKickoff, AppError> {
    let instant = DateTime::parse_from_rfc3339(raw.trim()).map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid kickoff time '{raw}': {e}"))
    })?;
    let local = instant.with_timezone(&tz);

    Ok(LocalKickoff {
        date: local.format(MATCH_DATE_FORMAT).to_string(),
        time: local.format(GAME_TIME_FORMAT).to_string(),
        zone: local.format(TIMEZONE_FORMAT).to_string(),
    })
}
