use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Key of the match list in a weekly schedule payload.
pub const SCHEDULE_KEY: &str = "schedule";

/// Match week as supplied by the API. Usually numeric, occasionally a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchDay {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MatchDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchDay::Number(number) => write!(f, "{number}"),
            MatchDay::Text(text) => f.write_str(text),
        }
    }
}

/// One entry of the `schedule` array. Fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMatch {
    #[serde(default)]
    pub match_day: Option<MatchDay>,
    /// Kickoff instant with its own UTC offset, e.g. `2026-03-01T02:30:00Z`.
    pub planned_kickoff_time: String,
    pub home_team_short_name: String,
    pub away_team_short_name: String,
}

/// Extracts the match list from a cached weekly payload.
///
/// Returns `Ok(None)` when the document has no `schedule` key (or it is null),
/// which means the week contributes no matches. Malformed JSON or schedule
/// entries of the wrong shape are errors.
pub fn parse_week_payload(text: &str) -> Result<Option<Vec<ScheduleMatch>>, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    match value.get(SCHEDULE_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(schedule) => Vec::<ScheduleMatch>::deserialize(schedule).map(Some),
    }
}

/// Number of entries in the payload's `schedule` array, if there is one.
pub fn schedule_len(payload: &Value) -> Option<usize> {
    payload
        .get(SCHEDULE_KEY)
        .and_then(Value::as_array)
        .map(Vec::len)
}
