use std::path::Path;

use crate::error::AppError;

/// Header row of the schedule export.
pub const CSV_HEADER: [&str; 6] = [
    "Match Week",
    "Match Date",
    "Home Team",
    "Away Team",
    "Game Time",
    "Timezone",
];

/// One exported match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub match_week: String,
    pub match_date: String,
    pub home_team: String,
    pub away_team: String,
    pub game_time: String,
    pub timezone: String,
}

impl MatchRow {
    /// Fields in header order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.match_week.as_str(),
            self.match_date.as_str(),
            self.home_team.as_str(),
            self.away_team.as_str(),
            self.game_time.as_str(),
            self.timezone.as_str(),
        ]
    }
}

/// Writes the header and every row to `path` in one pass, replacing any
/// existing file. Fields are quoted only when they need it.
pub fn write_csv(path: &Path, rows: &[MatchRow]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;

    Ok(())
}
