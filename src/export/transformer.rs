use std::path::PathBuf;

use chrono_tz::Tz;
use tracing::{debug, info, instrument};

use super::csv_output::{MatchRow, write_csv};
use super::time_formatting::localize_kickoff;
use crate::config::Config;
use crate::data_fetcher::cache::WeekCache;
use crate::data_fetcher::models::{ScheduleMatch, parse_week_payload};
use crate::error::AppError;

/// Result of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The CSV was written with this many data rows.
    Written { path: PathBuf, rows: usize },
    /// No cached week contained any match; no file was written.
    NoMatches,
}

/// Builds the output row for one scheduled match.
pub fn match_row(scheduled: &ScheduleMatch, tz: Tz) -> Result<MatchRow, AppError> {
    let kickoff = localize_kickoff(&scheduled.planned_kickoff_time, tz)?;

    Ok(MatchRow {
        match_week: scheduled
            .match_day
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        match_date: kickoff.date,
        home_team: scheduled.home_team_short_name.clone(),
        away_team: scheduled.away_team_short_name.clone(),
        game_time: kickoff.time,
        timezone: kickoff.zone,
    })
}

/// Reads every cached week in numeric week order and converts its matches,
/// preserving payload order within each week.
///
/// A week without a `schedule` key contributes nothing. Malformed JSON or an
/// unparseable kickoff aborts the whole run.
#[instrument(skip(cache), fields(dir = %cache.dir().display()))]
pub async fn collect_rows(cache: &WeekCache, tz: Tz) -> Result<Vec<MatchRow>, AppError> {
    let mut rows = Vec::new();

    for week in cache.discover().await? {
        info!("Processing {}...", week.path.display());

        let text = tokio::fs::read_to_string(&week.path).await?;
        let Some(matches) = parse_week_payload(&text)
            .map_err(|e| AppError::cache_parse(week.path.display().to_string(), e.to_string()))?
        else {
            debug!("Week {} has no schedule", week.index);
            continue;
        };

        debug!("Week {} lists {} matches", week.index, matches.len());
        for scheduled in &matches {
            rows.push(match_row(scheduled, tz)?);
        }
    }

    Ok(rows)
}

/// Converts the cache directory into the consolidated CSV.
pub async fn export_schedule(config: &Config) -> Result<ExportOutcome, AppError> {
    let tz = config.target_timezone()?;
    let cache = WeekCache::from_config(config);

    let rows = collect_rows(&cache, tz).await?;
    if rows.is_empty() {
        info!("No matches found in {}", cache.dir().display());
        return Ok(ExportOutcome::NoMatches);
    }

    let path = PathBuf::from(&config.output_file);
    write_csv(&path, &rows)?;
    info!("Wrote {} matches to {}", rows.len(), path.display());

    Ok(ExportOutcome::Written {
        path,
        rows: rows.len(),
    })
}
