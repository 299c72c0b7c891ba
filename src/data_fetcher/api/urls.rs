//! URL building utilities for the weekly schedule endpoint

use crate::config::Config;
use crate::data_fetcher::WeekWindow;
use crate::error::AppError;
use reqwest::Url;

/// Query parameters for one week window, in request order.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use mls_schedule::config::Config;
/// use mls_schedule::data_fetcher::{WeekWindow, api::build_week_query};
///
/// let window = WeekWindow::new(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(), 1).unwrap();
/// let query = build_week_query(&Config::default(), &window);
/// assert_eq!(query[0], ("match_date[gte]", "2026-02-16".to_string()));
/// assert_eq!(query[1], ("match_date[lte]", "2026-02-22".to_string()));
/// ```
pub fn build_week_query(config: &Config, window: &WeekWindow) -> Vec<(&'static str, String)> {
    vec![
        ("match_date[gte]", window.start_param()),
        ("match_date[lte]", window.end_param()),
        ("competition_id", config.competition_id.clone()),
        ("per_page", config.per_page.to_string()),
        ("sort", config.sort.clone()),
    ]
}

/// Builds the full request URL for one week window.
pub fn build_week_url(config: &Config, window: &WeekWindow) -> Result<Url, AppError> {
    Url::parse_with_params(&config.api_base_url, &build_week_query(config, window)).map_err(|e| {
        AppError::config_error(format!(
            "Invalid API base URL '{}': {e}",
            config.api_base_url
        ))
    })
}
