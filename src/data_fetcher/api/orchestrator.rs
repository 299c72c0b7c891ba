//! Season fetch loop: one request per uncached week window

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{error, info, instrument, warn};

use super::fetch_utils::fetch_week;
use super::urls::build_week_url;
use crate::config::Config;
use crate::data_fetcher::cache::WeekCache;
use crate::data_fetcher::models::schedule_len;
use crate::data_fetcher::{WeekWindow, season_windows};
use crate::error::AppError;

/// Per-run tally of the fetch loop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Weeks fetched and written to the cache during this run.
    pub fetched: usize,
    /// Weeks already cached; no request was made for them.
    pub skipped: usize,
    /// Week indices that failed and remain uncached.
    pub failed: Vec<u32>,
    /// Week indices whose match count reached the page-size ceiling.
    pub possibly_truncated: Vec<u32>,
}

impl FetchSummary {
    /// Number of weeks that went to the network.
    pub fn attempted(&self) -> usize {
        self.fetched + self.failed.len()
    }
}

#[derive(Debug)]
struct StoredWeek {
    path: PathBuf,
    match_count: Option<usize>,
}

/// Fetches every configured week window into the cache.
///
/// Weeks whose cache file already exists are skipped without a request.
/// Failures are logged and isolated to their week; the loop always visits
/// every window. After each attempted request the configured delay is applied,
/// whatever the outcome.
///
/// # Errors
/// Request failures (see [`AppError::is_fetch_failure`]) and cache write
/// failures are recorded per week. Anything else aborts the run, such as a
/// cache directory that cannot be created or a base URL that cannot carry
/// the query parameters.
///
/// # Known limitation
/// Only the first `per_page` matches of a window are requested. When a window
/// returns that many, it is logged and listed in `possibly_truncated`.
#[instrument(skip_all, fields(weeks = config.season.total_weeks))]
pub async fn fetch_season(
    client: &Client,
    config: &Config,
    cache: &WeekCache,
) -> Result<FetchSummary, AppError> {
    cache.ensure_dir().await?;

    let delay = Duration::from_millis(config.request_delay_ms);
    let mut summary = FetchSummary::default();

    info!(
        "Starting data collection for {} weeks...",
        config.season.total_weeks
    );

    for window in season_windows(config.season.start_date, config.season.total_weeks) {
        if cache.contains(window.index).await {
            info!("Week {} already exists, skipping...", window.index);
            summary.skipped += 1;
            continue;
        }

        info!(
            "Fetching week {}: {} to {}...",
            window.index,
            window.start_param(),
            window.end_param()
        );

        match fetch_and_store(client, config, cache, &window).await {
            Ok(stored) => {
                info!("Saved week {} to {}", window.index, stored.path.display());
                summary.fetched += 1;

                if let Some(count) = stored.match_count
                    && count >= config.per_page as usize
                {
                    warn!(
                        "Week {} returned {} matches, the per_page ceiling of {}; later matches may be missing",
                        window.index, count, config.per_page
                    );
                    summary.possibly_truncated.push(window.index);
                }
            }
            Err(e) if e.is_fetch_failure() || matches!(e, AppError::Io(_)) => {
                error!("Failed to fetch week {}: {}", window.index, e);
                summary.failed.push(window.index);
            }
            Err(e) => return Err(e),
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    info!(
        "Data collection complete: {} fetched, {} skipped, {} failed",
        summary.fetched,
        summary.skipped,
        summary.failed.len()
    );

    Ok(summary)
}

async fn fetch_and_store(
    client: &Client,
    config: &Config,
    cache: &WeekCache,
    window: &WeekWindow,
) -> Result<StoredWeek, AppError> {
    let url = build_week_url(config, window)?;
    let response = fetch_week(client, url.as_str()).await?;
    let match_count = schedule_len(&response.payload);
    let path = cache.store(window.index, &response.body).await?;
    Ok(StoredWeek { path, match_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use tempfile::tempdir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    fn test_config(base_url: &str, data_dir: &std::path::Path, weeks: u32) -> Config {
        let mut config = Config {
            api_base_url: format!("{base_url}/matches/seasons/MLS-SEA-0001KA"),
            data_dir: data_dir.to_string_lossy().to_string(),
            request_delay_ms: 0,
            ..Config::default()
        };
        config.season.total_weeks = weeks;
        config
    }

    fn week_body(teams: &[(&str, &str)]) -> serde_json::Value {
        json!({
            "schedule": teams
                .iter()
                .map(|(home, away)| json!({
                    "match_day": 1,
                    "planned_kickoff_time": "2026-02-22T03:30:00Z",
                    "home_team_short_name": home,
                    "away_team_short_name": away,
                }))
                .collect::<Vec<_>>()
        })
    }

    #[tokio::test]
    async fn test_fetch_season_sends_window_query_and_headers() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let config = test_config(&mock_server.uri(), temp_dir.path(), 1);

        Mock::given(method("GET"))
            .and(path("/matches/seasons/MLS-SEA-0001KA"))
            .and(query_param("match_date[gte]", "2026-02-16"))
            .and(query_param("match_date[lte]", "2026-02-22"))
            .and(query_param("competition_id", "MLS-COM-000001"))
            .and(query_param("per_page", "100"))
            .and(query_param(
                "sort",
                "planned_kickoff_time:asc,home_team_name:asc",
            ))
            .and(header("accept", "application/json"))
            .and(header("user-agent", "curl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(week_body(&[("LAFC", "SEA")])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = WeekCache::from_config(&config);
        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.fetched, 1);
        assert!(summary.failed.is_empty());
        assert!(cache.contains(1).await);
    }

    #[tokio::test]
    async fn test_fetch_season_skips_cached_weeks_without_requests() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let config = test_config(&mock_server.uri(), temp_dir.path(), 3);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(week_body(&[])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let cache = WeekCache::from_config(&config);
        for index in 1..=3 {
            cache.store(index, "{\"schedule\": []}").await.unwrap();
        }

        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.attempted(), 0);
    }

    #[tokio::test]
    async fn test_fetch_season_isolates_failed_weeks() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let config = test_config(&mock_server.uri(), temp_dir.path(), 3);

        // Week 2 errors, week 3 returns a non-JSON body
        Mock::given(method("GET"))
            .and(query_param("match_date[gte]", "2026-02-23"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("match_date[gte]", "2026-03-02"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("match_date[gte]", "2026-02-16"))
            .respond_with(ResponseTemplate::new(200).set_body_json(week_body(&[("ATL", "CLT")])))
            .mount(&mock_server)
            .await;

        let cache = WeekCache::from_config(&config);
        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.fetched, 1);
        assert_eq!(summary.failed, vec![2, 3]);
        assert!(cache.contains(1).await);
        assert!(!cache.contains(2).await, "failed week must stay uncached");
        assert!(!cache.contains(3).await, "unparseable week must stay uncached");
    }

    #[tokio::test]
    async fn test_fetch_season_retries_previously_failed_week() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let config = test_config(&mock_server.uri(), temp_dir.path(), 2);
        let cache = WeekCache::from_config(&config);
        cache.store(1, "{}").await.unwrap();

        Mock::given(method("GET"))
            .and(query_param("match_date[gte]", "2026-02-23"))
            .respond_with(ResponseTemplate::new(200).set_body_json(week_body(&[])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.fetched, 1);
    }

    #[tokio::test]
    async fn test_fetch_season_flags_full_pages() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let mut config = test_config(&mock_server.uri(), temp_dir.path(), 1);
        config.per_page = 2;

        Mock::given(method("GET"))
            .and(query_param("per_page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(week_body(&[("ATL", "CLT"), ("LAFC", "SEA")])),
            )
            .mount(&mock_server)
            .await;

        let cache = WeekCache::from_config(&config);
        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.fetched, 1);
        assert_eq!(summary.possibly_truncated, vec![1]);
    }

    #[tokio::test]
    async fn test_fetch_season_creates_cache_directory() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let data_dir = temp_dir.path().join("data");
        let config = test_config(&mock_server.uri(), &data_dir, 1);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let cache = WeekCache::from_config(&config);
        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.fetched, 1);
        assert!(data_dir.join("week1.json").exists());
    }

    #[tokio::test]
    async fn test_fetch_season_counts_cache_write_failure_as_failed_week() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let config = test_config(&mock_server.uri(), temp_dir.path(), 2);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(week_body(&[])))
            .expect(2)
            .mount(&mock_server)
            .await;

        // A directory in place of the partial file makes the write fail
        std::fs::create_dir(temp_dir.path().join("week1.json.part")).unwrap();

        let cache = WeekCache::from_config(&config);
        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();

        assert_eq!(summary.failed, vec![1]);
        assert_eq!(summary.fetched, 1);
        assert!(!cache.contains(1).await);
        assert!(cache.contains(2).await);
    }

    #[tokio::test]
    async fn test_fetch_season_delays_after_attempts_only() {
        let mock_server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        let mut config = test_config(&mock_server.uri(), temp_dir.path(), 3);
        config.request_delay_ms = 500;

        Mock::given(method("GET"))
            .and(query_param("match_date[gte]", "2026-02-23"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("match_date[gte]", "2026-03-02"))
            .respond_with(ResponseTemplate::new(200).set_body_json(week_body(&[])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = WeekCache::from_config(&config);
        cache.ensure_dir().await.unwrap();
        cache.store(1, "{\"schedule\": []}").await.unwrap();

        let started = std::time::Instant::now();
        let summary = fetch_season(&create_test_http_client(), &config, &cache)
            .await
            .unwrap();
        let elapsed = started.elapsed();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, vec![2]);
        assert_eq!(summary.fetched, 1);
        // Two attempted weeks sleep 500 ms each; the cached week adds nothing
        assert!(
            elapsed >= Duration::from_millis(1000),
            "elapsed {elapsed:?}"
        );
        assert!(elapsed < Duration::from_millis(1500), "elapsed {elapsed:?}");
    }
}
