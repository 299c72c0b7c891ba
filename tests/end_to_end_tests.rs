use mls_schedule::{
    config::Config,
    data_fetcher::{WeekCache, create_http_client, fetch_season},
    error::AppError,
    export::{ExportOutcome, collect_rows, export_schedule},
};
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: dir.join("data").to_string_lossy().to_string(),
        output_file: dir.join("schedule.csv").to_string_lossy().to_string(),
        request_delay_ms: 0,
        ..Config::default()
    }
}

fn schedule_entry(match_day: u32, kickoff: &str, home: &str, away: &str) -> serde_json::Value {
    json!({
        "match_day": match_day,
        "planned_kickoff_time": kickoff,
        "home_team_short_name": home,
        "away_team_short_name": away,
    })
}

async fn write_week(config: &Config, index: u32, payload: &serde_json::Value) {
    let cache = WeekCache::from_config(config);
    cache.ensure_dir().await.unwrap();
    cache
        .store(index, &serde_json::to_string_pretty(payload).unwrap())
        .await
        .unwrap();
}

/// A single LAFC vs SEA match in Pacific standard time produces exactly one data row
#[tokio::test]
async fn test_single_match_export_matches_expected_csv() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    write_week(
        &config,
        3,
        &json!({ "schedule": [schedule_entry(3, "2026-03-01T02:30:00Z", "LAFC", "SEA")] }),
    )
    .await;

    let outcome = export_schedule(&config).await.unwrap();
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: temp_dir.path().join("schedule.csv"),
            rows: 1,
        }
    );

    let content = std::fs::read_to_string(temp_dir.path().join("schedule.csv")).unwrap();
    assert_eq!(
        content,
        "Match Week,Match Date,Home Team,Away Team,Game Time,Timezone\r\n\
         3,2026-02-28,LAFC,SEA,6:30 PM,PST\r\n"
    );
}

/// k schedule records become k rows in payload order
#[tokio::test]
async fn test_row_count_and_order_follow_payload() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    let teams = [("NYC", "RBNY"), ("ATL", "CLT"), ("MIA", "ORL"), ("LAFC", "LA"), ("SEA", "POR")];
    let schedule: Vec<_> = teams
        .iter()
        .map(|(home, away)| schedule_entry(1, "2026-02-22T01:00:00Z", home, away))
        .collect();
    write_week(&config, 1, &json!({ "schedule": schedule })).await;

    let rows = collect_rows(
        &WeekCache::from_config(&config),
        config.target_timezone().unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), teams.len());
    for (row, (home, away)) in rows.iter().zip(teams.iter()) {
        assert_eq!(row.home_team, *home);
        assert_eq!(row.away_team, *away);
    }
}

/// DST and standard-time kickoffs in the same zone get different abbreviations
#[tokio::test]
async fn test_daylight_saving_abbreviations_differ_within_export() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    write_week(
        &config,
        1,
        &json!({ "schedule": [
            schedule_entry(2, "2026-03-01T02:30:00Z", "LAFC", "SEA"),
            schedule_entry(20, "2026-07-12T02:30:00Z", "SEA", "LAFC"),
        ]}),
    )
    .await;

    let rows = collect_rows(
        &WeekCache::from_config(&config),
        config.target_timezone().unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(rows[0].timezone, "PST");
    assert_eq!(rows[1].timezone, "PDT");
    assert_ne!(rows[0].timezone, rows[1].timezone);
}

/// week2.json is processed before week10.json
#[tokio::test]
async fn test_week_files_are_processed_in_numeric_order() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    write_week(
        &config,
        10,
        &json!({ "schedule": [schedule_entry(10, "2026-04-26T02:30:00Z", "TEN", "X")] }),
    )
    .await;
    write_week(
        &config,
        2,
        &json!({ "schedule": [schedule_entry(2, "2026-02-28T02:30:00Z", "TWO", "X")] }),
    )
    .await;

    export_schedule(&config).await.unwrap();

    let content = std::fs::read_to_string(&config.output_file).unwrap();
    let homes: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap())
        .collect();
    assert_eq!(homes, vec!["TWO", "TEN"]);
}

/// A cached week without a schedule key contributes nothing and raises no error
#[tokio::test]
async fn test_missing_schedule_key_contributes_no_rows() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    write_week(&config, 1, &json!({ "page": 1, "total": 0 })).await;
    write_week(
        &config,
        2,
        &json!({ "schedule": [schedule_entry(2, "2026-02-28T02:30:00Z", "LAFC", "SEA")] }),
    )
    .await;

    let outcome = export_schedule(&config).await.unwrap();
    assert!(matches!(outcome, ExportOutcome::Written { rows: 1, .. }));
}

/// Malformed JSON already on disk aborts the whole export
#[tokio::test]
async fn test_malformed_cache_file_fails_export() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    write_week(
        &config,
        1,
        &json!({ "schedule": [schedule_entry(1, "2026-02-22T02:30:00Z", "LAFC", "SEA")] }),
    )
    .await;
    std::fs::write(Path::new(&config.data_dir).join("week2.json"), "{ not json").unwrap();

    let result = export_schedule(&config).await;
    assert!(matches!(result, Err(AppError::CacheParse { .. })));
    assert!(!Path::new(&config.output_file).exists());
}

/// An empty cache directory reports no matches and writes no file
#[tokio::test]
async fn test_empty_cache_reports_no_matches() {
    let temp_dir = tempdir().unwrap();
    let config = config_for(temp_dir.path());

    let outcome = export_schedule(&config).await.unwrap();
    assert_eq!(outcome, ExportOutcome::NoMatches);
    assert!(!Path::new(&config.output_file).exists());
}

/// Fetch two weeks from a mock API, then export them; a second fetch makes no requests
#[tokio::test]
async fn test_fetch_then_export_round() {
    let mock_server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let mut config = config_for(temp_dir.path());
    config.api_base_url = format!("{}/matches/seasons/MLS-SEA-0001KA", mock_server.uri());
    config.season.total_weeks = 2;

    Mock::given(method("GET"))
        .and(path("/matches/seasons/MLS-SEA-0001KA"))
        .and(query_param("match_date[gte]", "2026-02-16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule": [schedule_entry(1, "2026-02-22T03:30:00Z", "LAFC", "SEA")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/matches/seasons/MLS-SEA-0001KA"))
        .and(query_param("match_date[gte]", "2026-02-23"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule": [schedule_entry(2, "2026-03-01T02:30:00Z", "SEA", "POR")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_http_client(&config).unwrap();
    let cache = WeekCache::from_config(&config);

    let first = fetch_season(&client, &config, &cache).await.unwrap();
    assert_eq!(first.fetched, 2);

    let second = fetch_season(&client, &config, &cache).await.unwrap();
    assert_eq!(second.skipped, 2);
    assert_eq!(second.attempted(), 0);

    export_schedule(&config).await.unwrap();
    let content = std::fs::read_to_string(&config.output_file).unwrap();
    assert_eq!(
        content,
        "Match Week,Match Date,Home Team,Away Team,Game Time,Timezone\r\n\
         1,2026-02-21,LAFC,SEA,7:30 PM,PST\r\n\
         2,2026-02-28,SEA,POR,6:30 PM,PST\r\n"
    );
}
