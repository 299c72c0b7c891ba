use mls_schedule::config::Config;
use mls_schedule::data_fetcher::{FetchSummary, WeekCache, create_http_client, fetch_season};
use mls_schedule::error::AppError;
use mls_schedule::export::{ExportOutcome, export_schedule};

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config, config_path: &str) {
    config.display(config_path);
}

/// Handles the --init-config command.
///
/// Writes the effective configuration (defaults merged with environment and
/// command line overrides) so it can be edited in place.
pub async fn handle_init_config_command(config: &Config, config_path: &str) -> Result<(), AppError> {
    config.save_to_path(config_path).await?;
    println!("Config written to {config_path}");
    Ok(())
}

/// Handles the `fetch` subcommand.
///
/// Per-week failures are reported but never turn into an error here; the
/// completion message is printed whatever happened to individual weeks.
pub async fn handle_fetch_command(config: &Config) -> Result<FetchSummary, AppError> {
    let client = create_http_client(config)?;
    let cache = WeekCache::from_config(config);

    let summary = fetch_season(&client, config, &cache).await?;

    println!("\nData collection complete!");
    println!(
        "  Fetched: {}  Skipped: {}  Failed: {}",
        summary.fetched,
        summary.skipped,
        summary.failed.len()
    );
    if !summary.failed.is_empty() {
        println!(
            "  Failed weeks (run again to retry): {}",
            join_weeks(&summary.failed)
        );
    }
    if !summary.possibly_truncated.is_empty() {
        println!(
            "  Weeks at the {}-match page limit, possibly incomplete: {}",
            config.per_page,
            join_weeks(&summary.possibly_truncated)
        );
    }

    Ok(summary)
}

/// Handles the `export` subcommand.
pub async fn handle_export_command(config: &Config) -> Result<(), AppError> {
    println!("Processing JSON files to CSV...\n");

    match export_schedule(config).await? {
        ExportOutcome::Written { path, rows } => {
            println!("\n✓ CSV file created: {}", path.display());
            println!("  Total matches: {rows}");
        }
        ExportOutcome::NoMatches => println!("No matches found!"),
    }

    Ok(())
}

fn join_weeks(weeks: &[u32]) -> String {
    weeks
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
