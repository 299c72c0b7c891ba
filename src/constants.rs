//! Application-wide constants and default configuration values
//!
//! Defaults describe the MLS 2026 regular season. Every value here can be
//! overridden through the config file, environment variables or CLI flags.

/// Stats API endpoint for the MLS 2026 season schedule
pub const DEFAULT_API_BASE_URL: &str =
    "https://stats-api.mlssoccer.com/matches/seasons/MLS-SEA-0001KA";

/// Competition identifier for MLS regular season matches
pub const DEFAULT_COMPETITION_ID: &str = "MLS-COM-000001";

/// Page-size ceiling sent with every weekly request
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Kickoff time ascending, then home team name ascending
pub const DEFAULT_SORT: &str = "planned_kickoff_time:asc,home_team_name:asc";

/// The stats API rejects some browser-like agents; a static curl agent is accepted
pub const DEFAULT_USER_AGENT: &str = "curl";

/// Delay applied after every attempted week request
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// First day of week window 1
pub const DEFAULT_SEASON_START: &str = "2026-02-16";

/// 38 windows run from 2026-02-16 through 2026-11-08
pub const DEFAULT_TOTAL_WEEKS: u32 = 38;

/// Length of a week window in days
pub const DAYS_PER_WEEK: u64 = 7;

/// Directory holding cached week files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Cache file naming: `<prefix><week index><suffix>`
pub const DEFAULT_CACHE_FILE_PREFIX: &str = "week";
pub const CACHE_FILE_SUFFIX: &str = ".json";

/// Extension used while a cache file is being written
pub const PARTIAL_FILE_EXTENSION: &str = "part";

/// Consolidated CSV export
pub const DEFAULT_OUTPUT_FILE: &str = "mls_2026_schedule.csv";

/// All kickoff times are reported in Pacific time
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "mls_schedule";

/// Default log file name
pub const LOG_FILE_NAME: &str = "mls_schedule.log";

/// Environment variable names
pub mod env_vars {
    /// Override for the schedule endpoint
    pub const API_BASE_URL: &str = "MLS_API_BASE_URL";

    /// Override for the cache directory
    pub const DATA_DIR: &str = "MLS_DATA_DIR";

    /// Override for the CSV output path
    pub const OUTPUT_FILE: &str = "MLS_OUTPUT_FILE";

    /// Override for the target timezone (IANA name)
    pub const TIMEZONE: &str = "MLS_TIMEZONE";

    /// Override for the inter-request delay in milliseconds
    pub const REQUEST_DELAY_MS: &str = "MLS_REQUEST_DELAY_MS";

    /// HTTP timeout in seconds; unset means the client default
    pub const HTTP_TIMEOUT: &str = "MLS_HTTP_TIMEOUT";

    /// Override for the log file path
    pub const LOG_FILE: &str = "MLS_LOG_FILE";
}
