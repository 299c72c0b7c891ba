use crate::constants::{self, env_vars};
use crate::error::AppError;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Season window settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SeasonConfig {
    /// First day of week window 1.
    #[serde(default = "default_season_start")]
    pub start_date: NaiveDate,
    /// Number of consecutive 7-day windows to fetch.
    #[serde(default = "default_total_weeks")]
    pub total_weeks: u32,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig {
            start_date: default_season_start(),
            total_weeks: default_total_weeks(),
        }
    }
}

impl SeasonConfig {
    /// Last calendar day covered by the configured windows.
    pub fn end_date(&self) -> Option<NaiveDate> {
        crate::data_fetcher::WeekWindow::new(self.start_date, self.total_weeks)
            .map(|window| window.end)
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Schedule endpoint; weekly query parameters are appended to it.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_competition_id")]
    pub competition_id: String,
    /// Page-size ceiling per weekly request. Matches beyond it are not fetched.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Pause after every attempted week, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// HTTP timeout in seconds. When unset the client default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Directory holding cached week files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_cache_file_prefix")]
    pub cache_file_prefix: String,
    /// Path of the consolidated CSV export.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// IANA timezone all kickoff times are converted into.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    #[serde(default)]
    pub season: SeasonConfig,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_competition_id() -> String {
    constants::DEFAULT_COMPETITION_ID.to_string()
}

fn default_per_page() -> u32 {
    constants::DEFAULT_PER_PAGE
}

fn default_sort() -> String {
    constants::DEFAULT_SORT.to_string()
}

fn default_user_agent() -> String {
    constants::DEFAULT_USER_AGENT.to_string()
}

fn default_request_delay_ms() -> u64 {
    constants::DEFAULT_REQUEST_DELAY_MS
}

fn default_data_dir() -> String {
    constants::DEFAULT_DATA_DIR.to_string()
}

fn default_cache_file_prefix() -> String {
    constants::DEFAULT_CACHE_FILE_PREFIX.to_string()
}

fn default_output_file() -> String {
    constants::DEFAULT_OUTPUT_FILE.to_string()
}

fn default_timezone() -> String {
    constants::DEFAULT_TIMEZONE.to_string()
}

fn default_season_start() -> NaiveDate {
    NaiveDate::parse_from_str(constants::DEFAULT_SEASON_START, "%Y-%m-%d").unwrap_or_default()
}

fn default_total_weeks() -> u32 {
    constants::DEFAULT_TOTAL_WEEKS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            competition_id: default_competition_id(),
            per_page: default_per_page(),
            sort: default_sort(),
            user_agent: default_user_agent(),
            request_delay_ms: default_request_delay_ms(),
            http_timeout_seconds: None,
            data_dir: default_data_dir(),
            cache_file_prefix: default_cache_file_prefix(),
            output_file: default_output_file(),
            timezone: default_timezone(),
            log_file_path: None,
            season: SeasonConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default config file location
    /// when no path is given. A missing file yields the built-in defaults.
    /// Environment variables override file values.
    ///
    /// The result is not validated here, so that command-line overrides can
    /// still replace file or environment values; call [`Config::validate`]
    /// once every layer has been applied.
    ///
    /// # Environment Variables
    /// - `MLS_API_BASE_URL` - Override the schedule endpoint
    /// - `MLS_DATA_DIR` - Override the cache directory
    /// - `MLS_OUTPUT_FILE` - Override the CSV output path
    /// - `MLS_TIMEZONE` - Override the target timezone
    /// - `MLS_REQUEST_DELAY_MS` - Override the inter-request delay
    /// - `MLS_HTTP_TIMEOUT` - Set an HTTP timeout in seconds
    /// - `MLS_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Configuration with file and environment layers applied
    /// * `Err(AppError)` - Unreadable file or invalid TOML
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Applies `MLS_*` environment variable overrides in place.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(data_dir) = std::env::var(env_vars::DATA_DIR) {
            self.data_dir = data_dir;
        }

        if let Ok(output_file) = std::env::var(env_vars::OUTPUT_FILE) {
            self.output_file = output_file;
        }

        if let Ok(timezone) = std::env::var(env_vars::TIMEZONE) {
            self.timezone = timezone;
        }

        if let Some(delay) = std::env::var(env_vars::REQUEST_DELAY_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.request_delay_ms = delay;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Parses the configured target timezone.
    pub fn target_timezone(&self) -> Result<Tz, AppError> {
        self.timezone.parse::<Tz>().map_err(|e| {
            AppError::config_error(format!("Unknown timezone '{}': {e}", self.timezone))
        })
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration to stdout.
    ///
    /// # Arguments
    /// * `config_path` - Location the configuration was (or would be) loaded from
    pub fn display(&self, config_path: &str) {
        let log_dir = get_log_dir_path();
        let separator = "────────────────────────────────────";

        println!("\nCurrent Configuration");
        println!("{separator}");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(config_path).exists() {
            println!("(Not created, using defaults)");
        }
        println!("{separator}");
        println!("API Endpoint:");
        println!("{}", self.api_base_url);
        println!("Competition: {}", self.competition_id);
        println!("Page Size: {}", self.per_page);
        println!("Sort: {}", self.sort);
        println!("{separator}");
        println!("Season:");
        match self.season.end_date() {
            Some(end) => println!(
                "{} to {} ({} weeks)",
                self.season.start_date, end, self.season.total_weeks
            ),
            None => println!(
                "{} ({} weeks)",
                self.season.start_date, self.season.total_weeks
            ),
        }
        println!("{separator}");
        println!("Request Delay:");
        println!("{} ms", self.request_delay_ms);
        println!("HTTP Timeout:");
        match self.http_timeout_seconds {
            Some(timeout) => println!("{timeout} seconds"),
            None => println!("(Client default)"),
        }
        println!("{separator}");
        println!("Cache Directory:");
        println!("{}", self.data_dir);
        println!("CSV Output:");
        println!("{}", self.output_file);
        println!("Timezone:");
        println!("{}", self.timezone);
        println!("{separator}");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        if let Some(config_dir) = Path::new(path).parent()
            && !config_dir.as_os_str().is_empty()
            && !config_dir.exists()
        {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without environment overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
