use super::Config;
use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - Page size and week count must be at least 1
/// - Cache file prefix cannot be empty or purely numeric, otherwise
///   file names could not be mapped back to a week index
/// - Timezone must be a known IANA name
/// - Data directory and output file cannot be empty
/// - If log file path is provided, it cannot be empty
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
    {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https://, got '{}'",
            config.api_base_url
        )));
    }

    if config.per_page == 0 {
        return Err(AppError::config_error("per_page must be at least 1"));
    }

    if config.season.total_weeks == 0 {
        return Err(AppError::config_error("season.total_weeks must be at least 1"));
    }

    if config.season.end_date().is_none() {
        return Err(AppError::config_error(
            "season.total_weeks runs past the supported date range",
        ));
    }

    if config.cache_file_prefix.is_empty() {
        return Err(AppError::config_error("cache_file_prefix cannot be empty"));
    }

    if config.cache_file_prefix.ends_with(|c: char| c.is_ascii_digit()) {
        return Err(AppError::config_error(
            "cache_file_prefix cannot end with a digit",
        ));
    }

    if config.data_dir.is_empty() {
        return Err(AppError::config_error("data_dir cannot be empty"));
    }

    if config.output_file.is_empty() {
        return Err(AppError::config_error("output_file cannot be empty"));
    }

    config.target_timezone()?;

    if let Some(log_path) = &config.log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
