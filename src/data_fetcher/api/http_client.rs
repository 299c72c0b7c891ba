//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates the HTTP client used for every weekly schedule request.
///
/// Every request carries `Accept: application/json` and the configured static
/// `User-Agent`. No timeout is set unless `http_timeout_seconds` is configured,
/// leaving the reqwest default in place.
pub fn create_http_client(config: &Config) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .default_headers(headers)
        .user_agent(config.user_agent.as_str());

    if let Some(timeout_seconds) = config.http_timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_seconds));
    }

    Ok(builder.build()?)
}

/// Creates an HTTP client for testing with default settings
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(&Config::default()).expect("Failed to create test HTTP client")
}
