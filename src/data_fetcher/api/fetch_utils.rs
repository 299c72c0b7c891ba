//! Single-request fetch with status and body classification

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// A successful weekly response: the body exactly as received, plus its parsed form.
#[derive(Debug, Clone)]
pub struct WeekResponse {
    pub body: String,
    pub payload: Value,
}

/// Issues one GET and accepts the response only if it is 2xx with a JSON body.
///
/// There is no retry: a failed week is left uncached and picked up by a later run.
///
/// # Errors
/// * Transport failures map to `NetworkTimeout`, `NetworkConnection` or `ApiFetch`
/// * Non-2xx statuses map to the matching `Api*` variant
/// * Empty bodies map to `ApiNoData`, non-JSON bodies to `ApiMalformedJson`
#[instrument(skip(client))]
pub async fn fetch_week(client: &Client, url: &str) -> Result<WeekResponse, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", body.len());

    if body.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(payload) => Ok(WeekResponse { body, payload }),
        Err(e) => {
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );
            Err(AppError::api_malformed_json(e.to_string(), url))
        }
    }
}
