pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
// Re-export fetch entry points
pub use fetch_utils::{WeekResponse, fetch_week};
pub use orchestrator::{FetchSummary, fetch_season};
