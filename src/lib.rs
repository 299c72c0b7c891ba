//! MLS season schedule fetcher and CSV exporter
//!
//! The library has two halves that share nothing but a directory of cached
//! week files:
//!
//! - [`data_fetcher`] walks fixed 7-day windows over the season, requests each
//!   uncached window from the stats API and stores the raw JSON per week.
//! - [`export`] reads the cached weeks in numeric order and writes one CSV with
//!   kickoff dates and times converted into a fixed local timezone.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mls_schedule::config::Config;
//! use mls_schedule::data_fetcher::{WeekCache, create_http_client, fetch_season};
//! use mls_schedule::export::export_schedule;
//! use mls_schedule::error::AppError;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     config.validate()?;
//!
//!     let client = create_http_client(&config)?;
//!     let summary = fetch_season(&client, &config, &WeekCache::from_config(&config)).await?;
//!     println!("{} weeks fetched", summary.fetched);
//!
//!     export_schedule(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{FetchSummary, WeekCache, WeekWindow, fetch_season};
pub use error::AppError;
pub use export::{ExportOutcome, MatchRow, export_schedule};
