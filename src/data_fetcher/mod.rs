pub mod api;
pub mod cache;
pub mod models;
pub mod week_window;

pub use api::{FetchSummary, create_http_client, fetch_season};
pub use cache::{CachedWeek, WeekCache};
pub use models::{MatchDay, ScheduleMatch};
pub use week_window::{WeekWindow, season_windows};
