pub mod schedule;

pub use schedule::{MatchDay, ScheduleMatch, parse_week_payload, schedule_len};
