//! Cache-to-CSV export: numeric week order, payload order within a week,
//! kickoffs converted to the configured timezone.

pub mod csv_output;
pub mod time_formatting;
pub mod transformer;

pub use csv_output::{CSV_HEADER, MatchRow, write_csv};
pub use time_formatting::{LocalKickoff, localize_kickoff};
pub use transformer::{ExportOutcome, collect_rows, export_schedule, match_row};
