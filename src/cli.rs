use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use mls_schedule::config::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// MLS season schedule exporter
///
/// Fetches the season schedule one week at a time from the MLS stats API,
/// caching each week's raw response as JSON, then flattens the cache into a
/// single CSV with kickoff times in a local timezone.
///
/// Cached weeks are never fetched again; delete a week's file to refresh it.
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Use a config file other than the default location.
    #[arg(
        long = "config",
        global = true,
        value_name = "PATH",
        help_heading = "Configuration"
    )]
    pub config_path: Option<String>,

    /// Directory for cached week files (overrides config).
    #[arg(long = "data-dir", global = true, help_heading = "Configuration")]
    pub data_dir: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the effective configuration to the config file location.
    #[arg(long = "init-config", help_heading = "Configuration")]
    pub init_config: bool,

    /// Log at debug level, including response sizes and ignored cache files.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch every uncached week window from the schedule API.
    Fetch(FetchArgs),
    /// Convert all cached weeks into the CSV export.
    Export(ExportArgs),
    /// Fetch, then export.
    Run {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchArgs {
    /// Number of week windows to fetch, starting at the season start.
    #[arg(long)]
    pub weeks: Option<u32>,

    /// Delay after each request in milliseconds.
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportArgs {
    /// CSV output path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// IANA timezone for match dates and times, e.g. America/New_York.
    #[arg(long)]
    pub timezone: Option<String>,
}

impl Args {
    /// Applies command line overrides on top of file and environment settings.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }

        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }

        let (fetch, export) = match &self.command {
            Some(Command::Fetch(fetch)) => (Some(fetch), None),
            Some(Command::Export(export)) => (None, Some(export)),
            Some(Command::Run { fetch, export }) => (Some(fetch), Some(export)),
            None => (None, None),
        };

        if let Some(fetch) = fetch {
            if let Some(weeks) = fetch.weeks {
                config.season.total_weeks = weeks;
            }
            if let Some(delay_ms) = fetch.delay_ms {
                config.request_delay_ms = delay_ms;
            }
        }

        if let Some(export) = export {
            if let Some(output) = &export.output {
                config.output_file = output.clone();
            }
            if let Some(timezone) = &export.timezone {
                config.timezone = timezone.clone();
            }
        }
    }
}
