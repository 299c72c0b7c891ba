// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, Command};
use commands::{
    handle_export_command, handle_fetch_command, handle_init_config_command,
    handle_list_config_command,
};
use logging::setup_logging;
use mls_schedule::config::Config;
use mls_schedule::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(Config::get_config_path);
    let mut config = Config::load(Some(config_path.as_str())).await?;
    // Flags take precedence over file and environment, so validate last
    args.apply_overrides(&mut config);
    config.validate()?;

    // Handle configuration operations before any logging or network setup
    if args.init_config {
        return handle_init_config_command(&config, &config_path).await;
    }

    if args.list_config {
        handle_list_config_command(&config, &config_path);
        return Ok(());
    }

    let Some(command) = &args.command else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    match command {
        Command::Fetch(_) => {
            handle_fetch_command(&config).await?;
        }
        Command::Export(_) => handle_export_command(&config).await?,
        Command::Run { .. } => {
            handle_fetch_command(&config).await?;
            println!();
            handle_export_command(&config).await?;
        }
    }

    Ok(())
}
