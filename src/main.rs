// src/main.rs
mod cli;
mod commands;
mod logging;

use bcci_feed::config::Config;
use bcci_feed::error::AppError;
use clap::{CommandFactory, Parser};
use cli::{Args, is_config_update};
use commands::{
    handle_cache_info_command, handle_config_update_command, handle_list_command,
    handle_list_config_command, handle_resource_command, handle_tool_command,
    handle_version_command,
};
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle version flag first
    if args.version {
        handle_version_command();
        return Ok(());
    }

    // Handle configuration operations before logging is set up
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let config = Config::load().await?;

    if args.cache_info {
        return handle_cache_info_command(&config).await;
    }

    if args.list_tools || args.list_resources {
        return handle_list_command(&config, &args);
    }

    if let Some(tool) = &args.tool {
        return handle_tool_command(&config, tool, args.tool_args.as_deref()).await;
    }

    if let Some(uri) = &args.resource {
        return handle_resource_command(&config, uri).await;
    }

    // Nothing to do: show usage
    Args::command().print_help()?;
    Ok(())
}
