use crate::cli::Args;
use bcci_feed::config::Config;
use bcci_feed::error::AppError;
use bcci_feed::tools::{CricketTools, ResourceRegistry, ToolRegistry, register_all};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parses the `--args` payload. Missing arguments mean an empty object.
pub fn parse_tool_args(raw: Option<&str>) -> Result<Value, AppError> {
    match raw {
        None => Ok(Value::Object(Default::default())),
        Some(raw) => {
            let value: Value = serde_json::from_str(raw).map_err(|e| {
                AppError::invalid_argument(format!("--args is not valid JSON: {e}"))
            })?;
            if !value.is_object() {
                return Err(AppError::invalid_argument("--args must be a JSON object"));
            }
            Ok(value)
        }
    }
}

fn build_registries(config: &Config) -> Result<(ToolRegistry, ResourceRegistry), AppError> {
    let tools = Arc::new(CricketTools::from_config(config)?);
    Ok(register_all(tools))
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", bcci_feed::NAME, bcci_feed::VERSION);
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored_from_path(&Config::get_config_path()).await?;

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Handles the --cache-info command.
pub async fn handle_cache_info_command(config: &Config) -> Result<(), AppError> {
    let tools = CricketTools::from_config(config)?;
    let cache = tools.client().cache();
    let entries = cache.entries().await?;

    println!("Cache Directory:");
    println!("{}", cache.dir().display());
    println!("────────────────────────────────────");
    if entries.is_empty() {
        println!("(No cached feeds)");
    }
    for entry in entries {
        println!(
            "{} {} bytes, written {}, age {}s, {}",
            entry.file_name,
            entry.size_bytes,
            entry.written_at.format("%Y-%m-%d %H:%M:%S UTC"),
            entry.age.as_secs(),
            if entry.is_fresh { "fresh" } else { "stale" }
        );
    }
    Ok(())
}

/// Handles the --list-tools and --list-resources commands.
pub fn handle_list_command(config: &Config, args: &Args) -> Result<(), AppError> {
    let (tools, resources) = build_registries(config)?;
    if args.list_tools {
        print_json(&tools.list())?;
    }
    if args.list_resources {
        print_json(&resources.list())?;
    }
    Ok(())
}

/// Handles the --tool command: runs one tool and prints its JSON result.
pub async fn handle_tool_command(
    config: &Config,
    name: &str,
    raw_args: Option<&str>,
) -> Result<(), AppError> {
    let tool_args = parse_tool_args(raw_args)?;
    let (tools, _) = build_registries(config)?;

    info!("Running tool {name}");
    let result = tools.call(name, tool_args).await?;
    print_json(&result)
}

/// Handles the --resource command: prints the resource payload as-is.
pub async fn handle_resource_command(config: &Config, uri: &str) -> Result<(), AppError> {
    let (_, resources) = build_registries(config)?;

    info!("Reading resource {uri}");
    let payload = resources.read(uri).await?;
    println!("{payload}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tool_args() {
        assert_eq!(parse_tool_args(None).unwrap(), json!({}));
        assert_eq!(
            parse_tool_args(Some(r#"{"competition_id": 326}"#)).unwrap(),
            json!({"competition_id": 326})
        );
        assert!(matches!(
            parse_tool_args(Some("[1, 2]")),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_tool_args(Some("{not json")),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
