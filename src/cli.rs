use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

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

/// BCCI scores feed client
///
/// Runs one registered tool or reads one resource and prints the result as
/// JSON on stdout. Competition catalogs are cached on disk for 24 hours.
///
/// Examples:
///   bcci_feed --tool get_live_tournaments
///   bcci_feed --tool get_match_summary --args '{"match_id": 999, "innings": 2}'
///   bcci_feed --resource bcci://competitions/international
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Name of the tool to run, see --list-tools
    #[arg(long = "tool", short = 't', value_name = "NAME", help_heading = "Tools")]
    pub tool: Option<String>,

    /// Tool arguments as a JSON object
    #[arg(
        long = "args",
        short = 'a',
        value_name = "JSON",
        requires = "tool",
        help_heading = "Tools"
    )]
    pub tool_args: Option<String>,

    /// URI of the resource to read, e.g. bcci://competitions/domestic
    #[arg(
        long = "resource",
        short = 'r',
        value_name = "URI",
        conflicts_with = "tool",
        help_heading = "Tools"
    )]
    pub resource: Option<String>,

    /// List registered tools with their parameters
    #[arg(long = "list-tools", help_heading = "Tools")]
    pub list_tools: bool,

    /// List registered resources
    #[arg(long = "list-resources", help_heading = "Tools")]
    pub list_resources: bool,

    /// Update API domain in config
    #[arg(long = "config", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show cached feed files with their age and freshness
    #[arg(long = "cache-info", help_heading = "Configuration")]
    pub cache_info: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write logs to stderr. Stdout stays reserved for JSON output.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// True when any configuration update was requested
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_tool_invocation() {
        let args = Args::try_parse_from([
            "bcci_feed",
            "--tool",
            "get_match_summary",
            "--args",
            r#"{"match_id": 999}"#,
        ])
        .unwrap();
        assert_eq!(args.tool.as_deref(), Some("get_match_summary"));
        assert_eq!(args.tool_args.as_deref(), Some(r#"{"match_id": 999}"#));
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_args_require_tool() {
        assert!(Args::try_parse_from(["bcci_feed", "--args", "{}"]).is_err());
    }

    #[test]
    fn test_tool_conflicts_with_resource() {
        let result = Args::try_parse_from([
            "bcci_feed",
            "--tool",
            "get_competitions",
            "--resource",
            "bcci://competitions/domestic",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_update_detection() {
        let args = Args::try_parse_from(["bcci_feed", "--config", "scores.example.test"]).unwrap();
        assert!(is_config_update(&args));

        let args = Args::try_parse_from(["bcci_feed", "--clear-log-file"]).unwrap();
        assert!(is_config_update(&args));
    }
}
