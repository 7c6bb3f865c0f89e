//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for complog
#[derive(Parser, Debug)]
#[command(name = "complog")]
#[command(author, version, about = "Send component log events to a logging service")]
#[command(long_about = r#"
complog sends leveled log events to a remote logging service on behalf of a
UI component. When the service is unreachable, events are written to a local
fallback sink (stderr or a JSONL file) instead of being lost.

Configuration files are loaded from (in priority order):
1. COMPLOG_* environment variables   e.g. COMPLOG_ENDPOINT__URL
2. --config <path>                   Explicit config file
3. ./complog.toml                    Project-level config
4. ~/.config/complog/config.toml     Global config

Example:
  complog "Checkout page rendered"
  complog -l WARN -c Checkout --record-id 001xx --data '{"items":3}' "Cart is large"
  complog --sync -l FATAL "Unexpected teardown"
  complog --demo
"#)]
pub struct Cli {
    /// The message to log (not required in demo mode)
    pub message: Option<String>,

    /// Log level: DEBUG, INFO, WARN, ERROR or FATAL
    #[arg(short, long, default_value = "INFO")]
    pub level: String,

    /// Component name to tag the event with
    #[arg(short, long, value_name = "NAME")]
    pub component: Option<String>,

    /// Correlation id of the business record involved
    #[arg(long, value_name = "ID")]
    pub record_id: Option<String>,

    /// Additional data as a JSON value
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Fire and forget: do not wait for delivery before continuing
    #[arg(long)]
    pub sync: bool,

    /// Run the demo component lifecycle
    #[arg(long)]
    pub demo: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["complog", "hello"]);
        assert_eq!(cli.message.as_deref(), Some("hello"));
        assert_eq!(cli.level, "INFO");
        assert!(!cli.sync);
        assert!(!cli.demo);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::parse_from([
            "complog",
            "-l",
            "WARN",
            "-c",
            "Checkout",
            "--record-id",
            "001xx",
            "--data",
            r#"{"items":3}"#,
            "--sync",
            "-vv",
            "Cart is large",
        ]);
        assert_eq!(cli.level, "WARN");
        assert_eq!(cli.component.as_deref(), Some("Checkout"));
        assert_eq!(cli.record_id.as_deref(), Some("001xx"));
        assert_eq!(cli.data.as_deref(), Some(r#"{"items":3}"#));
        assert!(cli.sync);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_demo_needs_no_message() {
        let cli = Cli::parse_from(["complog", "--demo"]);
        assert!(cli.demo);
        assert!(cli.message.is_none());
    }
}
