//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for logweave
#[derive(Parser, Debug)]
#[command(name = "logweave")]
#[command(author, version, about = "Compose a multi-destination log pipeline from a configuration document")]
#[command(long_about = r#"
logweave builds a structured log pipeline (console and rotating files, each
with its own severity floor) from a declarative configuration, then emits
the given messages through it.

Configuration documents are looked up in this order (first found wins):
1. --config <path>     Explicit document (.json or .toml)
2. ./logs.json         Working directory
3. ./logs.toml         Working directory
4. ~/.config/logweave/logs.toml   User config

Example:
  logweave "service started"
  logweave -l warn -n db -f table=users "slow query"
  logweave --config ./ops/logs.json --show-plan
"#)]
pub struct Cli {
    /// Messages to log, one record each
    pub messages: Vec<String>,

    /// Severity of the emitted messages (debug, info, warn, error, fatal, panic)
    #[arg(short, long, value_name = "LEVEL", default_value = "info")]
    pub level: String,

    /// Logger name for the emitted messages
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Structured field attached to every message (can be specified multiple times)
    #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Show the composed sinks and exit
    #[arg(long)]
    pub show_plan: bool,

    /// Do not forward `tracing` events into the pipeline
    #[arg(long)]
    pub no_bridge: bool,
}

/// Parse `key=value`; the value may itself contain `=`.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
