//! Command line interface
//!
//! One repeatable option per backend module to load and one per scheme to
//! test. Omitting `--scheme` entirely tests every available scheme; passing
//! it with an empty value selects the local/no-scheme backend.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "fsconform")]
#[command(about = "Conformance test harness for pluggable filesystem backends")]
#[command(version)]
pub struct Args {
    /// Backend module to load before scheme resolution (repeatable)
    #[arg(long = "module", value_name = "PATH", action = clap::ArgAction::Append)]
    pub modules: Vec<String>,

    /// URI scheme to test (repeatable; empty value selects the local backend)
    #[arg(
        long = "scheme",
        value_name = "SCHEME",
        action = clap::ArgAction::Append,
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub schemes: Vec<String>,

    /// Write the full run report to this file as JSON
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Force colored output (overrides TTY detection)
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Log file path (default is stderr)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
