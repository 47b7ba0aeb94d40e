use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::logging::LOG_LEVELS;
use crate::application::dto::OutputFormat;
use crate::config::Overrides;

/// Print UTF-8 text files, reporting missing ones instead of failing
#[derive(Parser, Debug)]
#[command(name = "text-reader")]
#[command(version)]
#[command(about = "Print UTF-8 text files, reporting missing ones instead of failing", long_about = None)]
pub struct Args {
    /// Files to read, in output order
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to ./text-reader.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat unreadable files (permissions, directories, invalid UTF-8) as absent
    #[arg(long)]
    pub absent_on_error: bool,

    /// Maximum size of each file in bytes
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_file_size: Option<u64>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, value_name = "LEVEL", value_parser = PossibleValuesParser::new(LOG_LEVELS.iter().copied()))]
    pub log_level: Option<String>,

    /// Emit log records as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            max_file_size: self.max_file_size,
            absent_on_error: self.absent_on_error,
            log_level: self.log_level.clone(),
            log_json: self.log_json,
        }
    }
}
