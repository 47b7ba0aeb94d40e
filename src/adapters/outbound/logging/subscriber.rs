use crate::shared::Result;
use anyhow::Context;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Levels accepted for `log_level` / `--log-level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// How the process-wide subscriber should be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `settings.level` when it is set and valid.
///
/// # Errors
/// Returns an error if the level is not one of [`LOG_LEVELS`] or a global
/// subscriber is already installed.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    if !LOG_LEVELS.contains(&settings.level.as_str()) {
        anyhow::bail!(
            "Invalid log level: {}\n\n💡 Hint: Use one of: {}",
            settings.level,
            LOG_LEVELS.join(", ")
        );
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Failed to build log filter for '{}'", settings.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
