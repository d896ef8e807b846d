use std::env;

use fragrance_core::config::{AppConfig, LoadOptions, LogFormat};
use tracing_subscriber::EnvFilter;

/// Explicit filter for CLI diagnostics, e.g. `FRAGRANCE_CLI_LOG=fragrance_core=debug`.
pub const CLI_LOG_ENV: &str = "FRAGRANCE_CLI_LOG";

const FALLBACK_LEVEL: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub format: LogFormat,
}

/// `FRAGRANCE_CLI_LOG` wins, then `logging.*` from the loaded config. An
/// unloadable config falls back to `warn` in compact form so commands that
/// report config errors still run.
pub fn resolve() -> LogSettings {
    let config = AppConfig::load(LoadOptions::default()).ok();
    let format = config.as_ref().map_or(LogFormat::Compact, |config| config.logging.format);

    let directive = env::var(CLI_LOG_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| config.map(|config| config.logging.level.trim().to_ascii_lowercase()))
        .unwrap_or_else(|| FALLBACK_LEVEL.to_string());

    LogSettings { directive, format }
}

/// Command output owns stdout; diagnostics go to stderr.
pub fn init() {
    let settings = resolve();
    let filter = EnvFilter::try_new(&settings.directive)
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match settings.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
