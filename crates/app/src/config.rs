use shared_types::{AppConfig, AppError, LogLevel};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Bundled at compile time so web builds read the same file as native ones.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Parse config TOML text into an [`AppConfig`].
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::bad_request(format!("Invalid config.toml: {e}")))
}

/// Parse the bundled `config.toml` and store it in the global `OnceLock`.
/// Only the first call has effect.
///
/// Runs before the logger exists, so problems go to stderr. A bad file
/// yields the all-defaults config.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        parse_config(CONFIG_TOML).unwrap_or_else(|e| {
            eprintln!("[config] {e} — using defaults");
            AppConfig::default()
        })
    })
}

/// The loaded config, or defaults if `load_config()` hasn't run.
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}
