use serde::{Deserialize, Serialize};

/// Top-level config file structure matching the app's `config.toml`.
///
/// Every section and field has a default so a missing or partial file
/// still yields a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Log verbosity for the app's subscriber.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Bundled sample shown by the demo shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DemoFixture {
    /// Fully populated archived complaint.
    #[default]
    Archived,
    /// Only `createdAt`; no categories, files or status.
    Minimal,
    /// Archival date that cannot be parsed.
    Invalid,
}

impl DemoFixture {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoFixture::Archived => "archived",
            DemoFixture::Minimal => "minimal",
            DemoFixture::Invalid => "invalid",
        }
    }

    /// Parse a fixture key, falling back to `Archived`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "minimal" => DemoFixture::Minimal,
            "invalid" => DemoFixture::Invalid,
            _ => DemoFixture::Archived,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DemoConfig {
    #[serde(default, deserialize_with = "fixture_or_default")]
    pub fixture: DemoFixture,
}

/// Unknown fixture names select the default sample instead of failing the
/// whole config.
fn fixture_or_default<'de, D>(deserializer: D) -> Result<DemoFixture, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(DemoFixture::from_key(&key))
}
