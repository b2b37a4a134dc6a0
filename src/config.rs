use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_TOP_N;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    #[serde(default = "default_max_coaches")]
    pub max_coaches: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            max_coaches: default_max_coaches(),
        }
    }
}

impl MatchingSettings {
    /// Clamp a requested result count to the configured bounds
    pub fn effective_top_n(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_top_n).min(self.max_top_n)
    }
}

fn default_top_n() -> usize { DEFAULT_TOP_N }
fn default_max_top_n() -> usize { 50 }
fn default_max_coaches() -> usize { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    /// Plain single-line text
    Compact,
}

impl LoggingSettings {
    /// Parsed output format. Unknown values fall back to compact text.
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COACH_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COACH_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("COACH_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_top_n, 3);
        assert_eq!(matching.max_top_n, 50);
        assert_eq!(matching.max_coaches, 1000);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
        assert_eq!(LoggingSettings::default().log_format(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_parsing() {
        let with_format = |format: &str| LoggingSettings {
            level: default_log_level(),
            format: format.to_string(),
        };

        assert_eq!(with_format("JSON").log_format(), LogFormat::Json);
        assert_eq!(with_format("pretty").log_format(), LogFormat::Pretty);
        assert_eq!(with_format("compact").log_format(), LogFormat::Compact);
        assert_eq!(with_format("xml").log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("coach-match-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 9090\n\n[matching]\nmax_top_n = 5").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.matching.max_top_n, 5);
        assert_eq!(settings.matching.default_top_n, 3);
        assert_eq!(settings.logging.format, "json");

        assert_eq!(settings.matching.effective_top_n(None), 3);
        assert_eq!(settings.matching.effective_top_n(Some(0)), 0);
        assert_eq!(settings.matching.effective_top_n(Some(20)), 5);
    }
}
