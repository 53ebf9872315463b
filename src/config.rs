use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::fact::numbers_api::DEFAULT_BASE_URL;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TRIVIA_TIMEOUT_SECS: u64 = 5;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub trivia: TriviaSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Precedence, lowest first: `config.toml` (or `$NUMCLASS_CONFIG`),
    /// `NUMCLASS_*` variables, then the bare `PORT` variable.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("NUMCLASS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NUMCLASS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        config.apply_port_override(env::var("PORT").ok().as_deref())?;
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a single file, ignoring the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()
            .with_context(|| format!("failed to read {}", path.display()))?;

        let mut config: Self = settings.try_deserialize()?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Apply the platform-provided `PORT` value, if any.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        if let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.server.port = raw
                .parse()
                .with_context(|| format!("invalid PORT value: {}", raw))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.trivia.base_url.trim().is_empty() {
            bail!("trivia.base_url must be specified");
        }
        if self.trivia.timeout_secs == 0 {
            bail!("trivia.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn normalize(&mut self) {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TriviaSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl TriviaSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TriviaSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TRIVIA_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.trivia.base_url, "http://numbersapi.com");
        assert_eq!(config.trivia.timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 8080);

        config.apply_port_override(Some("  ")).unwrap();
        assert_eq!(config.server.port, 8080);

        config.apply_port_override(Some("10000")).unwrap();
        assert_eq!(config.server.port, 10000);

        assert!(config.apply_port_override(Some("http")).is_err());
        assert!(config.apply_port_override(Some("70000")).is_err());
        assert_eq!(config.server.port, 10000);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = AppConfig {
            trivia: TriviaSection {
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
