use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_SCRATCH_BYTES: usize = 1024 * 1024; // 1 MiB
const MAX_SCRATCH_BYTES: usize = 64 * 1024 * 1024; // 64 MiB

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub service: ServiceSection,
    pub docs: DocsSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `MINIMAL_API_CONFIG` and defaults to
    /// `config.toml`; a missing file is not an error.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("MINIMAL_API_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from the given file (if it exists), overlaid
    /// with `MINIMAL_API_*` environment variables.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("MINIMAL_API")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::invalid_config("server.port must be non-zero"));
        }
        if self.service.scratch_bytes > MAX_SCRATCH_BYTES {
            return Err(Error::invalid_config(format!(
                "service.scratch_bytes must not exceed {} bytes (got {})",
                MAX_SCRATCH_BYTES, self.service.scratch_bytes
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Hosting environment the process runs in.
///
/// Deserialized through [`FromStr`](std::str::FromStr), so config files
/// and environment variables accept the same names and aliases.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(Error::invalid_config(format!(
                "unsupported environment: {}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
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
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Size of the scratch buffer the demo service fills on every call.
    pub scratch_bytes: usize,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            scratch_bytes: DEFAULT_SCRATCH_BYTES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsSection {
    pub enabled: bool,
}

impl Default for DocsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.service.scratch_bytes, DEFAULT_SCRATCH_BYTES);
        assert!(config.docs.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_oversized_scratch_buffer() {
        let mut config = AppConfig::default();
        config.service.scratch_bytes = MAX_SCRATCH_BYTES + 1;
        assert!(config.validate().is_err());

        config.service.scratch_bytes = MAX_SCRATCH_BYTES;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_environment_names() {
        assert_eq!(
            "Development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(" prod ".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert!("qa".parse::<Environment>().is_err());
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
    }
}
