//! Fixture configuration loading and validation.
//!
//! # Example
//!
//! ```
//! use buildmaster_data::infrastructure::config::Config;
//!
//! let config = Config::parse_toml("[master]\nname = \"m1\"\n").unwrap();
//! assert_eq!(config.master.name, "m1");
//! assert_eq!(config.master.masterid, 1);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::domain::MasterId;
use crate::error::{ConfigError, Result};

/// Identity of the master the data API runs inside.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MasterConfig {
    pub name: String,
    pub masterid: u64,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            name: "master".into(),
            masterid: 1,
        }
    }
}

impl MasterConfig {
    #[must_use]
    pub fn masterid(&self) -> MasterId {
        MasterId::new(self.masterid)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.masterid == 0 {
            return Err(ConfigError::InvalidValue {
                field: "master.masterid",
                reason: "must be positive".into(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "master.name",
                reason: "cannot be empty".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub master: MasterConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.master.validate()?;
        Ok(config)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.master.masterid(), MasterId::new(1));
    }

    #[test]
    fn zero_masterid_is_rejected() {
        let err = Config::parse_toml("[master]\nmasterid = 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "master.masterid",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml("[master\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn logging_section_is_read() {
        let config =
            Config::parse_toml("[logging]\nlevel = \"debug\"\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
