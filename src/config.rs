//! Configuration module
//!
//! Read from a TOML file (default `~/.config/power-bill/config.toml`).
//! Every section is optional; missing keys fall back to [`Default`]. Rates
//! are not configurable and never appear here.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [ledger]
//! provider = "TGNPDCL"
//! currency_symbol = "₹"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub ledger: LedgerConfig,
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// `[ledger]`: presentation of the printed bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Utility name shown in the bill header
    pub provider: String,
    pub currency_symbol: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            provider: "TGNPDCL".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "logging.format must be \"text\" or \"json\", got \"{}\"",
                    other
                )))
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level is empty".to_string()));
        }
        if self.ledger.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "ledger.currency_symbol is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `<config dir>/power-bill/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    match dirs_next::config_dir() {
        Some(dir) => dir.join("power-bill").join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "text");
        assert_eq!(cfg.ledger.provider, "TGNPDCL");
        assert_eq!(cfg.ledger.currency_symbol, "₹");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [ledger]
            currency_symbol = "Rs."
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ledger.currency_symbol, "Rs.");
        assert_eq!(cfg.ledger.provider, "TGNPDCL");
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn full_file() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"
            format = "JSON"

            [ledger]
            provider = "APSPDCL"
            currency_symbol = "INR "
            "#,
        )
        .unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "JSON");
        assert_eq!(cfg.ledger.provider, "APSPDCL");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("[logging\nlevel = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = AppConfig::from_toml_str("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_currency_symbol_is_rejected() {
        let err = AppConfig::from_toml_str("[ledger]\ncurrency_symbol = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("power-bill-does-not-exist").join("config.toml");
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = std::env::temp_dir().join(format!("power-bill-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.logging.level, "warn");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("config.toml"));
    }
}
