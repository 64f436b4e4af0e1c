//! Tunable constants of the estimators.
//!
//! The defaults are calibrated against a single historical PostalMate backup
//! (758 MB with known row counts). Their accuracy beyond that point is unverified.

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Widest field the size estimator will assume.
pub const MAX_BYTES_PER_COLUMN: usize = 1 << 20;

/// Errors raised while loading a [`ParserConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid parser configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid parser configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Assumed average width of one field, in bytes.
    pub bytes_per_column: usize,
    /// Size in MB of the backup the reference counts were taken from.
    pub reference_size_mb: f64,
    pub sample_window_bytes: usize,
    pub max_samples: usize,
    /// Shortest printable run considered for a sample.
    pub min_sample_run: usize,
    pub max_sample_chars: usize,
    /// How far into the buffer the `gbak` format probe looks.
    pub header_scan_bytes: usize,
    /// How far into the buffer a `gbak:` version banner may start.
    pub version_scan_bytes: usize,
    /// Optional cap on how much of the buffer the table-marker scan covers.
    pub max_scan_bytes: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        return ParserConfig {
            bytes_per_column: 25,
            reference_size_mb: 758.0,
            sample_window_bytes: 50 * 1024,
            max_samples: 3,
            min_sample_run: 6,
            max_sample_chars: 200,
            header_scan_bytes: 8192,
            version_scan_bytes: 2048,
            max_scan_bytes: None,
        };
    }
}

impl ParserConfig {
    /// Load a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<ParserConfig, ConfigError> {
        let config: ParserConfig = serde_json::from_str(json)?;
        config.validate()?;
        return Ok(config);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.reference_size_mb.is_finite() && self.reference_size_mb > 0.0) {
            return Err(ConfigError::Invalid(alloc::format!(
                "referenceSizeMb must be positive, got {}",
                self.reference_size_mb
            )));
        }
        if self.bytes_per_column > MAX_BYTES_PER_COLUMN {
            return Err(ConfigError::Invalid(alloc::format!(
                "bytesPerColumn must be at most {}, got {}",
                MAX_BYTES_PER_COLUMN,
                self.bytes_per_column
            )));
        }
        if self.min_sample_run == 0 {
            return Err(ConfigError::Invalid(String::from(
                "minSampleRun must be at least 1",
            )));
        }
        return Ok(());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ParserConfig::from_json(r#"{"bytesPerColumn": 40}"#).unwrap();
        assert_eq!(config.bytes_per_column, 40);
        assert_eq!(config.reference_size_mb, 758.0);
        assert_eq!(config.max_scan_bytes, None);
    }

    #[test]
    fn rejects_non_positive_reference() {
        let err = ParserConfig::from_json(r#"{"referenceSizeMb": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_absurd_column_width() {
        let json = r#"{"bytesPerColumn": 18446744073709551615}"#;
        assert!(ParserConfig::from_json(json).is_err());
        let err = ParserConfig::from_json(r#"{"bytesPerColumn": 1048577}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(ParserConfig::from_json(r#"{"bytesPerColumn": 1048576}"#).is_ok());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ParserConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
