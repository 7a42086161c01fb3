//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `parcel-desk.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{AppConfig, StorageBackend};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "parcel-desk.toml";

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: defaults are used.
///
/// # Errors
/// Returns detailed error if:
/// - File exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        let config = AppConfig::default();
        validate_config(&config)?;
        return Ok(config);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    info!(
        path = %path.display(),
        backend = ?config.storage.backend,
        strict_event_types = config.tracking.strict_event_types,
        "Configuration loaded"
    );

    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Usable storage keys (file backend maps them to file names)
/// - A data directory when the file backend is selected
/// - Finite, non-negative tariff rates
fn validate_config(config: &AppConfig) -> Result<()> {
    let storage = &config.storage;

    for (field, key) in [
        ("document_key", &storage.document_key),
        ("session_key", &storage.session_key),
    ] {
        anyhow::ensure!(!key.is_empty(), "storage.{field} must not be empty");
        anyhow::ensure!(
            key.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            "storage.{field} may only contain [A-Za-z0-9_-], got {key:?}"
        );
    }
    anyhow::ensure!(
        storage.document_key != storage.session_key,
        "storage.document_key and storage.session_key must differ"
    );

    if storage.backend == StorageBackend::File {
        anyhow::ensure!(
            !storage.data_dir.trim().is_empty(),
            "storage.data_dir must not be empty for the file backend"
        );
    }

    for (field, rate) in [
        ("per_kg", config.pricing.per_kg),
        ("per_km", config.pricing.per_km),
    ] {
        anyhow::ensure!(
            rate.is_finite() && rate >= 0.0,
            "pricing.{field} must be a non-negative number, got {rate}"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DOCUMENT_KEY, DEFAULT_SESSION_KEY};

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config("nonexistent-parcel-desk.toml").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.document_key, DEFAULT_DOCUMENT_KEY);
        assert_eq!(config.storage.session_key, DEFAULT_SESSION_KEY);
        assert!(!config.tracking.strict_event_types);
    }

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [storage]
            backend = "memory"

            [pricing]
            per_kg = 12.5

            [tracking]
            strict_event_types = true
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, "data");
        assert!((config.pricing.per_kg - 12.5).abs() < f64::EPSILON);
        assert!((config.pricing.per_km - 2.0).abs() < f64::EPSILON);
        assert!(config.tracking.strict_event_types);
        assert_eq!(config.app.log_level, "info");
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = parse_config("[pricing]\nper_km = -1.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("per_km"));
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(parse_config("[storage]\ndocument_key = \"a/b\"\n").is_err());
        assert!(parse_config("[storage]\nsession_key = \"LOGISTICS_DEMO_DB_V1\"\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_backend() {
        assert!(parse_config("[storage]\nbackend = \"redis\"\n").is_err());
    }

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.toml");
        std::fs::write(&path, "[app]\nname = \"north\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.app.name, "north");
    }
}
