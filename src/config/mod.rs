//! Configuration Module - TOML-based Desk Configuration
//!
//! Loads and validates configuration from `parcel-desk.toml`.
//! Every section and field has a default, so an absent file or an
//! empty one gives a working file-backed desk in `./data`.

pub mod loader;

use serde::Deserialize;

use crate::domain::pricing::{DEFAULT_PER_KG, DEFAULT_PER_KM, PricingRules};

/// Top-level desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Identity and logging.
    pub app: AppSection,
    /// Storage backend and keys.
    pub storage: StorageConfig,
    /// Shipping tariff.
    pub pricing: PricingConfig,
    /// Tracking event policy.
    pub tracking: TrackingConfig,
}

/// Identity configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Human-readable desk name.
    pub name: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "parcel-desk".to_string(),
            log_level: default_log_level(),
        }
    }
}

/// Which storage adapter backs the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `data_dir`.
    #[default]
    File,
    /// Process-local map; nothing persists across runs.
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend.
    pub data_dir: String,
    /// Key holding the serialized document.
    pub document_key: String,
    /// Key holding the login session.
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: "data".to_string(),
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

/// Shipping tariff configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Charge per kilogram.
    pub per_kg: f64,
    /// Charge per kilometre.
    pub per_km: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_kg: DEFAULT_PER_KG,
            per_km: DEFAULT_PER_KM,
        }
    }
}

impl From<PricingConfig> for PricingRules {
    fn from(cfg: PricingConfig) -> Self {
        Self::new(cfg.per_kg, cfg.per_km)
    }
}

/// Tracking event configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Reject event types outside the known vocabulary.
    pub strict_event_types: bool,
}

/// Storage key of the document.
pub const DEFAULT_DOCUMENT_KEY: &str = "LOGISTICS_DEMO_DB_V1";

/// Storage key of the login session.
pub const DEFAULT_SESSION_KEY: &str = "DEMO_LOGIN";

fn default_log_level() -> String {
    "info".to_string()
}
