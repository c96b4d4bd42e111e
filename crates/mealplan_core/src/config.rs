//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold locale, storage key prefix, share mode and snapshot lifetime.
//! - Decode host-provided JSON configuration with per-field defaults.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Unknown fields are rejected so host typos surface early.

use crate::locale::{Locale, DEFAULT_LOCALE_TAG};
use chrono::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INCLUSION_KEY_PREFIX: &str = "shopping-exclusions";
pub const DEFAULT_SNAPSHOT_TTL_HOURS: u32 = 24;

/// Whether the share collaborator can be reached at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareMode {
    /// Exports go through the share collaborator.
    #[default]
    Remote,
    /// No backend configured; export is blocked before any call.
    LocalOnly,
}

/// Configuration shared by services and the FFI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Locale tag for number formatting and name ordering.
    pub locale: String,
    /// First segment of `prefix:householdId:weekStart` store keys.
    pub inclusion_key_prefix: String,
    pub share_mode: ShareMode,
    pub snapshot_ttl_hours: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE_TAG.to_string(),
            inclusion_key_prefix: DEFAULT_INCLUSION_KEY_PREFIX.to_string(),
            share_mode: ShareMode::default(),
            snapshot_ttl_hours: DEFAULT_SNAPSHOT_TTL_HOURS,
        }
    }
}

impl CoreConfig {
    /// Parses JSON config; missing fields take defaults.
    ///
    /// # Errors
    /// - Returns a human-readable message for malformed JSON, unknown fields
    ///   or a blank key prefix.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| format!("invalid core config: {err}"))?;
        if config.inclusion_key_prefix.trim().is_empty() {
            return Err("invalid core config: inclusion_key_prefix must not be blank".to_string());
        }
        Ok(config)
    }

    pub fn number_locale(&self) -> Locale {
        Locale::parse(&self.locale)
    }

    pub fn snapshot_ttl(&self) -> Duration {
        Duration::hours(i64::from(self.snapshot_ttl_hours))
    }
}
