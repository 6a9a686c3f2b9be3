//! Sharing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SharingError, SharingResult};
use crate::expiry::ExpiryChoice;
use crate::id::MIN_SUFFIX_LEN;

/// Default share host
pub const DEFAULT_SHARE_HOST: &str = "medipass.app";

/// Default collection grants are stored in
pub const DEFAULT_COLLECTION: &str = "sharing";

/// Settings for the ledger, resolver and link builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharingConfig {
    /// Host in `https://<host>/share/<id>` links.
    pub share_host: String,
    /// Store collection holding grant documents.
    pub collection: String,
    /// Leading segment of generated ids.
    pub id_prefix: String,
    /// Random characters appended to each id. At least 9.
    pub id_suffix_len: usize,
    /// Expiry choices offered to the user, in hours.
    pub ttl_menu_hours: Vec<u32>,
    /// Preselected expiry choice; must appear in the menu.
    pub default_ttl_hours: u32,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            share_host: DEFAULT_SHARE_HOST.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            id_prefix: "share".to_string(),
            id_suffix_len: 12,
            ttl_menu_hours: ExpiryChoice::PRESETS.iter().map(ExpiryChoice::hours).collect(),
            default_ttl_hours: ExpiryChoice::default().hours(),
        }
    }
}

impl SharingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> SharingResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SharingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_share_host(mut self, host: impl Into<String>) -> Self {
        self.share_host = host.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_id_suffix_len(mut self, len: usize) -> Self {
        self.id_suffix_len = len;
        self
    }

    pub fn with_ttl_menu(mut self, menu: Vec<u32>, default_ttl_hours: u32) -> Self {
        self.ttl_menu_hours = menu;
        self.default_ttl_hours = default_ttl_hours;
        self
    }

    /// Expiry choices to offer, in configured order. Zero entries are skipped.
    pub fn ttl_menu(&self) -> Vec<ExpiryChoice> {
        self.ttl_menu_hours
            .iter()
            .filter_map(|h| ExpiryChoice::from_hours(*h))
            .collect()
    }

    /// The preselected choice.
    pub fn default_ttl(&self) -> ExpiryChoice {
        ExpiryChoice::from_hours(self.default_ttl_hours).unwrap_or_default()
    }

    pub fn offers(&self, choice: ExpiryChoice) -> bool {
        self.ttl_menu_hours.contains(&choice.hours())
    }

    pub fn validate(&self) -> SharingResult<()> {
        let host = self.share_host.trim();
        if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
            return Err(SharingError::InvalidConfig(format!(
                "share_host must be a bare host name, got {:?}",
                self.share_host
            )));
        }
        if self.collection.trim().is_empty() {
            return Err(SharingError::InvalidConfig("collection must not be empty".to_string()));
        }
        if self.id_prefix.is_empty() || !self.id_prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SharingError::InvalidConfig(
                "id_prefix must be non-empty ASCII alphanumeric".to_string(),
            ));
        }
        if self.id_suffix_len < MIN_SUFFIX_LEN {
            return Err(SharingError::InvalidConfig(format!(
                "id_suffix_len must be at least {}",
                MIN_SUFFIX_LEN
            )));
        }
        if self.ttl_menu_hours.is_empty() || self.ttl_menu_hours.contains(&0) {
            return Err(SharingError::InvalidConfig(
                "ttl_menu_hours must list positive hours".to_string(),
            ));
        }
        if !self.ttl_menu_hours.contains(&self.default_ttl_hours) {
            return Err(SharingError::InvalidConfig(format!(
                "default_ttl_hours {} is not in the menu",
                self.default_ttl_hours
            )));
        }
        Ok(())
    }
}
