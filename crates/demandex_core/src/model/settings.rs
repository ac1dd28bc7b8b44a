//! Application settings, stored as a singleton block in the snapshot.
//!
//! Settings are not a keyed collection; they are scalar preferences that
//! ride along with the snapshot and are edited through a patch like any
//! other record.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// User-level preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub display_name: Option<String>,
    /// ISO 4217 style code used by the finance pages, e.g. "USD".
    pub currency_code: String,
    pub reminders_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: None,
            currency_code: "USD".to_string(),
            reminders_enabled: true,
        }
    }
}

/// Partial update for [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub display_name: Option<Option<String>>,
    pub currency_code: Option<String>,
    pub reminders_enabled: Option<bool>,
}

impl Settings {
    /// Merges the supplied patch; absent fields leave state untouched.
    pub fn apply_patch(&mut self, patch: SettingsPatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(currency_code) = patch.currency_code {
            self.currency_code = currency_code;
        }
        if let Some(reminders_enabled) = patch.reminders_enabled {
            self.reminders_enabled = reminders_enabled;
        }
    }

    /// Checks settings invariants before a write is accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let code = self.currency_code.as_str();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(())
    }
}
