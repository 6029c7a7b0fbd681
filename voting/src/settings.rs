use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_ANSWERS, MAX_ANSWERS_LIMIT, MIN_ANSWERS};

/// Settings for this contract
#[derive(BorshDeserialize, BorshSerialize, Clone)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
pub struct Settings {
    /// maximum number of answers a new poll can have
    pub max_answers: u8,
}

#[derive(BorshDeserialize, BorshSerialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
pub enum VSettings {
    // Add old versions here, keep ordering, the oldest on top, most recent at bottom
    Current(Settings),
}

/// View JSON serializable representation of `Settings` data struct
#[derive(Default, Deserialize, Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
#[serde(crate = "near_sdk::serde")]
pub struct SettingsView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_answers: Option<u8>,
}

impl Settings {
    /// Apply optionally provided changes to settings
    pub(crate) fn apply_changes(mut self, view: SettingsView) -> Self {
        if let Some(max_answers) = view.max_answers {
            self.max_answers = max_answers;
        }
        self
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if (self.max_answers as usize) < MIN_ANSWERS || self.max_answers > MAX_ANSWERS_LIMIT {
            return Err("max_answers must be between 2 and 80");
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_answers: DEFAULT_MAX_ANSWERS,
        }
    }
}

impl VSettings {
    /// Migrates settings to the current version and applies changes.
    pub(crate) fn apply_changes(&self, view: SettingsView) -> Settings {
        Settings::from(self).apply_changes(view)
    }
}

impl From<&VSettings> for Settings {
    fn from(v_settings: &VSettings) -> Self {
        match v_settings {
            VSettings::Current(settings) => settings.clone(),
        }
    }
}

impl From<Settings> for VSettings {
    fn from(settings: Settings) -> Self {
        Self::Current(settings)
    }
}

impl From<Settings> for SettingsView {
    fn from(settings: Settings) -> Self {
        Self {
            max_answers: Some(settings.max_answers),
        }
    }
}
