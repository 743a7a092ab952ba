//! Console configuration.
//!
//! Loaded from `~/.config/kisan-desk/config.toml` when present; a missing
//! file means defaults. CLI flags override whatever loads. Saving writes
//! the file back, creating the directory first.

use crate::error::DeskError;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fixed cosmetic delay before the agent reply is shown, in milliseconds.
const DEFAULT_RESPONSE_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Interaction language for templated reply framing.
    pub language: Language,
    /// Pre-filled state/district for new sessions; empty means none.
    pub default_state: String,
    /// Pre-filled crop focus for new sessions; empty means none.
    pub default_crop: String,
    /// Cosmetic delay before showing the agent reply; 0 disables it.
    pub response_delay_ms: u64,
    /// Force color on/off; unset means auto-detect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_color: Option<bool>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_state: String::new(),
            default_crop: String::new(),
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            use_color: None,
        }
    }
}

impl ConsoleConfig {
    /// Standard config file location.
    pub fn path() -> Result<PathBuf, DeskError> {
        let base = dirs::config_dir().ok_or(DeskError::NoConfigDir)?;
        Ok(base.join("kisan-desk").join("config.toml"))
    }

    /// Load from the standard location. Missing file or unreadable
    /// directory falls back to defaults with a warning; a file that
    /// exists but fails to parse also falls back, so a typo in the
    /// config never blocks the console.
    pub fn load() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("config dir unavailable, using defaults: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. Errors are typed for callers that want
    /// to surface them.
    pub fn load_from(path: &Path) -> Result<Self, DeskError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Save to the standard location, creating the directory.
    pub fn save(&self) -> Result<(), DeskError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), DeskError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = toml::to_string_pretty(self)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}
