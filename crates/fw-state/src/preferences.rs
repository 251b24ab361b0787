//! Wheel preferences — persisted entry list and spin settings
//!
//! Tolerant loading: unknown or missing fields fall back to defaults, a
//! missing file is the default config. Entry mutation goes through the
//! helpers here so the built-in and unique-id rules hold for everything
//! that gets persisted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fw_core::{Entry, FwError, FwResult, default_entries, remove_entry, replace_entry, validate_pool};

/// Config directory name under the platform config root
const CONFIG_DIR: &str = "fortuna-wheel";
/// Preferences file name
const PREFERENCES_FILE: &str = "preferences.json";

/// Persisted wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelPreferences {
    /// How many recent winners the selector avoids
    pub avoid_repeat_count: usize,
    /// Spin animation duration (ms)
    pub spin_duration_ms: f64,
    /// Full pre-spin revolutions
    pub base_rotations: u32,
    /// Cooperative tick interval (ms)
    pub tick_interval_ms: f64,
    /// Theme palette name
    pub theme: String,
    /// The wheel's entries, in sector order
    pub entries: Vec<Entry>,
}

impl Default for WheelPreferences {
    fn default() -> Self {
        Self {
            avoid_repeat_count: 2,
            spin_duration_ms: 4000.0,
            base_rotations: 5,
            tick_interval_ms: 16.0,
            theme: "classic".to_string(),
            entries: default_entries(),
        }
    }
}

impl WheelPreferences {
    /// Default on-disk location, e.g. `~/.config/fortuna-wheel/preferences.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(PREFERENCES_FILE))
    }

    /// Load from a JSON file; a missing file yields the defaults.
    pub fn load(path: &Path) -> FwResult<Self> {
        if !path.exists() {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let prefs: Self =
            serde_json::from_str(&data).map_err(|e| FwError::Serialization(e.to_string()))?;
        validate_pool(&prefs.entries)?;
        Ok(prefs)
    }

    /// Save as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> FwResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data =
            serde_json::to_string_pretty(self).map_err(|e| FwError::Serialization(e.to_string()))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Add a new entry; duplicate ids are rejected.
    pub fn add_entry(&mut self, entry: Entry) -> FwResult<()> {
        entry.validate()?;
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(FwError::InvalidConfig(format!(
                "duplicate entry id '{}'",
                entry.id
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Replace an entry in place, keyed by id.
    pub fn update_entry(&mut self, updated: Entry) -> FwResult<()> {
        replace_entry(&mut self.entries, updated)
    }

    /// Remove a non-built-in entry.
    pub fn delete_entry(&mut self, id: &str) -> FwResult<Entry> {
        remove_entry(&mut self.entries, id)
    }
}
