//! Weighted wheel entries and pool invariants

use serde::{Deserialize, Serialize};

use crate::error::{FwError, FwResult};

/// Maximum label length in characters
pub const MAX_LABEL_CHARS: usize = 20;

/// Weight bounds (inclusive)
pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 100;

/// Kind of wheel entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Plain text label
    Text,
    /// Text label with an image reference
    ImageText,
}

impl Default for EntryKind {
    fn default() -> Self {
        Self::Text
    }
}

/// One weighted option on the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, non-empty identifier
    pub id: String,
    /// Display label (1..=20 chars)
    pub label: String,
    /// Entry kind
    #[serde(default)]
    pub kind: EntryKind,
    /// Opaque image reference, expected for ImageText entries
    #[serde(default)]
    pub image_ref: Option<String>,
    /// Draw weight (1..=100)
    pub weight: u32,
    /// Built-in entries ship with the app and cannot be removed
    #[serde(default)]
    pub built_in: bool,
}

impl Entry {
    /// Create a plain text entry
    pub fn text(id: impl Into<String>, label: impl Into<String>, weight: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: EntryKind::Text,
            image_ref: None,
            weight,
            built_in: false,
        }
    }

    /// Create an image+text entry
    pub fn image(
        id: impl Into<String>,
        label: impl Into<String>,
        image_ref: impl Into<String>,
        weight: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: EntryKind::ImageText,
            image_ref: Some(image_ref.into()),
            weight,
            built_in: false,
        }
    }

    /// Mark as built-in (undeletable seed entry)
    pub fn as_built_in(mut self) -> Self {
        self.built_in = true;
        self
    }

    /// Check entry invariants.
    ///
    /// An ImageText entry without an `image_ref` is tolerated (warning
    /// only); everything else in the invariant list is an error.
    pub fn validate(&self) -> FwResult<()> {
        if self.id.is_empty() {
            return Err(FwError::InvalidConfig("entry id must be non-empty".into()));
        }
        let label_chars = self.label.chars().count();
        if label_chars == 0 || label_chars > MAX_LABEL_CHARS {
            return Err(FwError::InvalidConfig(format!(
                "entry '{}': label must be 1..={} chars, got {}",
                self.id, MAX_LABEL_CHARS, label_chars
            )));
        }
        if self.weight < MIN_WEIGHT || self.weight > MAX_WEIGHT {
            return Err(FwError::InvalidConfig(format!(
                "entry '{}': weight must be {}..={}, got {}",
                self.id, MIN_WEIGHT, MAX_WEIGHT, self.weight
            )));
        }
        if self.kind == EntryKind::ImageText && self.image_ref.is_none() {
            log::warn!("entry '{}' is ImageText but has no image_ref", self.id);
        }
        Ok(())
    }
}

/// Check a whole pool: every entry valid, no duplicate ids.
pub fn validate_pool(pool: &[Entry]) -> FwResult<()> {
    for (i, entry) in pool.iter().enumerate() {
        entry.validate()?;
        if pool[..i].iter().any(|other| other.id == entry.id) {
            return Err(FwError::InvalidConfig(format!(
                "duplicate entry id '{}'",
                entry.id
            )));
        }
    }
    Ok(())
}

/// Replace an entry in place, keyed by id.
pub fn replace_entry(pool: &mut [Entry], updated: Entry) -> FwResult<()> {
    updated.validate()?;
    match pool.iter_mut().find(|e| e.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            Ok(())
        }
        None => Err(FwError::EntryNotFound(updated.id)),
    }
}

/// Remove a non-built-in entry by id.
pub fn remove_entry(pool: &mut Vec<Entry>, id: &str) -> FwResult<Entry> {
    let index = pool
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| FwError::EntryNotFound(id.to_string()))?;
    if pool[index].built_in {
        return Err(FwError::InvalidConfig(format!(
            "entry '{id}' is built-in and cannot be removed"
        )));
    }
    Ok(pool.remove(index))
}

/// The fixed built-in seed set.
pub fn default_entries() -> Vec<Entry> {
    vec![
        Entry::text("builtin-grand", "Grand Prize", 5).as_built_in(),
        Entry::text("builtin-double", "Double Points", 15).as_built_in(),
        Entry::text("builtin-snack", "Free Snack", 25).as_built_in(),
        Entry::text("builtin-sticker", "Sticker", 30).as_built_in(),
        Entry::text("builtin-again", "Spin Again", 15).as_built_in(),
        Entry::text("builtin-nothing", "Better Luck", 10).as_built_in(),
    ]
}
