//! Draw history — append-only, capped ring of past results

use std::collections::VecDeque;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fw_core::{FwError, FwResult};

/// Maximum retained records; older ones are silently dropped.
pub const MAX_HISTORY_RECORDS: usize = 100;

/// One completed draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Unique record id
    pub id: String,
    /// Winning entry id
    pub entry_id: String,
    /// Winning entry label at draw time
    pub result_label: String,
    /// When the wheel landed (serialized as ISO-8601)
    pub timestamp: DateTime<Utc>,
}

impl DrawRecord {
    /// Record a winner, timestamped now.
    pub fn new(entry_id: impl Into<String>, result_label: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("draw-{}", timestamp.timestamp_nanos_opt().unwrap_or(0)),
            entry_id: entry_id.into(),
            result_label: result_label.into(),
            timestamp,
        }
    }
}

/// Most-recent-first history of draws, capped at [`MAX_HISTORY_RECORDS`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawHistory {
    records: VecDeque<DrawRecord>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; the oldest record falls off past the cap.
    pub fn push(&mut self, record: DrawRecord) {
        self.records.push_front(record);
        self.records.truncate(MAX_HISTORY_RECORDS);
    }

    /// Records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &DrawRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Load from a JSON file; a missing file is an empty history.
    pub fn load(path: &Path) -> FwResult<Self> {
        if !path.exists() {
            log::debug!("no history at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| FwError::Serialization(e.to_string()))
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
}
