//! fw-state: Persisted draw history and wheel preferences
//!
//! The History/Config collaborator of the wheel engine. The engine only
//! emits `entry_id` + label pairs; everything about where and how they
//! are stored lives here.

mod history;
mod preferences;

pub use history::*;
pub use preferences::*;
