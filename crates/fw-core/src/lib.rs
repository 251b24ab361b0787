//! fw-core: Shared types and probability math for the Fortuna wheel
//!
//! This crate provides the entry model, the error taxonomy, and the pure
//! weighted-draw functions used by the wheel engine and its collaborators.

mod entry;
mod error;
mod probability;

pub use entry::*;
pub use error::*;
pub use probability::*;
