//! # fw-wheel — Selection-and-animation engine for the Fortuna prize wheel
//!
//! Picks a winner under a weighted distribution with anti-repeat bias,
//! converts the choice into a rotation target that lands the pointer on
//! the right sector, and drives a cancelable, single-flight, time-based
//! animation to it.
//!
//! ## Architecture
//!
//! ```text
//! WheelSession
//!     │
//!     ├── selector::select   (anti-repeat weighted draw)
//!     ├── geometry::target_delta / layout
//!     └── SpinController     (Idle → Spinning → Idle, cooperative ticks)
//!           │
//!           v
//!     SpinTicket → SpinOutcome
//! ```

pub mod animation;
pub mod easing;
pub mod geometry;
pub mod selector;
pub mod session;
pub mod timing;

pub use animation::*;
pub use easing::*;
pub use geometry::*;
pub use selector::select;
pub use session::*;
pub use timing::*;

use fw_core::{Entry, FwResult};

/// One-shot anti-repeat weighted draw with the thread rng.
///
/// Sessions hold their own seedable rng; this is the bare entry point for
/// callers that only want a winner.
pub fn draw(pool: &[Entry], recent_ids: &[String], avoid_count: usize) -> FwResult<Entry> {
    let mut rng = rand::rng();
    select(pool, recent_ids, avoid_count, &mut rng).cloned()
}
