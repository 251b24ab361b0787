//! Wheel geometry — sector layout and rotation targets
//!
//! Entries occupy equal angular sectors, index 0 under a fixed pointer at
//! the top. A spin target is a rotation *delta* in degrees, applied on top
//! of the wheel's current angle; callers track cumulative rotation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use fw_core::Entry;

/// One full wheel revolution in degrees
pub const FULL_TURN_DEG: f64 = 360.0;

/// Jitter bound as a fraction of one sector's angular width.
///
/// Tunable, not a protocol guarantee. Must stay below 0.5 so the stop
/// point can never drift into a neighboring sector.
pub const JITTER_FRACTION: f64 = 0.4;

/// Static angular placement of one entry on the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEntry {
    /// Entry id
    pub id: String,
    /// Position in the pool
    pub index: usize,
    /// Sector start angle in degrees, clockwise from the top pointer
    pub angle_deg: f64,
    /// Horizontal placement offset at the given radius
    pub x: f64,
    /// Vertical placement offset at the given radius (negative is up)
    pub y: f64,
}

/// Angular width of one sector for a pool of `len` entries.
pub fn sector_angle(len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    FULL_TURN_DEG / len as f64
}

/// Rotation delta that lands the pointer on `chosen`.
///
/// `base_rotations` full revolutions are spun before settling; a bounded
/// random jitter keeps repeated wins on the same entry from stopping at
/// visually identical points. The jitter is scaled by [`JITTER_FRACTION`]
/// rather than clamped, so its distribution stays continuous.
///
/// If `chosen` is not in the pool the mapper logs a warning and returns
/// `base_rotations * 360` with no pointer-alignment guarantee; the spin
/// still runs.
pub fn target_delta<R: Rng + ?Sized>(
    pool: &[Entry],
    chosen: &Entry,
    base_rotations: u32,
    rng: &mut R,
) -> f64 {
    let base = f64::from(base_rotations) * FULL_TURN_DEG;
    let Some(index) = pool.iter().position(|e| e.id == chosen.id) else {
        log::warn!(
            "entry '{}' is not in the pool, spinning without pointer alignment",
            chosen.id
        );
        return base;
    };

    let sector = sector_angle(pool.len());
    // Rotate the wheel backward so the chosen sector comes up under the
    // fixed top pointer.
    let within_circle = FULL_TURN_DEG - index as f64 * sector;
    let jitter = rng.random_range(-JITTER_FRACTION..JITTER_FRACTION) * sector;

    base + within_circle + jitter
}

/// Static layout of the pool on a circle of `radius`.
///
/// Pure function of pool order and radius; no randomness, identical calls
/// yield identical placements.
pub fn layout(pool: &[Entry], radius: f64) -> Vec<PositionedEntry> {
    let sector = sector_angle(pool.len());
    pool.iter()
        .enumerate()
        .map(|(index, entry)| {
            let angle_deg = index as f64 * sector;
            let rad = angle_deg.to_radians();
            PositionedEntry {
                id: entry.id.clone(),
                index,
                angle_deg,
                x: radius * rad.sin(),
                y: -radius * rad.cos(),
            }
        })
        .collect()
}
