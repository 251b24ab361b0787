//! Weighted probability model — pure functions over a draw pool

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{FwError, FwResult};

/// Per-entry probability breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryProbability {
    /// Entry id
    pub id: String,
    /// Probability as a fraction of 1
    pub fraction: f64,
    /// Percentage rounded to one decimal, e.g. "12.5%"
    pub percent_label: String,
}

/// Sum of weights across the pool.
///
/// Fails with `InvalidConfig` for an empty pool or a non-positive total.
pub fn total_weight(pool: &[Entry]) -> FwResult<u64> {
    if pool.is_empty() {
        return Err(FwError::InvalidConfig("draw pool is empty".into()));
    }
    let total: u64 = pool.iter().map(|e| u64::from(e.weight)).sum();
    if total == 0 {
        return Err(FwError::InvalidConfig(
            "total pool weight must be positive".into(),
        ));
    }
    Ok(total)
}

/// Weighted draw over entry references.
///
/// Draws uniformly in `[0, total)` and walks the candidates in order,
/// subtracting each weight; the first entry where the remainder drops to
/// zero or below wins. Ties at cumulative boundaries go to the earlier
/// entry, so no candidate has zero effective probability.
pub fn weighted_draw_among<'a, R: Rng + ?Sized>(
    candidates: &[&'a Entry],
    rng: &mut R,
) -> FwResult<&'a Entry> {
    if candidates.is_empty() {
        return Err(FwError::InvalidConfig("draw pool is empty".into()));
    }
    let total: u64 = candidates.iter().map(|e| u64::from(e.weight)).sum();
    if total == 0 {
        return Err(FwError::InvalidConfig(
            "total pool weight must be positive".into(),
        ));
    }

    let mut remainder = rng.random_range(0.0..total as f64);
    for &entry in candidates {
        remainder -= f64::from(entry.weight);
        if remainder <= 0.0 {
            return Ok(entry);
        }
    }

    // Float edge case at the exact upper boundary: the walk can run off
    // the end; the last candidate takes it.
    candidates
        .last()
        .copied()
        .ok_or_else(|| FwError::InvalidConfig("draw pool is empty".into()))
}

/// Weighted draw over a pool slice.
pub fn weighted_draw<'a, R: Rng + ?Sized>(pool: &'a [Entry], rng: &mut R) -> FwResult<&'a Entry> {
    let refs: Vec<&Entry> = pool.iter().collect();
    weighted_draw_among(&refs, rng)
}

/// Per-entry probability, as a fraction and a one-decimal percent label.
pub fn probabilities(pool: &[Entry]) -> FwResult<Vec<EntryProbability>> {
    let total = total_weight(pool)? as f64;
    Ok(pool
        .iter()
        .map(|e| {
            let fraction = f64::from(e.weight) / total;
            EntryProbability {
                id: e.id.clone(),
                fraction,
                percent_label: format!("{:.1}%", fraction * 100.0),
            }
        })
        .collect())
}
