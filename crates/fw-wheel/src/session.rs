//! Wheel session — draw, aim, and spin orchestration
//!
//! Data flow per spin: anti-repeat selector picks the winner, the
//! geometry mapper turns it into a rotation delta, the animation
//! controller runs the delta, and the completion signal hands the winner
//! back so the caller can persist a history record.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use fw_core::{Entry, FwError, FwResult, validate_pool};

use crate::animation::{SpinController, SpinOutcome, SpinState, SpinSurface, SpinTicket, Ticker};
use crate::geometry::target_delta;
use crate::selector::select;
use crate::timing::SpinTimingConfig;

/// Per-session draw statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Spins started
    pub total_spins: u64,
    /// Recorded results per entry id
    pub results: HashMap<String, u64>,
}

/// An admitted spin: the winner is decided, the wheel is turning.
#[derive(Debug)]
pub struct PendingSpin {
    /// The chosen entry
    pub entry: Entry,
    /// Rotation delta handed to the controller, in degrees
    pub target_delta: f64,
    /// Completion signal
    pub ticket: SpinTicket,
}

/// What a completed draw contributes to a history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub entry_id: String,
    pub result_label: String,
}

/// Owns the rng, timing config, recent-winner ring, and the shared
/// animation controller for one wheel.
pub struct WheelSession {
    rng: StdRng,
    timing: SpinTimingConfig,
    recent: VecDeque<String>,
    controller: Arc<Mutex<SpinController>>,
    stats: SessionStats,
}

impl WheelSession {
    /// Session with an OS-seeded rng.
    pub fn new(timing: SpinTimingConfig) -> Self {
        Self::with_rng(timing, StdRng::from_os_rng())
    }

    /// Session with a caller-supplied rng, for deterministic tests.
    pub fn with_rng(timing: SpinTimingConfig, rng: StdRng) -> Self {
        Self {
            rng,
            timing,
            recent: VecDeque::new(),
            controller: Arc::new(Mutex::new(SpinController::new())),
            stats: SessionStats::default(),
        }
    }

    /// Attach the render surface the wheel rotates.
    pub fn attach_surface(&self, surface: Box<dyn SpinSurface>) {
        self.controller.lock().attach_surface(surface);
    }

    /// Shared handle to the animation controller, for host tick loops.
    pub fn controller(&self) -> Arc<Mutex<SpinController>> {
        self.controller.clone()
    }

    /// Choose a winner and start the wheel toward it.
    ///
    /// Fails with `InvalidConfig` for an unusable pool, `AlreadySpinning`
    /// while a spin is in flight, and `NoTarget` without a surface; a
    /// rejected call leaves the controller, ring, and stats untouched.
    pub fn pull_lever(&mut self, pool: &[Entry]) -> FwResult<PendingSpin> {
        validate_pool(pool)?;
        if self.controller.lock().is_spinning() {
            return Err(FwError::AlreadySpinning);
        }

        let recent: Vec<String> = self.recent.iter().cloned().collect();
        let entry = select(pool, &recent, self.timing.avoid_repeat_count, &mut self.rng)?.clone();
        let delta = target_delta(pool, &entry, self.timing.base_rotations, &mut self.rng);

        let ticket =
            self.controller
                .lock()
                .begin_spin(delta, self.timing.spin_duration_ms, None)?;
        self.stats.total_spins += 1;

        Ok(PendingSpin {
            entry,
            target_delta: delta,
            ticket,
        })
    }

    /// Record a landed winner: feeds the anti-repeat ring and the stats,
    /// and returns the data a history record is built from.
    pub fn record_result(&mut self, entry: &Entry) -> DrawOutcome {
        self.recent.push_front(entry.id.clone());
        self.recent.truncate(self.timing.avoid_repeat_count);
        *self.stats.results.entry(entry.id.clone()).or_default() += 1;

        DrawOutcome {
            entry_id: entry.id.clone(),
            result_label: entry.label.clone(),
        }
    }

    /// Pull the lever and drive the animation to completion on this
    /// thread, recording the result.
    ///
    /// Returns `Ok(None)` only if another handle cancelled the spin
    /// mid-flight.
    pub fn spin_blocking(&mut self, pool: &[Entry]) -> FwResult<Option<DrawOutcome>> {
        let pending = self.pull_lever(pool)?;
        Ticker::new(self.timing.tick_interval_ms).run(&self.controller);
        match pending.ticket.wait() {
            Some(SpinOutcome::Landed { .. }) => Ok(Some(self.record_result(&pending.entry))),
            _ => Ok(None),
        }
    }

    /// Cancel the in-flight spin, if any.
    pub fn cancel_spin(&self) {
        self.controller.lock().cancel();
    }

    /// Cancel and zero the wheel.
    pub fn reset_spin(&self) {
        self.controller.lock().reset();
    }

    /// Controller state snapshot.
    pub fn spin_state(&self) -> SpinState {
        self.controller.lock().state()
    }

    /// Most-recent-first winner ids currently feeding the selector.
    pub fn recent_winners(&self) -> &VecDeque<String> {
        &self.recent
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn timing(&self) -> &SpinTimingConfig {
        &self.timing
    }
}
