//! Spin animation controller
//!
//! A small state machine: `Idle → Spinning → Idle`. The controller owns
//! the wheel's current rotation angle and is the only mutable shared
//! piece of the engine. At most one spin is in flight; a second request
//! is rejected, never queued.
//!
//! Progress is cooperative. The host calls [`SpinController::tick`] once
//! per frame with the elapsed milliseconds; hosts without a frame clock
//! can use [`Ticker`], which drives a shared controller at a fixed small
//! interval instead. Angles are plain degrees and are not normalized
//! during animation — successive spins compose additively, and wrapping
//! to `[0, 360)` is a display concern.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, bounded};
use parking_lot::Mutex;

use fw_core::{FwError, FwResult};

use crate::easing::{DEFAULT_EASING, Easing};

/// Default cooperative tick interval in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: f64 = 16.0;

/// Write-only handle the controller rotates.
///
/// The engine never reads it back; rendering is entirely the host's
/// concern.
pub trait SpinSurface: Send {
    /// Apply an absolute rotation in degrees.
    fn apply_rotation(&mut self, degrees: f64);
}

/// Terminal outcome of one spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinOutcome {
    /// The animation ran to completion.
    Landed {
        /// Absolute wheel angle at the stop, in degrees
        final_angle: f64,
    },
    /// The spin was cancelled before completion.
    Cancelled,
}

/// Snapshot of controller state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinState {
    pub is_spinning: bool,
    pub current_angle: f64,
}

/// Completion signal for one spin.
///
/// Exactly one [`SpinOutcome`] is delivered per spin, `Landed` or
/// `Cancelled`; a caller blocking on [`SpinTicket::wait`] never hangs.
#[derive(Debug)]
pub struct SpinTicket {
    receiver: Receiver<SpinOutcome>,
}

impl SpinTicket {
    /// Block until the spin terminates.
    pub fn wait(&self) -> Option<SpinOutcome> {
        self.receiver.recv().ok()
    }

    /// Non-blocking poll for the outcome.
    pub fn try_outcome(&self) -> Option<SpinOutcome> {
        self.receiver.try_recv().ok()
    }
}

struct ActiveSpin {
    start_angle: f64,
    delta: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
    done_tx: Sender<SpinOutcome>,
}

/// The animation state machine.
pub struct SpinController {
    surface: Option<Box<dyn SpinSurface>>,
    current_angle: f64,
    active: Option<ActiveSpin>,
}

impl SpinController {
    /// Controller with no surface attached; `begin_spin` fails with
    /// `NoTarget` until one is.
    pub fn new() -> Self {
        Self {
            surface: None,
            current_angle: 0.0,
            active: None,
        }
    }

    /// Controller driving the given surface.
    pub fn with_surface(surface: Box<dyn SpinSurface>) -> Self {
        Self {
            surface: Some(surface),
            current_angle: 0.0,
            active: None,
        }
    }

    /// Attach or replace the render surface.
    pub fn attach_surface(&mut self, surface: Box<dyn SpinSurface>) {
        self.surface = Some(surface);
    }

    /// Start a spin of `delta` degrees over `duration_ms`.
    ///
    /// Fails with `AlreadySpinning` while a spin is in flight and with
    /// `NoTarget` when no surface is attached; a rejected call leaves all
    /// state exactly as it was. `easing` defaults to cubic ease-out.
    pub fn begin_spin(
        &mut self,
        delta: f64,
        duration_ms: f64,
        easing: Option<Easing>,
    ) -> FwResult<SpinTicket> {
        if self.active.is_some() {
            return Err(FwError::AlreadySpinning);
        }
        if self.surface.is_none() {
            return Err(FwError::NoTarget);
        }

        let (done_tx, receiver) = bounded(1);
        self.active = Some(ActiveSpin {
            start_angle: self.current_angle,
            delta,
            duration_ms,
            elapsed_ms: 0.0,
            easing: easing.unwrap_or(DEFAULT_EASING),
            done_tx,
        });
        log::debug!("spin started: delta {delta:.1}° over {duration_ms:.0}ms");
        Ok(SpinTicket { receiver })
    }

    /// Advance the active spin by `dt_ms` milliseconds.
    ///
    /// No-op while idle. On the terminal tick the controller returns to
    /// idle and delivers `Landed` exactly once.
    pub fn tick(&mut self, dt_ms: f64) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.elapsed_ms += dt_ms.max(0.0);

        let progress = if active.duration_ms > 0.0 {
            (active.elapsed_ms / active.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = (active.easing)(progress);
        self.current_angle = active.start_angle + active.delta * eased;
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_rotation(self.current_angle);
        }

        if progress >= 1.0 {
            if let Some(finished) = self.active.take() {
                let _ = finished.done_tx.send(SpinOutcome::Landed {
                    final_angle: self.current_angle,
                });
            }
        }
    }

    /// Halt the active spin, if any, and deliver `Cancelled`.
    ///
    /// Cooperative: takes effect immediately here, at what would be the
    /// next tick boundary for a ticker-driven host. The wheel stays at
    /// its current angle. Safe to call while idle.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            let _ = active.done_tx.send(SpinOutcome::Cancelled);
            log::debug!("spin cancelled at {:.1}°", self.current_angle);
        }
    }

    /// Cancel if spinning, then force the angle back to zero.
    pub fn reset(&mut self) {
        self.cancel();
        self.current_angle = 0.0;
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_rotation(0.0);
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> SpinState {
        SpinState {
            is_spinning: self.active.is_some(),
            current_angle: self.current_angle,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-interval driver for hosts without a per-frame callback.
///
/// Sleeps `interval` between ticks and advances the shared controller by
/// the real elapsed time until the spin terminates. Blocking; run it on
/// whatever thread owns the animation.
pub struct Ticker {
    interval: Duration,
}

impl Ticker {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(interval_ms.max(1.0) / 1000.0),
        }
    }

    /// Drive `controller` until it is no longer spinning.
    pub fn run(&self, controller: &Mutex<SpinController>) {
        let mut last = Instant::now();
        loop {
            std::thread::sleep(self.interval);
            let now = Instant::now();
            let dt_ms = now.duration_since(last).as_secs_f64() * 1000.0;
            last = now;

            let mut ctl = controller.lock();
            ctl.tick(dt_ms);
            if !ctl.is_spinning() {
                break;
            }
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS)
    }
}
