//! End-to-end wheel pipeline tests
//!
//! Covers the complete flow:
//! - weighted draw with anti-repeat bias
//! - rotation target landing on the winner's sector
//! - cooperative animation to completion
//! - history record persisted by the collaborator

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fw_core::Entry;
use fw_state::{DrawHistory, DrawRecord, MAX_HISTORY_RECORDS, WheelPreferences};
use fw_wheel::{
    SpinOutcome, SpinSurface, SpinTimingConfig, Ticker, WheelSession, layout, sector_angle,
};

/// Surface that remembers the last applied rotation.
struct LastAngleSurface {
    last: Arc<Mutex<f64>>,
}

impl SpinSurface for LastAngleSurface {
    fn apply_rotation(&mut self, degrees: f64) {
        *self.last.lock() = degrees;
    }
}

fn pool() -> Vec<Entry> {
    vec![
        Entry::text("a", "Apple", 10),
        Entry::text("b", "Berry", 20),
        Entry::text("c", "Cherry", 30),
        Entry::text("d", "Damson", 20),
        Entry::text("e", "Elder", 10),
        Entry::text("f", "Fig", 10),
    ]
}

#[test]
fn test_spin_lands_on_winning_sector() {
    let pool = pool();
    let last = Arc::new(Mutex::new(0.0));
    let mut session = WheelSession::with_rng(SpinTimingConfig::studio(), StdRng::seed_from_u64(7));
    session.attach_surface(Box::new(LastAngleSurface { last: last.clone() }));

    for _ in 0..10 {
        let start_angle = session.spin_state().current_angle;
        let pending = session.pull_lever(&pool).unwrap();
        let winner_index = pool.iter().position(|e| e.id == pending.entry.id).unwrap();
        Ticker::new(1.0).run(&session.controller());
        assert!(matches!(
            pending.ticket.wait(),
            Some(SpinOutcome::Landed { .. })
        ));
        session.record_result(&pending.entry);

        // The applied delta puts the pointer inside the winner's sector:
        // aligned center is 360 - index * sector, jitter < sector / 2.
        let sector = sector_angle(pool.len());
        let delta = *last.lock() - start_angle;
        let within = (delta % 360.0 + 360.0) % 360.0;
        let aligned = (360.0 - winner_index as f64 * sector) % 360.0;
        let mut distance = (within - aligned).abs();
        if distance > 180.0 {
            distance = 360.0 - distance;
        }
        assert!(
            distance < sector / 2.0,
            "winner {} landed {distance}° off its sector center",
            pending.entry.id
        );
    }
}

#[test]
fn test_completed_draws_build_history() {
    let pool = pool();
    let mut session = WheelSession::with_rng(SpinTimingConfig::studio(), StdRng::seed_from_u64(3));
    session.attach_surface(Box::new(LastAngleSurface {
        last: Arc::new(Mutex::new(0.0)),
    }));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut history = DrawHistory::new();

    for _ in 0..5 {
        let outcome = session.spin_blocking(&pool).unwrap().unwrap();
        history.push(DrawRecord::new(outcome.entry_id, outcome.result_label));
    }
    history.save(&path).unwrap();

    let restored = DrawHistory::load(&path).unwrap();
    assert_eq!(restored.len(), 5);
    assert!(restored.len() <= MAX_HISTORY_RECORDS);
    for record in restored.iter() {
        assert!(pool.iter().any(|e| e.id == record.entry_id));
    }
}

#[test]
fn test_preferences_feed_the_session() {
    // The persisted entry list is a valid draw pool as-is.
    let prefs = WheelPreferences::default();
    let mut session = WheelSession::with_rng(SpinTimingConfig::studio(), StdRng::seed_from_u64(1));
    session.attach_surface(Box::new(LastAngleSurface {
        last: Arc::new(Mutex::new(0.0)),
    }));

    let outcome = session.spin_blocking(&prefs.entries).unwrap().unwrap();
    assert!(prefs.entries.iter().any(|e| e.id == outcome.entry_id));

    // And the static layout covers every entry exactly once.
    let placed = layout(&prefs.entries, 150.0);
    assert_eq!(placed.len(), prefs.entries.len());
}

#[test]
fn test_cancel_mid_spin_leaves_no_record() {
    let pool = pool();
    let mut session =
        WheelSession::with_rng(SpinTimingConfig::normal(), StdRng::seed_from_u64(11));
    session.attach_surface(Box::new(LastAngleSurface {
        last: Arc::new(Mutex::new(0.0)),
    }));

    let pending = session.pull_lever(&pool).unwrap();
    let controller = session.controller();
    controller.lock().tick(100.0);
    session.cancel_spin();

    assert_eq!(pending.ticket.wait(), Some(SpinOutcome::Cancelled));
    assert!(!session.spin_state().is_spinning);
    // Cancelled spins never feed the anti-repeat ring.
    assert!(session.recent_winners().is_empty());
}
