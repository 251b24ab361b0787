//! Anti-repeat winner selection

use rand::Rng;

use fw_core::{Entry, FwResult, weighted_draw, weighted_draw_among};

/// Pick a winner, softly avoiding the most recent ones.
///
/// The `avoid_count` most recent winner ids are excluded from the draw
/// pool before delegating to the weighted draw. The exclusion is a soft
/// constraint: pools no bigger than `avoid_count` skip it entirely, and
/// an exclusion that empties the pool (entries deleted underneath us)
/// falls back to the full pool instead of erroring.
pub fn select<'a, R: Rng + ?Sized>(
    pool: &'a [Entry],
    recent_ids: &[String],
    avoid_count: usize,
    rng: &mut R,
) -> FwResult<&'a Entry> {
    if pool.len() <= avoid_count {
        return weighted_draw(pool, rng);
    }

    let excluded = &recent_ids[..avoid_count.min(recent_ids.len())];
    let candidates: Vec<&Entry> = pool
        .iter()
        .filter(|e| !excluded.iter().any(|id| *id == e.id))
        .collect();

    if candidates.is_empty() {
        log::warn!(
            "anti-repeat exclusion emptied the pool, drawing from all {} entries",
            pool.len()
        );
        return weighted_draw(pool, rng);
    }

    weighted_draw_among(&candidates, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<Entry> {
        vec![
            Entry::text("a", "Apple", 1),
            Entry::text("b", "Berry", 1),
            Entry::text("c", "Cherry", 1),
        ]
    }

    #[test]
    fn test_recent_winner_is_excluded() {
        // Pool of 3, avoid 2, A recent: A must never come up this call.
        let pool = pool();
        let recent = vec!["a".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let winner = select(&pool, &recent, 2, &mut rng).unwrap();
            assert_ne!(winner.id, "a");
        }
    }

    #[test]
    fn test_last_two_winners_are_excluded() {
        let pool = pool();
        let recent = vec!["b".to_string(), "c".to_string()];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let winner = select(&pool, &recent, 2, &mut rng).unwrap();
            assert_eq!(winner.id, "a");
        }
    }

    #[test]
    fn test_small_pool_skips_exclusion() {
        // Two entries, avoid 2: exclusion would starve the draw, so the
        // full pool stays eligible.
        let pool = vec![Entry::text("a", "Apple", 1), Entry::text("b", "Berry", 1)];
        let recent = vec!["a".to_string(), "b".to_string()];
        let mut rng = StdRng::seed_from_u64(5);
        let mut saw_a = false;
        let mut saw_b = false;
        for _ in 0..200 {
            match select(&pool, &recent, 2, &mut rng).unwrap().id.as_str() {
                "a" => saw_a = true,
                "b" => saw_b = true,
                other => panic!("unexpected winner {other}"),
            }
        }
        assert!(saw_a && saw_b);
    }

    #[test]
    fn test_fully_recent_small_pool_skips_exclusion() {
        // Every entry is "recent" and the pool is no bigger than the
        // avoid count, so exclusion is skipped up front.
        let pool = vec![
            Entry::text("a", "Apple", 1),
            Entry::text("b", "Berry", 1),
            Entry::text("c", "Cherry", 1),
        ];
        let recent = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut rng = StdRng::seed_from_u64(11);
        select(&pool, &recent, 3, &mut rng).unwrap();
    }

    #[test]
    fn test_emptied_candidates_fall_back_to_full_pool() {
        // A pool bigger than the avoid count whose exclusion still wipes
        // out every candidate (repeated ids can do this); the draw
        // degrades to the full pool instead of erroring.
        let pool = vec![
            Entry::text("a", "Apple", 1),
            Entry::text("a", "Apple", 1),
            Entry::text("b", "Berry", 1),
            Entry::text("b", "Berry", 1),
        ];
        let recent = vec!["a".to_string(), "b".to_string()];
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let winner = select(&pool, &recent, 2, &mut rng).unwrap();
            assert!(pool.iter().any(|e| e.id == winner.id));
        }
    }

    #[test]
    fn test_empty_pool_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select(&[], &[], 2, &mut rng).is_err());
    }

    #[test]
    fn test_exclusion_preserves_weight_bias() {
        // With A excluded, C (weight 3) should beat B (weight 1) roughly
        // 3:1 over many draws.
        let pool = vec![
            Entry::text("a", "Apple", 100),
            Entry::text("b", "Berry", 1),
            Entry::text("c", "Cherry", 3),
        ];
        let recent = vec!["a".to_string()];
        let mut rng = StdRng::seed_from_u64(21);
        let mut c_wins = 0u32;
        let draws = 4000;
        for _ in 0..draws {
            if select(&pool, &recent, 1, &mut rng).unwrap().id == "c" {
                c_wins += 1;
            }
        }
        let observed = f64::from(c_wins) / f64::from(draws);
        assert!((observed - 0.75).abs() < 0.03, "observed {observed}");
    }
}
