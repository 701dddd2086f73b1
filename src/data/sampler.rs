// ============================================================
// Layer 4 — Working-Set Sampler
// ============================================================
// Draws a uniform random sample without replacement: shuffle,
// then keep the first `sample_size` items. Requesting more
// items than exist returns all of them.
//
// The draw is from OS entropy by default; passing a seed makes
// it reproducible (test suites and resumable annotation runs).
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Randomly sample up to `sample_size` items from `items`,
/// without replacement. Order of the result is the shuffle
/// order, not the input order.
pub fn sample<T>(mut items: Vec<T>, sample_size: usize, seed: Option<u64>) -> Vec<T> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None    => StdRng::from_entropy(),
    };

    items.shuffle(&mut rng);

    let total = items.len();
    items.truncate(sample_size);

    tracing::debug!(
        "Sampled {} of {} items (requested {})",
        items.len(),
        total,
        sample_size,
    );

    items
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_corpus_returns_everything() {
        let items: Vec<usize> = (0..10).collect();
        let picked = sample(items, 40, None);
        assert_eq!(picked.len(), 10);
    }

    #[test]
    fn test_large_corpus_returns_exactly_the_requested_size() {
        let items: Vec<usize> = (0..1000).collect();
        let picked = sample(items, 40, None);
        assert_eq!(picked.len(), 40);
    }

    #[test]
    fn test_no_replacement() {
        let items: Vec<usize> = (0..50).collect();
        let mut picked = sample(items, 50, None);
        picked.sort_unstable();
        // Every item exactly once
        assert_eq!(picked, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_makes_the_draw_reproducible() {
        let a = sample((0..100).collect::<Vec<_>>(), 10, Some(7));
        let b = sample((0..100).collect::<Vec<_>>(), 10, Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_corpus() {
        let picked = sample(Vec::<usize>::new(), 40, None);
        assert!(picked.is_empty());
    }
}
