//! Unbiased shuffling and fixed-size sampling without replacement.
//!
//! Both operations are Fisher–Yates over an index vector. `pick` runs only
//! the first `k` steps of the shuffle, which is enough to make every
//! `k`-subset equally likely *and* every ordering of that subset equally
//! likely. Inputs are never mutated.
//!
//! ```
//! use perk_randomizer::core::PerkRng;
//! use perk_randomizer::sampler::pick;
//!
//! let mut rng = PerkRng::new(1);
//! let perks = ["a", "b", "c", "d", "e", "f"];
//!
//! let hand = pick(4, &perks, &mut rng);
//! assert_eq!(hand.len(), 4);
//!
//! // Asking for more than exists returns everything, reordered.
//! let all = pick(10, &perks, &mut rng);
//! assert_eq!(all.len(), perks.len());
//! ```

use crate::core::PerkRng;

/// Uniformly random ordered selection of `min(k, n)` distinct indices from `0..n`.
pub fn pick_indices(k: usize, n: usize, rng: &mut PerkRng) -> Vec<usize> {
    let take = k.min(n);
    let mut indices: Vec<usize> = (0..n).collect();

    for i in 0..take {
        let j = rng.gen_range_usize(i..n);
        indices.swap(i, j);
    }

    indices.truncate(take);
    indices
}

/// Randomly permuted copy of `items`.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut PerkRng) -> Vec<T> {
    pick(items.len(), items, rng)
}

/// Draw `min(k, items.len())` distinct elements in random order.
///
/// When `k >= items.len()` every element is returned, still shuffled.
pub fn pick<T: Clone>(k: usize, items: &[T], rng: &mut PerkRng) -> Vec<T> {
    pick_indices(k, items.len(), rng)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// `pick` for callers holding a signed count. Negative counts draw nothing.
pub fn pick_signed<T: Clone>(k: i64, items: &[T], rng: &mut PerkRng) -> Vec<T> {
    let k = usize::try_from(k.max(0)).unwrap_or(usize::MAX);
    pick(k, items, rng)
}
