//! Per-player draws with optional greedy exclusion.
//!
//! Players are processed in order. With `avoid_overlap`, every perk a player
//! receives is removed from the pools of the players after them, so earlier
//! players get first choice. A later player whose remaining pool is smaller
//! than the target simply receives fewer perks.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::allocation::{Allocation, PerkHand};
use super::{dedup_pool, AllocationStrategy, PoolSource};
use crate::core::{ItemId, PerkRng, PlayerRef, DEFAULT_PERKS_PER_PLAYER};
use crate::sampler::pick;

/// Draw up to `perks_per_player` perks for each player in order.
///
/// ```
/// use perk_randomizer::allocator::allocate;
/// use perk_randomizer::core::{ItemId, PerkRng, PlayerRef};
///
/// let shared: Vec<ItemId> = ["x", "y", "z"].into_iter().map(ItemId::from).collect();
/// let players = [PlayerRef::new("A"), PlayerRef::new("B")];
///
/// let result = allocate(&players, &|_: &PlayerRef| shared.clone(), true, 4, &mut PerkRng::new(1));
///
/// assert_eq!(result.get(&players[0]).unwrap().len(), 3);
/// assert!(result.get(&players[1]).unwrap().is_empty());
/// ```
pub fn allocate<P>(
    players: &[PlayerRef],
    pools: &P,
    avoid_overlap: bool,
    perks_per_player: usize,
    rng: &mut PerkRng,
) -> Allocation
where
    P: PoolSource + ?Sized,
{
    let mut used: FxHashSet<ItemId> = FxHashSet::default();
    let mut allocation = Allocation::with_capacity(players.len());

    for player in players {
        let mut available = dedup_pool(pools.pool_of(player));
        if avoid_overlap {
            available.retain(|item| !used.contains(item));
        }

        let hand: PerkHand = pick(perks_per_player, &available, rng).into_iter().collect();
        trace!(%player, available = available.len(), drawn = hand.len(), "drew perks");

        if hand.len() < perks_per_player {
            debug!(%player, drawn = hand.len(), target = perks_per_player, "pool exhausted");
        }

        if avoid_overlap {
            used.extend(hand.iter().cloned());
        }

        allocation.insert(player.clone(), hand);
    }

    debug!(players = players.len(), avoid_overlap, "greedy allocation complete");
    allocation
}

/// `allocate` as an `AllocationStrategy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreedyExclusion {
    pub avoid_overlap: bool,
    pub perks_per_player: usize,
}

impl GreedyExclusion {
    #[must_use]
    pub fn new(avoid_overlap: bool, perks_per_player: usize) -> Self {
        Self {
            avoid_overlap,
            perks_per_player,
        }
    }
}

impl Default for GreedyExclusion {
    fn default() -> Self {
        Self::new(false, DEFAULT_PERKS_PER_PLAYER)
    }
}

impl AllocationStrategy for GreedyExclusion {
    fn allocate(
        &self,
        players: &[PlayerRef],
        pools: &dyn PoolSource,
        rng: &mut PerkRng,
    ) -> Allocation {
        allocate(players, pools, self.avoid_overlap, self.perks_per_player, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn items(ids: &[&str]) -> Vec<ItemId> {
        ids.iter().map(|&s| ItemId::new(s)).collect()
    }

    fn players(ids: &[&str]) -> Vec<PlayerRef> {
        ids.iter().map(|&s| PlayerRef::new(s)).collect()
    }

    #[test]
    fn test_empty_roster() {
        let mut rng = PerkRng::new(0);
        let result = allocate(&[], &|_: &PlayerRef| items(&["a"]), true, 4, &mut rng);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = PerkRng::new(0);
        let roster = players(&["A"]);
        let result = allocate(&roster, &|_: &PlayerRef| Vec::<ItemId>::new(), false, 4, &mut rng);
        assert_eq!(result.get(&roster[0]), Some(&[][..]));
    }

    #[test]
    fn test_starvation() {
        let mut rng = PerkRng::new(5);
        let roster = players(&["A", "B"]);
        let pool = items(&["x", "y", "z"]);

        let result = allocate(&roster, &|_: &PlayerRef| pool.clone(), true, 4, &mut rng);

        assert_eq!(result.get(&roster[0]).unwrap().len(), 3);
        assert_eq!(result.get(&roster[1]).unwrap().len(), 0);
    }

    #[test]
    fn test_overlap_allowed_without_flag() {
        let mut rng = PerkRng::new(5);
        let roster = players(&["A", "B"]);
        let pool = items(&["x", "y", "z"]);

        let result = allocate(&roster, &|_: &PlayerRef| pool.clone(), false, 4, &mut rng);

        assert_eq!(result.get(&roster[0]).unwrap().len(), 3);
        assert_eq!(result.get(&roster[1]).unwrap().len(), 3);
    }

    #[test]
    fn test_per_player_pools_respected() {
        let mut rng = PerkRng::new(12);
        let mut pools: FxHashMap<PlayerRef, Vec<ItemId>> = FxHashMap::default();
        pools.insert(PlayerRef::new("A"), items(&["a1", "a2", "a3", "a4", "a5"]));
        pools.insert(PlayerRef::new("B"), items(&["b1", "b2"]));
        let source = |p: &PlayerRef| pools.get(p).cloned().unwrap_or_default();

        let roster = players(&["A", "B"]);
        let result = allocate(&roster, &source, true, 4, &mut rng);

        let a = result.get(&roster[0]).unwrap();
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|i| i.as_str().starts_with('a')));

        let b = result.get(&roster[1]).unwrap();
        assert_eq!(b.len(), 2);
        assert!(b.iter().all(|i| i.as_str().starts_with('b')));
    }

    #[test]
    fn test_duplicate_pool_entries_collapsed() {
        let mut rng = PerkRng::new(3);
        let roster = players(&["A"]);
        let pool = |_: &PlayerRef| items(&["x", "x", "y"]);
        let result = allocate(&roster, &pool, false, 4, &mut rng);

        let mut hand = result.get(&roster[0]).unwrap().to_vec();
        hand.sort();
        assert_eq!(hand, items(&["x", "y"]));
    }

    #[test]
    fn test_repeated_player_replaced_and_both_draws_used() {
        let mut rng = PerkRng::new(3);
        let roster = players(&["A", "A", "B"]);
        let pool = items(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);

        let result = allocate(&roster, &|_: &PlayerRef| pool.clone(), true, 4, &mut rng);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get(&roster[0]).unwrap().len(), 4);
        // Two draws of four for A leave two for B.
        assert_eq!(result.get(&roster[2]).unwrap().len(), 2);
        assert!(result.is_disjoint());
    }

    #[test]
    fn test_strategy_matches_function() {
        let roster = players(&["A", "B", "C"]);
        let pool = items(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        let source = |_: &PlayerRef| pool.clone();

        let strategy = GreedyExclusion::new(true, 3);
        let via_trait = strategy.allocate(&roster, &source, &mut PerkRng::new(44));
        let via_fn = allocate(&roster, &source, true, 3, &mut PerkRng::new(44));

        assert_eq!(via_trait, via_fn);
        assert!(via_trait.is_disjoint());
    }
}
