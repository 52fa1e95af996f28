//! Single shared draw split into blocks.
//!
//! Draws `perks_per_player * players` perks once from one pool and hands out
//! contiguous blocks in player order. No perk can reach two players, but
//! every player draws from the same pool: per-player eligibility is not
//! supported. Players past the end of an undersized draw get short or empty
//! hands.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::allocation::{Allocation, PerkHand};
use super::{dedup_pool, AllocationStrategy, PoolSource};
use crate::core::{ItemId, PerkRng, PlayerRef, DEFAULT_PERKS_PER_PLAYER};
use crate::sampler::pick;

/// Draw once from `shared_pool` and split the draw between `players`.
///
/// ```
/// use perk_randomizer::allocator::allocate_pooled;
/// use perk_randomizer::core::{ItemId, PerkRng, PlayerRef};
///
/// let pool: Vec<ItemId> = (0..10).map(|i| ItemId::new(i.to_string())).collect();
/// let players = [PlayerRef::new("A"), PlayerRef::new("B"), PlayerRef::new("C")];
///
/// let result = allocate_pooled(&players, &pool, 4, &mut PerkRng::new(3));
///
/// assert_eq!(result.get(&players[0]).unwrap().len(), 4);
/// assert_eq!(result.get(&players[1]).unwrap().len(), 4);
/// assert_eq!(result.get(&players[2]).unwrap().len(), 2);
/// assert!(result.is_disjoint());
/// ```
pub fn allocate_pooled(
    players: &[PlayerRef],
    shared_pool: &[ItemId],
    perks_per_player: usize,
    rng: &mut PerkRng,
) -> Allocation {
    let pool = dedup_pool(shared_pool.to_vec());
    let wanted = perks_per_player.saturating_mul(players.len());
    let draw = pick(wanted, &pool, rng);

    let mut allocation = Allocation::with_capacity(players.len());
    for (i, player) in players.iter().enumerate() {
        let start = i.saturating_mul(perks_per_player).min(draw.len());
        let end = start.saturating_add(perks_per_player).min(draw.len());
        let hand: PerkHand = draw[start..end].iter().cloned().collect();

        if hand.len() < perks_per_player {
            debug!(
                %player,
                drawn = hand.len(),
                target = perks_per_player,
                "shared pool exhausted"
            );
        }

        allocation.insert(player.clone(), hand);
    }

    debug!(
        players = players.len(),
        pool = pool.len(),
        drawn = draw.len(),
        "pooled allocation complete"
    );
    allocation
}

/// Ordered union of the pools of `players`.
pub fn shared_pool<P>(players: &[PlayerRef], pools: &P) -> Vec<ItemId>
where
    P: PoolSource + ?Sized,
{
    let mut seen = FxHashSet::default();
    let mut union = Vec::new();
    for player in players {
        for item in pools.pool_of(player) {
            if seen.insert(item.clone()) {
                union.push(item);
            }
        }
    }
    union
}

/// `allocate_pooled` as an `AllocationStrategy`.
///
/// The shared pool is the union of every participating player's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PooledBlocks {
    pub perks_per_player: usize,
}

impl PooledBlocks {
    #[must_use]
    pub fn new(perks_per_player: usize) -> Self {
        Self { perks_per_player }
    }
}

impl Default for PooledBlocks {
    fn default() -> Self {
        Self::new(DEFAULT_PERKS_PER_PLAYER)
    }
}

impl AllocationStrategy for PooledBlocks {
    fn allocate(
        &self,
        players: &[PlayerRef],
        pools: &dyn PoolSource,
        rng: &mut PerkRng,
    ) -> Allocation {
        let pool = shared_pool(players, pools);
        allocate_pooled(players, &pool, self.perks_per_player, rng)
    }
}
