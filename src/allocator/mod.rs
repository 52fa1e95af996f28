//! Perk allocation across a roster.
//!
//! Two strategies share one result type:
//! - **Greedy exclusion** (`allocate`, `GreedyExclusion`): each player draws
//!   from their own pool in order; with `avoid_overlap`, perks already handed
//!   out are removed from later pools. This is the default.
//! - **Pooled blocks** (`allocate_pooled`, `PooledBlocks`): one draw from a
//!   shared pool, split into contiguous blocks.
//!
//! Neither strategy fails. Running out of perks yields short hands.
//!
//! ## Example
//!
//! ```
//! use perk_randomizer::allocator::{AllocationStrategy, GreedyExclusion};
//! use perk_randomizer::core::{ItemId, PerkRng, PlayerRef};
//!
//! let pool: Vec<ItemId> = (1..=10).map(|i| ItemId::new(format!("p{i}"))).collect();
//! let pools = |_: &PlayerRef| pool.clone();
//! let players = [PlayerRef::new("A"), PlayerRef::new("B")];
//!
//! let strategy = GreedyExclusion::new(true, 4);
//! let result = strategy.allocate(&players, &pools, &mut PerkRng::from_entropy());
//!
//! assert!(result.is_disjoint());
//! assert_eq!(result.get(&players[1]).unwrap().len(), 4);
//! ```

mod allocation;
mod greedy;
mod pooled;

pub use allocation::{Allocation, PerkHand};
pub use greedy::{allocate, GreedyExclusion};
pub use pooled::{allocate_pooled, shared_pool, PooledBlocks};

use rustc_hash::FxHashSet;

use crate::core::{ItemId, PerkRng, PlayerRef, RunConfig, Strategy};

/// Supplies each player's eligible pool.
pub trait PoolSource {
    /// Candidate perks for `player`. Unknown players have an empty pool.
    fn pool_of(&self, player: &PlayerRef) -> Vec<ItemId>;
}

impl<F> PoolSource for F
where
    F: Fn(&PlayerRef) -> Vec<ItemId>,
{
    fn pool_of(&self, player: &PlayerRef) -> Vec<ItemId> {
        self(player)
    }
}

/// A way of sharing perks out across an ordered list of players.
pub trait AllocationStrategy {
    fn allocate(
        &self,
        players: &[PlayerRef],
        pools: &dyn PoolSource,
        rng: &mut PerkRng,
    ) -> Allocation;
}

/// Strategy selected by a run configuration.
#[must_use]
pub fn strategy_for(config: &RunConfig) -> Box<dyn AllocationStrategy> {
    match config.strategy {
        Strategy::GreedyExclusion => Box::new(GreedyExclusion::new(
            config.avoid_overlap,
            config.perks_per_player,
        )),
        Strategy::PooledBlocks => Box::new(PooledBlocks::new(config.perks_per_player)),
    }
}

/// Remove repeated entries, keeping the first occurrence.
pub(crate) fn dedup_pool(mut pool: Vec<ItemId>) -> Vec<ItemId> {
    let mut seen = FxHashSet::default();
    pool.retain(|item| seen.insert(item.clone()));
    pool
}
