//! Turning a player's selections into a candidate pool.

use rustc_hash::FxHashSet;

use super::catalog::Catalog;
use super::player::Player;
use super::registry::Roster;
use crate::allocator::PoolSource;
use crate::core::{ItemId, PlayerRef};

/// Flattened eligible pool for one player: directly selected perks first,
/// then each selected character's perks, without duplicates.
pub fn eligible_pool(player: &Player, catalog: &Catalog) -> Vec<ItemId> {
    let mut seen = FxHashSet::default();
    let character_perks = player
        .available_character_ids
        .iter()
        .flat_map(|c| catalog.character_perks(c));

    player
        .available_perk_ids
        .iter()
        .chain(character_perks)
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

/// Pool source that expands selected characters through a catalog.
#[derive(Clone, Copy, Debug)]
pub struct EligibilityResolver<'a> {
    roster: &'a Roster,
    catalog: &'a Catalog,
}

impl<'a> EligibilityResolver<'a> {
    #[must_use]
    pub fn new(roster: &'a Roster, catalog: &'a Catalog) -> Self {
        Self { roster, catalog }
    }
}

impl PoolSource for EligibilityResolver<'_> {
    fn pool_of(&self, player: &PlayerRef) -> Vec<ItemId> {
        self.roster
            .get(player)
            .map(|p| eligible_pool(p, self.catalog))
            .unwrap_or_default()
    }
}

/// Without a catalog only directly selected perks are eligible.
impl PoolSource for Roster {
    fn pool_of(&self, player: &PlayerRef) -> Vec<ItemId> {
        self.get(player)
            .map(|p| p.available_perk_ids.clone())
            .unwrap_or_default()
    }
}
