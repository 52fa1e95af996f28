//! Result of one randomization run.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ItemId, PlayerRef};

/// Perks drawn for one player.
///
/// SmallVec keeps the usual four-perk hand off the heap.
pub type PerkHand = SmallVec<[ItemId; 4]>;

/// Mapping from player to drawn perks, in the order players were processed.
///
/// A hand shorter than the target size is a valid result: the player's pool
/// ran out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    order: Vec<PlayerRef>,
    hands: FxHashMap<PlayerRef, PerkHand>,
}

impl Allocation {
    /// Create an empty allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(players: usize) -> Self {
        Self {
            order: Vec::with_capacity(players),
            hands: FxHashMap::with_capacity_and_hasher(players, Default::default()),
        }
    }

    /// Record a hand. A player seen again keeps their position and the newer
    /// hand replaces the old one.
    pub(crate) fn insert(&mut self, player: PlayerRef, hand: PerkHand) {
        if !self.hands.contains_key(&player) {
            self.order.push(player.clone());
        }
        self.hands.insert(player, hand);
    }

    /// Hand drawn for `player`, if they took part.
    #[must_use]
    pub fn get(&self, player: &PlayerRef) -> Option<&[ItemId]> {
        self.hands.get(player).map(|h| h.as_slice())
    }

    /// Iterate over (player, hand) pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerRef, &[ItemId])> {
        self.order
            .iter()
            .filter_map(|p| self.hands.get(p).map(|h| (p, h.as_slice())))
    }

    /// Participating players in processing order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRef> {
        self.order.iter()
    }

    /// Every drawn perk, player by player.
    pub fn all_items(&self) -> impl Iterator<Item = &ItemId> {
        self.iter().flat_map(|(_, hand)| hand.iter())
    }

    /// Number of players with a hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// True when no perk was handed to more than one player.
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.all_items().all(|item| seen.insert(item))
    }

    /// Players who received fewer than `target` perks.
    pub fn shortfall(&self, target: usize) -> impl Iterator<Item = &PlayerRef> {
        self.iter()
            .filter(move |(_, hand)| hand.len() < target)
            .map(|(p, _)| p)
    }
}
