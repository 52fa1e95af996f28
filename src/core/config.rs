//! Run configuration.
//!
//! A `RunConfig` says who takes part in the next randomization and how the
//! perks are shared out:
//! - `players`: ordered participants. Order is precedence: earlier players
//!   draw first when overlap is avoided.
//! - `avoid_overlap`: exclude perks already handed to earlier players.
//! - `perks_per_player`: target hand size (4 unless changed).
//! - `strategy`: greedy per-player exclusion, or one pooled draw.
//! - `seed`: fixed seed for a replayable run; `None` draws from entropy.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::ids::PlayerRef;
use crate::roster::Roster;

/// Default number of perks handed to each player.
pub const DEFAULT_PERKS_PER_PLAYER: usize = 4;

/// How perks are distributed across the participating players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Each player draws from their own eligible pool, in order. With
    /// `avoid_overlap`, perks drawn by earlier players are removed first.
    #[default]
    GreedyExclusion,
    /// One draw of `perks_per_player * players` from the union of all pools,
    /// split into contiguous blocks. Never overlaps, ignores `avoid_overlap`.
    PooledBlocks,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::GreedyExclusion => f.write_str("greedy"),
            Strategy::PooledBlocks => f.write_str("pooled"),
        }
    }
}

/// Configuration for one randomization run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunConfig {
    /// Participating players, in precedence order.
    #[serde(alias = "randomizingPlayerIds")]
    pub players: Vec<PlayerRef>,

    /// Remove perks already assigned in this run from later players' pools.
    #[serde(alias = "isAvoidingOverlapping")]
    pub avoid_overlap: bool,

    /// Target number of perks per player.
    pub perks_per_player: usize,

    /// Distribution strategy.
    pub strategy: Strategy,

    /// Fixed seed for a replayable run.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            avoid_overlap: false,
            perks_per_player: DEFAULT_PERKS_PER_PLAYER,
            strategy: Strategy::GreedyExclusion,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Create a config with the given participants.
    pub fn new(players: impl IntoIterator<Item = PlayerRef>) -> Self {
        Self {
            players: players.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the overlap flag.
    #[must_use]
    pub fn with_avoid_overlap(mut self, avoid_overlap: bool) -> Self {
        self.avoid_overlap = avoid_overlap;
        self
    }

    /// Set the target hand size.
    #[must_use]
    pub fn with_perks_per_player(mut self, count: usize) -> Self {
        self.perks_per_player = count;
        self
    }

    /// Set the distribution strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Append a participant.
    pub fn add_player(&mut self, player: PlayerRef) {
        self.players.push(player);
    }

    /// Drop every occurrence of a participant.
    pub fn remove_player(&mut self, player: &PlayerRef) {
        self.players.retain(|p| p != player);
    }

    /// Flip the overlap flag.
    pub fn toggle_avoid_overlap(&mut self) {
        self.avoid_overlap = !self.avoid_overlap;
    }

    /// Check the config against the roster it will run on.
    pub fn validate(&self, roster: &Roster) -> Result<(), ConfigError> {
        if self.perks_per_player == 0 {
            return Err(ConfigError::ZeroPerkCount);
        }

        let mut seen = FxHashSet::default();
        for player in &self.players {
            if !roster.contains(player) {
                return Err(ConfigError::UnknownPlayer(player.clone()));
            }
            if !seen.insert(player) {
                return Err(ConfigError::DuplicatePlayer(player.clone()));
            }
        }

        Ok(())
    }
}
