//! # perk-randomizer
//!
//! Random perk assignment for a roster of players.
//!
//! ## Design Principles
//!
//! 1. **Unbiased**: every hand is a uniformly random ordered subset of the
//!    player's pool (partial Fisher–Yates).
//!
//! 2. **Never fails on exhaustion**: a pool smaller than the target hand
//!    size yields a shorter hand, down to empty.
//!
//! 3. **Order is precedence**: with overlap avoidance, earlier players draw
//!    first and later players draw from what is left.
//!
//! 4. **Pure core**: the sampler and allocator take plain values and an RNG.
//!    Storage, display, and input live outside them.
//!
//! ## Modules
//!
//! - `core`: identifiers, RNG, run configuration, errors
//! - `sampler`: shuffle and pick-without-replacement
//! - `allocator`: greedy and pooled allocation across players
//! - `roster`: players, perk catalog, eligibility
//! - `store`: key-value persistence with default fallback
//! - `session`: provider/sink traits and the `Randomizer` driver
//! - `logging`: `tracing` subscriber setup for binaries

pub mod core;
pub mod sampler;
pub mod allocator;
pub mod roster;
pub mod store;
pub mod session;
pub mod logging;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ItemId, PlayerRef, PerkRng,
    RunConfig, Strategy, DEFAULT_PERKS_PER_PLAYER,
    ConfigError, StoreError, Error, Result,
};

pub use crate::sampler::{pick, shuffle};

pub use crate::allocator::{
    allocate, allocate_pooled,
    Allocation, PerkHand, PoolSource,
    AllocationStrategy, GreedyExclusion, PooledBlocks,
};

pub use crate::roster::{Catalog, CharacterId, NewPlayer, Player, Roster, EligibilityResolver};

pub use crate::store::{Encoding, FileStore, KeyValueStore, MemoryStore, Repository};

pub use crate::session::{Randomizer, ResultsSink, RosterProvider, RunConfigProvider};
