//! Players, the perk catalog, and eligibility.
//!
//! This is the data the allocator is fed from. The allocator itself only
//! ever sees `PlayerRef`s and flattened pools of `ItemId`s.

pub mod catalog;
pub mod eligibility;
pub mod player;
pub mod registry;

pub use catalog::{Catalog, Character, CharacterId, Perk, Side};
pub use eligibility::{eligible_pool, EligibilityResolver};
pub use player::{NewPlayer, Player};
pub use registry::Roster;
