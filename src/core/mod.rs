//! Core types: identifiers, RNG, run configuration, errors.
//!
//! Everything here is plain data. The sampler and allocator consume these
//! types; nothing in this module touches storage.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{ItemId, PlayerRef};
pub use rng::PerkRng;
pub use config::{RunConfig, Strategy, DEFAULT_PERKS_PER_PLAYER};
pub use error::{ConfigError, Error, Result, StoreError};
