//! Persistence for the roster and run configuration.
//!
//! The allocator never touches storage. Callers load plain values through a
//! `Repository`, run the allocator on them, and save edits back.
//!
//! ```
//! use perk_randomizer::roster::NewPlayer;
//! use perk_randomizer::store::{MemoryStore, Repository};
//!
//! let mut repo = Repository::new(MemoryStore::new());
//!
//! let mut roster = repo.load_roster().unwrap();
//! roster.add_player(NewPlayer::named("Jake"));
//! repo.save_roster(&roster).unwrap();
//!
//! assert_eq!(repo.load_roster().unwrap().len(), 1);
//! ```

mod kv;
mod repository;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{Encoding, Repository, CONFIG_KEY, ROSTER_KEY};
