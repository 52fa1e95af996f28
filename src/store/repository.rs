//! Typed access to the roster and run configuration.
//!
//! Loading never fails on bad data. A missing value is replaced by the
//! default (and the default is written back); an unreadable value is logged
//! and the default is used instead. Only the backend itself (I/O) can make a
//! load fail.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::core::{PlayerRef, RunConfig, StoreError};
use crate::roster::{Player, Roster};

/// Key holding the roster.
pub const ROSTER_KEY: &str = "players";

/// Key holding the run configuration.
pub const CONFIG_KEY: &str = "config";

/// Serialized form of stored values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Human-readable, compatible with hand-edited files.
    #[default]
    Json,
    /// Compact binary.
    Bincode,
}

impl Encoding {
    pub fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>, StoreError> {
        Ok(match self {
            Encoding::Json => serde_json::to_vec_pretty(value)?,
            Encoding::Bincode => bincode::serialize(value)?,
        })
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, StoreError> {
        Ok(match self {
            Encoding::Json => serde_json::from_slice(bytes)?,
            Encoding::Bincode => bincode::deserialize(bytes)?,
        })
    }
}

/// What happened when a value was read.
enum Loaded<T> {
    Found(T),
    Missing,
    Malformed,
}

/// Roster and configuration persistence on top of a `KeyValueStore`.
#[derive(Clone, Debug, Default)]
pub struct Repository<S> {
    store: S,
    encoding: Encoding,
}

impl<S: KeyValueStore> Repository<S> {
    /// JSON-encoded repository.
    pub fn new(store: S) -> Self {
        Self::with_encoding(store, Encoding::Json)
    }

    pub fn with_encoding(store: S, encoding: Encoding) -> Self {
        Self { store, encoding }
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Loaded<T>, StoreError> {
        self.read_with(key, |encoding, bytes| encoding.decode(bytes))
    }

    fn read_with<T>(
        &self,
        key: &str,
        decode: impl FnOnce(Encoding, &[u8]) -> Result<T, StoreError>,
    ) -> Result<Loaded<T>, StoreError> {
        let Some(bytes) = self.store.get(key)? else {
            return Ok(Loaded::Missing);
        };
        match decode(self.encoding, &bytes) {
            Ok(value) => Ok(Loaded::Found(value)),
            Err(err) => {
                warn!(key, %err, "stored value unreadable, using default");
                Ok(Loaded::Malformed)
            }
        }
    }

    fn read_stored_roster(&self) -> Result<Loaded<Roster>, StoreError> {
        self.read_with(ROSTER_KEY, decode_roster)
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = self.encoding.encode(value)?;
        self.store.set(key, &bytes)
    }

    /// Load the roster without writing anything back.
    pub fn read_roster(&self) -> Result<Roster, StoreError> {
        Ok(match self.read_stored_roster()? {
            Loaded::Found(roster) => roster,
            Loaded::Missing | Loaded::Malformed => Roster::default(),
        })
    }

    /// Load the run configuration without writing anything back.
    pub fn read_config(&self) -> Result<RunConfig, StoreError> {
        Ok(match self.read(CONFIG_KEY)? {
            Loaded::Found(config) => config,
            Loaded::Missing | Loaded::Malformed => RunConfig::default(),
        })
    }

    /// Load the roster, initializing the store if it has none.
    ///
    /// A malformed roster is left in place so it can be recovered by hand.
    pub fn load_roster(&mut self) -> Result<Roster, StoreError> {
        match self.read_stored_roster()? {
            Loaded::Found(roster) => Ok(roster),
            Loaded::Missing => {
                debug!("no stored roster, initializing");
                let roster = Roster::default();
                self.write(ROSTER_KEY, &roster)?;
                Ok(roster)
            }
            Loaded::Malformed => Ok(Roster::default()),
        }
    }

    /// Load the run configuration, replacing a missing or malformed one with
    /// the default.
    pub fn load_config(&mut self) -> Result<RunConfig, StoreError> {
        match self.read(CONFIG_KEY)? {
            Loaded::Found(config) => Ok(config),
            Loaded::Missing | Loaded::Malformed => {
                let config = RunConfig::default();
                self.write(CONFIG_KEY, &config)?;
                Ok(config)
            }
        }
    }

    pub fn save_roster(&mut self, roster: &Roster) -> Result<(), StoreError> {
        self.write(ROSTER_KEY, roster)
    }

    pub fn save_config(&mut self, config: &RunConfig) -> Result<(), StoreError> {
        self.write(CONFIG_KEY, config)
    }
}

/// Decode a stored roster, also accepting the older JSON shape: an object
/// keyed by player ID. Keyed players come back sorted by ID.
fn decode_roster(encoding: Encoding, bytes: &[u8]) -> Result<Roster, StoreError> {
    match encoding.decode(bytes) {
        Err(err) if encoding == Encoding::Json => {
            match serde_json::from_slice::<BTreeMap<PlayerRef, Player>>(bytes) {
                Ok(keyed) => {
                    debug!(players = keyed.len(), "read roster stored as keyed object");
                    Ok(Roster::from_players(keyed.into_values()))
                }
                Err(_) => Err(err),
            }
        }
        decoded => decoded,
    }
}
