//! Opaque identifiers for perks and players.
//!
//! ## ItemId
//!
//! Identifies a perk (or any other drawable item). The allocator never looks
//! inside it; it only compares and hashes.
//!
//! ## PlayerRef
//!
//! Identifies a player. Used purely as a map key by the allocator.
//!
//! ## Usage
//!
//! ```
//! use perk_randomizer::core::{ItemId, PlayerRef};
//!
//! let perk = ItemId::new("sprint-burst");
//! let player = PlayerRef::from("player-0");
//!
//! assert_eq!(perk.as_str(), "sprint-burst");
//! assert_eq!(format!("{}", player), "player-0");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a drawable item (a perk).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new item ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a player taking part in a run.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRef(pub String);

impl PlayerRef {
    /// Create a new player reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Reference for the `index`-th auto-allocated player.
    ///
    /// ```
    /// use perk_randomizer::core::PlayerRef;
    ///
    /// assert_eq!(PlayerRef::numbered(3).as_str(), "player-3");
    /// ```
    #[must_use]
    pub fn numbered(index: u32) -> Self {
        Self(format!("player-{index}"))
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerRef {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PlayerRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
