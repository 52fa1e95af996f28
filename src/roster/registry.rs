//! The set of known players.
//!
//! Backed by `im` persistent structures so a roster can be snapshotted for
//! a run (or handed to the store) in O(1) while edits continue.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::player::{NewPlayer, Player};
use crate::core::PlayerRef;

/// Known players, kept in insertion order.
///
/// ## Example
///
/// ```
/// use perk_randomizer::roster::{NewPlayer, Roster};
///
/// let mut roster = Roster::new();
/// let id = roster.add_player(NewPlayer::named("Nea").with_perks(["urban-evasion"]));
///
/// assert_eq!(roster.get(&id).unwrap().name, "Nea");
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RosterDocument", into = "RosterDocument")]
pub struct Roster {
    players: ImHashMap<PlayerRef, Player>,
    order: Vector<PlayerRef>,
    next_id: u32,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing players. Later duplicates of an ID win.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        let mut roster = Self::new();
        for player in players {
            roster.insert(player);
        }
        roster
    }

    fn insert(&mut self, player: Player) {
        if !self.players.contains_key(&player.id) {
            self.order.push_back(player.id.clone());
        }
        self.players.insert(player.id.clone(), player);
    }

    fn allocate_id(&mut self) -> PlayerRef {
        loop {
            let id = PlayerRef::numbered(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.players.contains_key(&id) {
                return id;
            }
        }
    }

    /// Add a player and return its newly allocated ID.
    pub fn add_player(&mut self, new_player: NewPlayer) -> PlayerRef {
        let id = self.allocate_id();
        self.insert(new_player.into_player(id.clone()));
        id
    }

    /// Replace a player's data. Returns `false` (and does nothing) if the ID
    /// is unknown.
    pub fn update_player(&mut self, id: &PlayerRef, update: NewPlayer) -> bool {
        if !self.players.contains_key(id) {
            return false;
        }
        self.players.insert(id.clone(), update.into_player(id.clone()));
        true
    }

    /// Remove a player. Unknown IDs are ignored.
    pub fn remove_player(&mut self, id: &PlayerRef) -> Option<Player> {
        let removed = self.players.remove(id)?;
        self.order.retain(|p| p != id);
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: &PlayerRef) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &PlayerRef) -> bool {
        self.players.contains_key(id)
    }

    /// Players in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.order.iter().filter_map(|id| self.players.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// On-disk shape of a roster: a plain ordered list.
///
/// Unknown fields are rejected so that data in any other shape is reported
/// as unreadable instead of loading as an empty roster.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
struct RosterDocument {
    players: Vec<Player>,
    next_id: u32,
}

impl From<RosterDocument> for Roster {
    fn from(doc: RosterDocument) -> Self {
        let mut roster = Roster::from_players(doc.players);
        roster.next_id = roster.next_id.max(doc.next_id);
        roster
    }
}

impl From<Roster> for RosterDocument {
    fn from(roster: Roster) -> Self {
        Self {
            players: roster.players().cloned().collect(),
            next_id: roster.next_id,
        }
    }
}
