//! Players and what they are allowed to draw.

use serde::{Deserialize, Serialize};

use super::catalog::CharacterId;
use crate::core::{ItemId, PlayerRef};

/// A roster entry.
///
/// A player's eligible pool is the perks listed here plus every perk owned
/// by a listed character (see `EligibilityResolver`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerRef,

    pub name: String,

    /// Perks selected directly.
    #[serde(default, alias = "availablePerks")]
    pub available_perk_ids: Vec<ItemId>,

    /// Characters whose own perks are also eligible.
    #[serde(default, alias = "availableCharacters")]
    pub available_character_ids: Vec<CharacterId>,
}

/// Player data without an ID, used for creation and updates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub available_perk_ids: Vec<ItemId>,
    pub available_character_ids: Vec<CharacterId>,
}

impl NewPlayer {
    /// A player with a name and nothing selected.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add directly selected perks.
    #[must_use]
    pub fn with_perks<I, T>(mut self, perks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        self.available_perk_ids.extend(perks.into_iter().map(Into::into));
        self
    }

    /// Add selected characters.
    #[must_use]
    pub fn with_characters<I, T>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CharacterId>,
    {
        self.available_character_ids
            .extend(characters.into_iter().map(Into::into));
        self
    }

    pub(crate) fn into_player(self, id: PlayerRef) -> Player {
        Player {
            id,
            name: self.name,
            available_perk_ids: self.available_perk_ids,
            available_character_ids: self.available_character_ids,
        }
    }
}
