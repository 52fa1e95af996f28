//! Catalog of known perks and characters.
//!
//! The catalog is read-only reference data: display names, which side a perk
//! belongs to, and which character teaches it. It is loaded from a JSON
//! document of the form:
//!
//! ```json
//! {
//!   "characters": [{ "id": "c1", "name": "Meg Thomas", "type": "survivor" }],
//!   "perks": [{ "id": "p1", "name": "Sprint Burst", "type": "survivor", "characterId": "c1" }]
//! }
//! ```
//!
//! Both lists are sorted case-insensitively by name on load.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ItemId;

/// Identifier of a playable character.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side a perk or character plays on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Survivor,
    Killer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(rename = "type")]
    pub side: Side,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub side: Side,
    /// Character that teaches this perk. `None` for general perks.
    #[serde(default)]
    pub character_id: Option<CharacterId>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    characters: Vec<Character>,
    #[serde(default)]
    perks: Vec<Perk>,
}

/// Loaded perk and character data with lookup indexes.
///
/// ## Example
///
/// ```
/// use perk_randomizer::roster::{Catalog, CharacterId};
///
/// let catalog = Catalog::from_json(r#"{
///     "characters": [{"id": "c1", "name": "Meg", "type": "survivor"}],
///     "perks": [
///         {"id": "p2", "name": "sprint burst", "type": "survivor", "characterId": "c1"},
///         {"id": "p1", "name": "Adrenaline", "type": "survivor", "characterId": "c1"}
///     ]
/// }"#).unwrap();
///
/// let names: Vec<_> = catalog.perks().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Adrenaline", "sprint burst"]);
/// assert_eq!(catalog.character_perks(&CharacterId::new("c1")).len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    characters: Vec<Character>,
    perks: Vec<Perk>,
    perk_index: FxHashMap<ItemId, usize>,
    character_perks: FxHashMap<CharacterId, Vec<ItemId>>,
}

impl Catalog {
    /// Build a catalog, sorting and indexing the inputs.
    pub fn new(mut characters: Vec<Character>, mut perks: Vec<Perk>) -> Self {
        characters.sort_by_cached_key(|c| c.name.to_lowercase());
        perks.sort_by_cached_key(|p| p.name.to_lowercase());

        let perk_index = perks
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        let mut character_perks: FxHashMap<CharacterId, Vec<ItemId>> = FxHashMap::default();
        for perk in &perks {
            if let Some(character) = &perk.character_id {
                character_perks
                    .entry(character.clone())
                    .or_default()
                    .push(perk.id.clone());
            }
        }

        Self {
            characters,
            perks,
            perk_index,
            character_perks,
        }
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.characters, doc.perks))
    }

    /// All characters, sorted by name.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// All perks, sorted by name.
    #[must_use]
    pub fn perks(&self) -> &[Perk] {
        &self.perks
    }

    #[must_use]
    pub fn perk(&self, id: &ItemId) -> Option<&Perk> {
        self.perk_index.get(id).map(|&i| &self.perks[i])
    }

    /// Display name for a perk, falling back to its raw ID.
    #[must_use]
    pub fn perk_name<'a>(&'a self, id: &'a ItemId) -> &'a str {
        self.perk(id).map_or(id.as_str(), |p| p.name.as_str())
    }

    /// Perks taught by a character, in catalog order. Empty if unknown.
    #[must_use]
    pub fn character_perks(&self, id: &CharacterId) -> &[ItemId] {
        self.character_perks.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn survivor_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.side == Side::Survivor)
    }

    pub fn survivor_perks(&self) -> impl Iterator<Item = &Perk> {
        self.perks.iter().filter(|p| p.side == Side::Survivor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.perks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }
}
