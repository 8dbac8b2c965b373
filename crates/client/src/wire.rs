//! Wire shapes for the fixed third-party REST contract. Decoded with serde
//! and converted into the domain model at the crate boundary.

use dex_protocol::{Ability, Pokemon, PokemonSummary, Sprites, Stat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryPagePayload {
    pub count: u32,
    pub results: Vec<SummaryEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEntry {
    pub name: String,
    pub url: String,
}

impl From<SummaryEntry> for PokemonSummary {
    fn from(entry: SummaryEntry) -> Self {
        PokemonSummary {
            name: entry.name,
            url: entry.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailPayload {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: SpritesPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatSlot {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SpritesPayload {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ArtworkSprites {
    pub front_default: Option<String>,
}

impl From<DetailPayload> for Pokemon {
    fn from(mut payload: DetailPayload) -> Self {
        // Slot order is the primary-first order consumers rely on.
        payload.types.sort_by_key(|t| t.slot);
        Pokemon {
            id: payload.id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            base_experience: payload.base_experience,
            types: payload
                .types
                .into_iter()
                .map(|t| t.type_ref.name.to_ascii_lowercase())
                .collect(),
            abilities: payload
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                })
                .collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base_value: s.base_stat.min(255) as u8,
                })
                .collect(),
            sprites: Sprites {
                official: payload.sprites.other.official_artwork.front_default,
                front: payload.sprites.front_default,
                back: payload.sprites.back_default,
            },
        }
    }
}
