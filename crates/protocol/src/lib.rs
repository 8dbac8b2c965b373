use serde::{Deserialize, Serialize};

mod tags;

pub use tags::{ParseTypeTagError, TypeTag};

/// Minimal listing entry returned by the paged index endpoint. Consumed by
/// the resolver and discarded; never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

/// Fully resolved catalog record. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    /// Lowercase type names, primary first. Non-empty upstream.
    pub types: Vec<String>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub sprites: Sprites,
}

impl Pokemon {
    /// Primary type name, used for card coloring.
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("normal")
    }

    /// Membership test against the record's type list (case-insensitive).
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Display name with the leading letter capitalized.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    /// Base stat value, capped at 255 upstream.
    pub base_value: u8,
}

/// Image variant URLs. Any of them may be missing upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprites {
    pub official: Option<String>,
    pub front: Option<String>,
    pub back: Option<String>,
}

/// Signed-in profile, derived from the demo account table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub pokemon_caught: u32,
    pub pokedex_completion: u32,
    pub region: String,
    pub badges: u32,
    pub join_date: String,
}

pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(types: &[&str]) -> Pokemon {
        Pokemon {
            id: 6,
            name: "charizard".to_string(),
            height: 17,
            weight: 905,
            base_experience: Some(267),
            types: types.iter().map(|t| t.to_string()).collect(),
            abilities: vec![Ability {
                name: "blaze".to_string(),
                is_hidden: false,
            }],
            stats: vec![Stat {
                name: "hp".to_string(),
                base_value: 78,
            }],
            sprites: Sprites::default(),
        }
    }

    #[test]
    fn has_type_is_case_insensitive() {
        let p = record(&["fire", "flying"]);
        assert!(p.has_type("fire"));
        assert!(p.has_type("Fire"));
        assert!(p.has_type("FLYING"));
        assert!(!p.has_type("water"));
    }

    #[test]
    fn primary_type_falls_back_to_normal() {
        assert_eq!(record(&["fire", "flying"]).primary_type(), "fire");
        assert_eq!(record(&[]).primary_type(), "normal");
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(record(&["fire"]).display_name(), "Charizard");
        assert_eq!(capitalize(""), "");
    }

}
