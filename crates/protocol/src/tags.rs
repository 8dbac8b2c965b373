use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The 18 fixed category labels used to partition the catalog into
/// parallel views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown type tag '{0}'")]
pub struct ParseTypeTagError(String);

impl TypeTag {
    /// Canonical tab order.
    pub const ALL: [TypeTag; 18] = [
        TypeTag::Normal,
        TypeTag::Fire,
        TypeTag::Water,
        TypeTag::Electric,
        TypeTag::Grass,
        TypeTag::Ice,
        TypeTag::Fighting,
        TypeTag::Poison,
        TypeTag::Ground,
        TypeTag::Flying,
        TypeTag::Psychic,
        TypeTag::Bug,
        TypeTag::Rock,
        TypeTag::Ghost,
        TypeTag::Dragon,
        TypeTag::Dark,
        TypeTag::Steel,
        TypeTag::Fairy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Normal => "normal",
            TypeTag::Fire => "fire",
            TypeTag::Water => "water",
            TypeTag::Electric => "electric",
            TypeTag::Grass => "grass",
            TypeTag::Ice => "ice",
            TypeTag::Fighting => "fighting",
            TypeTag::Poison => "poison",
            TypeTag::Ground => "ground",
            TypeTag::Flying => "flying",
            TypeTag::Psychic => "psychic",
            TypeTag::Bug => "bug",
            TypeTag::Rock => "rock",
            TypeTag::Ghost => "ghost",
            TypeTag::Dragon => "dragon",
            TypeTag::Dark => "dark",
            TypeTag::Steel => "steel",
            TypeTag::Fairy => "fairy",
        }
    }

    /// Tab label with the leading letter capitalized.
    pub fn label(&self) -> String {
        crate::capitalize(self.as_str())
    }

    /// Badge color for terminal rendering.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            TypeTag::Normal => (0xA8, 0xA8, 0x78),
            TypeTag::Fire => (0xF0, 0x80, 0x30),
            TypeTag::Water => (0x68, 0x90, 0xF0),
            TypeTag::Electric => (0xF8, 0xD0, 0x30),
            TypeTag::Grass => (0x78, 0xC8, 0x50),
            TypeTag::Ice => (0x98, 0xD8, 0xD8),
            TypeTag::Fighting => (0xC0, 0x30, 0x28),
            TypeTag::Poison => (0xA0, 0x40, 0xA0),
            TypeTag::Ground => (0xE0, 0xC0, 0x68),
            TypeTag::Flying => (0xA8, 0x90, 0xF0),
            TypeTag::Psychic => (0xF8, 0x58, 0x88),
            TypeTag::Bug => (0xA8, 0xB8, 0x20),
            TypeTag::Rock => (0xB8, 0xA0, 0x38),
            TypeTag::Ghost => (0x70, 0x58, 0x98),
            TypeTag::Dragon => (0x70, 0x38, 0xF8),
            TypeTag::Dark => (0x70, 0x58, 0x48),
            TypeTag::Steel => (0xB8, 0xB8, 0xD0),
            TypeTag::Fairy => (0xEE, 0x99, 0xAC),
        }
    }
}

impl FromStr for TypeTag {
    type Err = ParseTypeTagError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_ascii_lowercase();
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == lowered)
            .ok_or_else(|| ParseTypeTagError(raw.to_string()))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
