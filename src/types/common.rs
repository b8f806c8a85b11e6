//! Common domain types for the Scryfall API.

use serde::{Deserialize, Serialize};

/// A color in Magic: The Gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// White mana
    #[serde(rename = "W")]
    White,
    /// Blue mana
    #[serde(rename = "U")]
    Blue,
    /// Black mana
    #[serde(rename = "B")]
    Black,
    /// Red mana
    #[serde(rename = "R")]
    Red,
    /// Green mana
    #[serde(rename = "G")]
    Green,
    /// Colorless mana, only used by symbols and mana costs
    #[serde(rename = "C")]
    Colorless,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
            Color::Colorless => "C",
        };
        write!(f, "{}", s)
    }
}

/// Legality of a card in a play format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    /// Legal in the format
    Legal,
    /// Not legal in the format (default for formats the API does not mention)
    #[default]
    NotLegal,
    /// Restricted to one copy
    Restricted,
    /// Banned
    Banned,
}

impl std::fmt::Display for Legality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Legality::Legal => "legal",
            Legality::NotLegal => "not_legal",
            Legality::Restricted => "restricted",
            Legality::Banned => "banned",
        };
        write!(f, "{}", s)
    }
}

/// Card rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Special,
    Mythic,
    Bonus,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Special => "special",
            Rarity::Mythic => "mythic",
            Rarity::Bonus => "bonus",
        };
        write!(f, "{}", s)
    }
}
