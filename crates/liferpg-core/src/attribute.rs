//! Character attributes.
//!
//! The attribute set is a closed enumeration so that every branch over it is
//! exhaustiveness-checked, rather than the open string keys a UI layer might
//! use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the four character attributes a quest can train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Intellect,
    Dexterity,
    Charisma,
}

impl Attribute {
    /// All attributes, in display order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Intellect,
        Attribute::Dexterity,
        Attribute::Charisma,
    ];

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Intellect => "Intellect",
            Attribute::Dexterity => "Dexterity",
            Attribute::Charisma => "Charisma",
        }
    }

    /// Short three-letter tag (STR/INT/DEX/CHA).
    pub fn tag(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Intellect => "INT",
            Attribute::Dexterity => "DEX",
            Attribute::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = ValidationError;

    /// Accepts both short tags ("str") and full names ("strength"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "str" | "strength" => Ok(Attribute::Strength),
            "int" | "intellect" => Ok(Attribute::Intellect),
            "dex" | "dexterity" => Ok(Attribute::Dexterity),
            "cha" | "charisma" => Ok(Attribute::Charisma),
            other => Err(ValidationError::UnknownAttribute(other.to_string())),
        }
    }
}

/// The character's stat block: one counter per attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u32,
    pub intellect: u32,
    pub dexterity: u32,
    pub charisma: u32,
}

/// Every attribute starts at 5.
pub const ATTRIBUTE_BASE: u32 = 5;

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: ATTRIBUTE_BASE,
            intellect: ATTRIBUTE_BASE,
            dexterity: ATTRIBUTE_BASE,
            charisma: ATTRIBUTE_BASE,
        }
    }
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intellect => self.intellect,
            Attribute::Dexterity => self.dexterity,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Increase one attribute by `amount`.
    pub fn bump(&mut self, attribute: Attribute, amount: u32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Intellect => &mut self.intellect,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Iterate `(attribute, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.iter().map(move |&a| (a, self.get(a)))
    }
}
