//! Weapon - Named attack power with a level requirement

use serde::{Deserialize, Serialize};

/// Attack power of the weapon every character falls back to
pub const UNARMED_POWER: i32 = 20;

/// Name of the fallback weapon
pub const UNARMED_NAME: &str = "Unarmed";

/// A weapon that can be equipped by a character
///
/// The name is fixed at construction. Power and minimum level are plain data
/// and are not validated: negative values are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    /// Attack power contributed to the damage formula
    pub power: i32,
    /// Minimum character level required to equip
    pub min_level: i32,
}

impl Weapon {
    /// Create a new weapon
    pub fn new(name: impl Into<String>, power: i32, min_level: i32) -> Self {
        Weapon {
            name: name.into(),
            power,
            min_level,
        }
    }

    /// Fresh "Unarmed" weapon (power 20, usable from level 1)
    pub fn unarmed() -> Self {
        Weapon::new(UNARMED_NAME, UNARMED_POWER, 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a character of `level` meets this weapon's requirement
    pub fn can_be_used_at(&self, level: i32) -> bool {
        self.min_level <= level
    }

    /// Check if this is the unarmed fallback
    pub fn is_unarmed(&self) -> bool {
        self.name == UNARMED_NAME
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Weapon::unarmed()
    }
}
