//! Roster configuration - weapons and characters declared in TOML

use super::ConfigError;
use crate::character::Character;
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A character entry in a roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub name: String,
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub level: i32,
    /// Name of a weapon in the same roster; absent means unarmed
    #[serde(default)]
    pub weapon: Option<String>,
}

/// Container for weapon and character configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub characters: Vec<CharacterConfig>,
}

impl Roster {
    /// Load and validate a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let roster: Roster = super::load_toml(path)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Parse and validate a roster from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let roster: Roster = super::parse_toml(content)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Check names are unique, weapon references resolve, and health is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut weapon_names = HashSet::new();
        for weapon in &self.weapons {
            if !weapon_names.insert(weapon.name()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate weapon '{}'",
                    weapon.name()
                )));
            }
        }

        let mut character_names = HashSet::new();
        for character in &self.characters {
            if !character_names.insert(character.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate character '{}'",
                    character.name
                )));
            }
            if character.max_hp == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "character '{}' has max_hp 0",
                    character.name
                )));
            }
            if let Some(ref weapon) = character.weapon {
                if !weapon_names.contains(weapon.as_str()) {
                    return Err(ConfigError::UnknownWeapon(weapon.clone()));
                }
            }
        }

        Ok(())
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name() == name)
    }

    pub fn character(&self, name: &str) -> Option<&CharacterConfig> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Names of all characters, in file order
    pub fn character_names(&self) -> Vec<&str> {
        self.characters.iter().map(|c| c.name.as_str()).collect()
    }

    /// Build a fresh character and equip its configured weapon
    ///
    /// The weapon goes through the usual level check, so a roster entry that
    /// names a weapon above the character's level fails here.
    pub fn build(&self, name: &str) -> Result<Character, ConfigError> {
        let config = self
            .character(name)
            .ok_or_else(|| ConfigError::UnknownCharacter(name.to_string()))?;

        let mut character = Character::new(
            config.name.clone(),
            config.max_hp,
            config.attack,
            config.defense,
            config.level,
        );

        if let Some(ref weapon_name) = config.weapon {
            let weapon = self
                .weapon(weapon_name)
                .ok_or_else(|| ConfigError::UnknownWeapon(weapon_name.clone()))?;
            character.equip(weapon.clone())?;
        }

        Ok(character)
    }
}

/// Get the bundled roster
pub fn default_roster() -> Roster {
    let toml = include_str!("../../config/roster.toml");
    Roster::parse(toml).unwrap_or_else(|_| Roster {
        weapons: Vec::new(),
        characters: vec![
            CharacterConfig {
                name: "Squire".to_string(),
                max_hp: 50,
                attack: 10,
                defense: 10,
                level: 5,
                weapon: None,
            },
            CharacterConfig {
                name: "Goblin".to_string(),
                max_hp: 30,
                attack: 8,
                defense: 6,
                level: 3,
                weapon: None,
            },
        ],
    })
}
