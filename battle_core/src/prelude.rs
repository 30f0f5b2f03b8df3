//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Entities
pub use crate::character::Character;
pub use crate::weapon::Weapon;

// Damage
pub use crate::damage::{DamageRoll, FixedRolls, RollSource};

// Battle
pub use crate::battle::{Battle, BattleOutcome, Combatant, CombatLog, ConsoleNarrator, Narrator};

// Errors
pub use crate::error::{BattleError, WeaponEligibilityError};

// Config
pub use crate::config::{default_roster, Roster};
