//! battle_core - Turn-based duels between two characters
//!
//! This library provides:
//! - Weapon: named attack power with a minimum usage level
//! - Character: clamped health, combat stats and an equipped weapon
//! - Damage: the level/attack/defense damage formula with crits and variance
//! - Battle: the alternating-turn loop that runs a duel to completion
//! - Config: TOML rosters of weapons and characters

pub mod battle;
pub mod character;
pub mod config;
pub mod damage;
pub mod error;
pub mod prelude;
pub mod util;
pub mod weapon;

// Re-export core types for convenience
pub use battle::{
    run_battle, run_battle_with_rng, Battle, BattleOutcome, BattlePhase, CombatLog, Combatant,
    ConsoleNarrator, Narrator, SilentNarrator, TurnRecord,
};
pub use character::Character;
pub use config::{default_roster, ConfigError, Roster};
pub use damage::{calculate_damage, DamageRoll, FixedRolls, RollSource};
pub use error::{BattleError, WeaponEligibilityError};
pub use util::clamp;
pub use weapon::Weapon;
