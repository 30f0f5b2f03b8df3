//! Battle - Alternating turns between two characters until one falls

mod engine;
mod narrator;
mod result;

pub use engine::{run_battle, run_battle_with_rng, Battle, BattlePhase};
pub use narrator::{closing_line, opening_line, CombatLog, ConsoleNarrator, Narrator, SilentNarrator};
pub use result::{BattleOutcome, Combatant, TurnRecord};
