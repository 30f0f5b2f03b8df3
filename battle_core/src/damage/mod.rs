//! Damage system - Random sources and the damage formula

mod calculation;
mod roll;

pub use calculation::{calculate_damage, DamageRoll};
pub use roll::{FixedRolls, RollSource};
