//! Damage calculation - turning attacker stats and a defender into a hit

use super::RollSource;
use serde::{Deserialize, Serialize};

/// Damage multiplier applied on a critical hit
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// Outcome of a single damage roll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Damage dealt, before the defender's health clamp
    pub amount: f64,
    /// Whether the crit roll succeeded
    pub is_critical: bool,
}

/// Calculate the damage of one attack
///
/// ```text
/// modifier     = crit (2 or 1) × uniform(1 - rnd_factor, 1)
/// level_factor = 2 × level / 5 + 2
/// attack_factor = attack / defense
/// damage       = ((level_factor × weapon_power × attack_factor) / 50 + 2) × modifier
/// ```
///
/// Two draws are taken from `rng` in order: the crit roll, then the variance
/// roll. `defender_defense` must be non-zero; this function does not guard it.
pub fn calculate_damage(
    attacker_level: i32,
    weapon_power: i32,
    attack_power: i32,
    defender_defense: i32,
    crit_prob: f64,
    rnd_factor: f64,
    rng: &mut impl RollSource,
) -> DamageRoll {
    // Modifier
    let is_critical = rng.unit() < crit_prob;
    let crit = if is_critical { CRIT_MULTIPLIER } else { 1.0 };
    let random_mod = rng.between(1.0 - rnd_factor, 1.0);
    let modifier = crit * random_mod;

    let level_factor = (2.0 * attacker_level as f64) / 5.0 + 2.0;
    let attack_factor = attack_power as f64 / defender_defense as f64;

    let amount = ((level_factor * weapon_power as f64 * attack_factor) / 50.0 + 2.0) * modifier;

    DamageRoll { amount, is_critical }
}
