//! Character - A combatant with clamped health and an equipped weapon

use crate::damage::{calculate_damage, DamageRoll, RollSource};
use crate::error::WeaponEligibilityError;
use crate::util::clamp;
use crate::weapon::Weapon;

/// Chance for any attack to be a critical hit
pub const CRIT_PROB: f64 = 1.0 / 16.0;

/// Width of the random damage variance (damage × [0.85, 1.0])
pub const RANDOM_MODIFIER_RANGE: f64 = 0.15;

/// A character taking part in a battle
///
/// Health is always inside `[0, max_hp]`: the only way to change it is
/// [`Character::set_hp`], which clamps. The equipped weapon is always present
/// and always meets the character's level at the time it was equipped.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    hp: f64,
    max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub level: i32,
    weapon: Weapon,
}

impl Character {
    /// Create a character at full health, unarmed
    pub fn new(name: impl Into<String>, max_hp: u32, attack: i32, defense: i32, level: i32) -> Self {
        let mut character = Character {
            name: name.into(),
            hp: 0.0,
            max_hp,
            attack,
            defense,
            level,
            weapon: Weapon::unarmed(),
        };
        character.set_hp(max_hp as f64);
        character
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Set health, clamped to `[0, max_hp]`
    ///
    /// A NaN value is ignored and health stays where it was.
    pub fn set_hp(&mut self, hp: f64) {
        if hp.is_nan() {
            tracing::warn!(character = %self.name, "ignoring NaN health");
            return;
        }
        self.hp = clamp(hp, 0.0, self.max_hp as f64);
    }

    /// Subtract `amount` from health and return the health actually lost
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let before = self.hp;
        self.set_hp(before - amount);
        before - self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Get health as a percentage of max
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp / self.max_hp as f64 * 100.0
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    /// Replace the equipped weapon
    ///
    /// `None` equips a fresh unarmed weapon. A weapon whose minimum level is
    /// above the character's level is rejected and the current weapon stays.
    pub fn set_weapon(&mut self, weapon: Option<Weapon>) -> Result<(), WeaponEligibilityError> {
        match weapon {
            None => {
                self.weapon = Weapon::unarmed();
                Ok(())
            }
            Some(weapon) if weapon.can_be_used_at(self.level) => {
                self.weapon = weapon;
                Ok(())
            }
            Some(weapon) => {
                tracing::warn!(
                    character = %self.name,
                    weapon = %weapon.name(),
                    min_level = weapon.min_level,
                    level = self.level,
                    "weapon rejected"
                );
                Err(WeaponEligibilityError {
                    weapon: weapon.name().to_string(),
                    min_level: weapon.min_level,
                    level: self.level,
                })
            }
        }
    }

    /// Equip a weapon, checking the level requirement
    pub fn equip(&mut self, weapon: Weapon) -> Result<(), WeaponEligibilityError> {
        self.set_weapon(Some(weapon))
    }

    /// Go back to fighting unarmed
    pub fn unequip(&mut self) {
        self.weapon = Weapon::unarmed();
    }

    /// Roll damage against `target` using the thread-local RNG
    pub fn compute_damage(&self, target: &Character) -> DamageRoll {
        let mut rng = rand::thread_rng();
        self.compute_damage_with_rng(target, &mut rng)
    }

    /// Roll damage against `target` with a provided roll source
    pub fn compute_damage_with_rng(&self, target: &Character, rng: &mut impl RollSource) -> DamageRoll {
        calculate_damage(
            self.level,
            self.weapon.power,
            self.attack,
            target.defense,
            CRIT_PROB,
            RANDOM_MODIFIER_RANGE,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::FixedRolls;
    use proptest::prelude::*;

    fn make_fighter() -> Character {
        Character::new("Fighter", 50, 10, 10, 5)
    }

    #[test]
    fn test_new_character_defaults() {
        let c = make_fighter();
        assert_eq!(c.name(), "Fighter");
        assert!((c.hp() - 50.0).abs() < f64::EPSILON);
        assert_eq!(c.max_hp(), 50);
        assert_eq!(c.weapon(), &Weapon::unarmed());
        assert!(c.is_alive());
    }

    #[test]
    fn test_hp_clamps_low() {
        let mut c = make_fighter();
        c.set_hp(-25.0);
        assert_eq!(c.hp(), 0.0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_hp_clamps_high() {
        let mut c = make_fighter();
        c.set_hp(1000.0);
        assert!((c.hp() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_health_is_ignored() {
        let mut c = make_fighter();
        c.set_hp(20.0);
        c.set_hp(f64::NAN);
        assert!((c.hp() - 20.0).abs() < f64::EPSILON);
        assert!(c.is_alive());

        let lost = c.take_damage(f64::NAN);
        assert_eq!(lost, 0.0);
        assert!((c.hp() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_infinite_health_writes_clamp() {
        let mut c = make_fighter();
        c.set_hp(f64::INFINITY);
        assert!((c.hp() - 50.0).abs() < f64::EPSILON);

        c.take_damage(f64::INFINITY);
        assert_eq!(c.hp(), 0.0);
    }

    #[test]
    fn test_take_damage_reports_actual_loss() {
        let mut c = Character::new("Glass", 5, 1, 1, 1);
        let lost = c.take_damage(3.5);
        assert!((lost - 3.5).abs() < 1e-9);

        // Overkill only removes what is left
        let lost = c.take_damage(100.0);
        assert!((lost - 1.5).abs() < 1e-9);
        assert_eq!(c.hp(), 0.0);
    }

    #[test]
    fn test_equip_eligible_weapon() {
        let mut c = make_fighter();
        let sword = Weapon::new("Shortsword", 40, 5);
        c.equip(sword.clone()).unwrap();
        assert_eq!(c.weapon(), &sword);
    }

    #[test]
    fn test_equip_ineligible_weapon_keeps_previous() {
        let mut c = make_fighter();
        let sword = Weapon::new("Shortsword", 40, 5);
        c.equip(sword.clone()).unwrap();

        let err = c.equip(Weapon::new("Excalibur", 200, 50)).unwrap_err();
        assert_eq!(err.weapon, "Excalibur");
        assert_eq!(err.min_level, 50);
        assert_eq!(err.level, 5);
        assert_eq!(c.weapon(), &sword);
    }

    #[test]
    fn test_set_weapon_none_unequips() {
        let mut c = make_fighter();
        c.equip(Weapon::new("Club", 30, 1)).unwrap();
        c.set_weapon(None).unwrap();
        assert!(c.weapon().is_unarmed());
        assert_eq!(c.weapon().power, 20);
    }

    #[test]
    fn test_eligibility_follows_current_level() {
        let mut c = make_fighter();
        let axe = Weapon::new("Great Axe", 90, 8);
        assert!(c.equip(axe.clone()).is_err());

        c.level = 8;
        c.equip(axe.clone()).unwrap();
        assert_eq!(c.weapon(), &axe);
    }

    #[test]
    fn test_compute_damage_uses_weapon_and_stats() {
        let attacker = make_fighter();
        let target = make_fighter();
        let mut rolls = FixedRolls::max_no_crit();

        let roll = attacker.compute_damage_with_rng(&target, &mut rolls);
        assert!((roll.amount - 3.6).abs() < 1e-9);
        assert!(!roll.is_critical);
    }

    #[test]
    fn test_compute_damage_with_thread_rng_is_bounded() {
        let attacker = make_fighter();
        let target = make_fighter();
        for _ in 0..100 {
            let roll = attacker.compute_damage(&target);
            assert!(roll.amount >= 3.6 * 0.85 - 1e-9);
            assert!(roll.amount <= 7.2 + 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_hp_always_within_bounds(
            max_hp in 0u32..10_000u32,
            writes in proptest::collection::vec(
                prop_oneof![
                    8 => -1.0e5f64..1.0e5f64,
                    1 => Just(f64::NAN),
                    1 => Just(f64::INFINITY),
                    1 => Just(f64::NEG_INFINITY),
                ],
                1..20
            )
        ) {
            let mut c = Character::new("Prop", max_hp, 1, 1, 1);
            for hp in writes {
                c.set_hp(hp);
                prop_assert!(c.hp() >= 0.0);
                prop_assert!(c.hp() <= max_hp as f64);
            }
        }

        #[test]
        fn prop_damage_keeps_hp_within_bounds(
            max_hp in 1u32..10_000u32,
            hits in proptest::collection::vec(
                prop_oneof![
                    8 => -1.0e5f64..1.0e5f64,
                    1 => Just(f64::NAN),
                    1 => Just(f64::INFINITY),
                ],
                1..20
            )
        ) {
            let mut c = Character::new("Prop", max_hp, 1, 1, 1);
            for amount in hits {
                c.take_damage(amount);
                prop_assert!(c.hp() >= 0.0);
                prop_assert!(c.hp() <= max_hp as f64);
            }
        }
    }
}
