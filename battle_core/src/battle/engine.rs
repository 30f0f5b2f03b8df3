//! Battle engine - The alternating-turn loop

use super::{BattleOutcome, Combatant, Narrator, TurnRecord};
use crate::character::Character;
use crate::damage::RollSource;
use crate::error::BattleError;

/// Whether a battle can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// Both characters have health left
    Ongoing,
    /// At least one character is at zero health
    Finished,
}

impl BattlePhase {
    pub fn of(first: &Character, second: &Character) -> Self {
        if first.is_alive() && second.is_alive() {
            BattlePhase::Ongoing
        } else {
            BattlePhase::Finished
        }
    }
}

/// Turn state for one battle between two characters
///
/// The battle does not own its characters; pass the same pair, in the same
/// order, to every call. The first character attacks on even turns and the
/// second on odd turns.
#[derive(Debug, Clone, Default)]
pub struct Battle {
    turn: u32,
    max_turns: Option<u32>,
    log: Vec<TurnRecord>,
}

impl Battle {
    /// Create a battle with no turn limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop with [`BattleError::TurnLimitReached`] after `max_turns` turns
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Turns executed so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// Side that attacks next
    pub fn next_attacker(&self) -> Combatant {
        Combatant::attacker_for_turn(self.turn)
    }

    /// Execute a single turn
    ///
    /// Returns `Ok(None)` once either character is down. The defender's
    /// defense must be positive for the damage formula to be defined.
    pub fn next_turn(
        &mut self,
        first: &mut Character,
        second: &mut Character,
        rng: &mut impl RollSource,
    ) -> Result<Option<TurnRecord>, BattleError> {
        if BattlePhase::of(first, second) == BattlePhase::Finished {
            return Ok(None);
        }

        if let Some(max) = self.max_turns {
            if self.turn >= max {
                return Err(BattleError::TurnLimitReached { turns: self.turn });
            }
        }

        let side = self.next_attacker();
        let (attacker, defender): (&Character, &mut Character) = match side {
            Combatant::First => (&*first, second),
            Combatant::Second => (&*second, first),
        };

        if defender.defense <= 0 {
            return Err(BattleError::NonPositiveDefense {
                name: defender.name().to_string(),
                defense: defender.defense,
            });
        }

        let roll = attacker.compute_damage_with_rng(defender, rng);
        let hp_before = defender.hp();
        defender.set_hp(hp_before - roll.amount);

        let record = TurnRecord {
            turn: self.turn,
            attacker: side,
            attacker_name: attacker.name().to_string(),
            defender_name: defender.name().to_string(),
            weapon: attacker.weapon().name().to_string(),
            damage: roll.amount,
            is_critical: roll.is_critical,
            defender_hp_before: hp_before,
            defender_hp_after: defender.hp(),
        };

        tracing::debug!(
            turn = record.turn,
            attacker = %record.attacker_name,
            defender = %record.defender_name,
            damage = record.damage,
            hp_lost = record.hp_lost(),
            critical = record.is_critical,
            hp_left = record.defender_hp_after,
            "turn resolved"
        );

        self.turn += 1;
        self.log.push(record.clone());
        Ok(Some(record))
    }

    /// Run turns until one character is down
    pub fn run(
        &mut self,
        first: &mut Character,
        second: &mut Character,
        narrator: &mut impl Narrator,
        rng: &mut impl RollSource,
    ) -> Result<BattleOutcome, BattleError> {
        tracing::info!(first = %first.name(), second = %second.name(), "battle started");
        narrator.battle_started(first, second);

        while let Some(record) = self.next_turn(first, second, rng)? {
            narrator.turn_taken(&record);
        }

        let outcome = self.outcome(first, second).ok_or(BattleError::TurnLimitReached { turns: self.turn })?;
        let defeated = match outcome.defeated {
            Combatant::First => &*first,
            Combatant::Second => &*second,
        };
        narrator.battle_ended(defeated);

        tracing::info!(
            turns = outcome.turns,
            defeated = %outcome.defeated_name,
            "battle finished"
        );

        Ok(outcome)
    }

    /// Outcome so far, if the battle is finished
    ///
    /// When both characters are down the first one is reported defeated.
    pub fn outcome(&self, first: &Character, second: &Character) -> Option<BattleOutcome> {
        if BattlePhase::of(first, second) == BattlePhase::Ongoing {
            return None;
        }

        let (defeated, defeated_char, winner_char) = if first.hp() <= 0.0 {
            (Combatant::First, first, second)
        } else {
            (Combatant::Second, second, first)
        };

        Some(BattleOutcome {
            turns: self.turn,
            defeated,
            defeated_name: defeated_char.name().to_string(),
            winner_name: winner_char.name().to_string(),
            log: self.log.clone(),
        })
    }
}

/// Run a full battle with the thread-local RNG
pub fn run_battle(
    first: &mut Character,
    second: &mut Character,
    narrator: &mut impl Narrator,
) -> Result<BattleOutcome, BattleError> {
    let mut rng = rand::thread_rng();
    run_battle_with_rng(first, second, narrator, &mut rng)
}

/// Run a full battle with a provided roll source (for deterministic runs)
pub fn run_battle_with_rng(
    first: &mut Character,
    second: &mut Character,
    narrator: &mut impl Narrator,
    rng: &mut impl RollSource,
) -> Result<BattleOutcome, BattleError> {
    Battle::new().run(first, second, narrator, rng)
}
