//! TurnRecord and BattleOutcome - What happened during a battle

use serde::{Deserialize, Serialize};

/// Which side of a battle a character is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combatant {
    First,
    Second,
}

impl Combatant {
    /// The side that attacks on `turn` (first on even turns, second on odd)
    pub fn attacker_for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Combatant::First
        } else {
            Combatant::Second
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Combatant::First => Combatant::Second,
            Combatant::Second => Combatant::First,
        }
    }
}

/// One attack: who hit whom, with what, and for how much
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Zero-based turn index
    pub turn: u32,
    /// Side that attacked this turn
    pub attacker: Combatant,
    pub attacker_name: String,
    pub defender_name: String,
    /// Name of the attacker's weapon
    pub weapon: String,
    /// Rolled damage, before the defender's health clamp
    pub damage: f64,
    pub is_critical: bool,
    pub defender_hp_before: f64,
    pub defender_hp_after: f64,
}

impl TurnRecord {
    /// Side that was hit this turn
    pub fn defender(&self) -> Combatant {
        self.attacker.opponent()
    }

    /// Health the defender actually lost
    pub fn hp_lost(&self) -> f64 {
        self.defender_hp_before - self.defender_hp_after
    }

    /// Whether this attack brought the defender to zero
    pub fn is_killing_blow(&self) -> bool {
        self.defender_hp_after <= 0.0
    }

    /// Narration for this turn
    ///
    /// Two or three lines: the attack, an optional critical notice, and the
    /// damage taken.
    pub fn narration_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        lines.push(format!("{} used {}", self.attacker_name, self.weapon));
        if self.is_critical {
            lines.push("\tCRITICAL HIT!".to_string());
        }
        lines.push(format!("\t{} took {:.2} dmg", self.defender_name, self.damage));
        lines
    }
}

/// Final result of a finished battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// Total turns executed
    pub turns: u32,
    /// Side that ended at zero health
    pub defeated: Combatant,
    pub defeated_name: String,
    pub winner_name: String,
    /// Every turn, in order
    pub log: Vec<TurnRecord>,
}

impl BattleOutcome {
    pub fn winner(&self) -> Combatant {
        self.defeated.opponent()
    }

    /// Total rolled damage dealt by one side
    pub fn damage_dealt_by(&self, side: Combatant) -> f64 {
        self.log
            .iter()
            .filter(|t| t.attacker == side)
            .map(|t| t.damage)
            .sum()
    }

    /// Number of critical hits landed by either side
    pub fn crit_count(&self) -> usize {
        self.log.iter().filter(|t| t.is_critical).count()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{} defeated {} in {} turns ({} critical hits)",
            self.winner_name,
            self.defeated_name,
            self.turns,
            self.crit_count()
        )
    }

    /// Rolled damage dealt by each side, winner first
    pub fn damage_report(&self) -> String {
        format!(
            "{} dealt {:.2} dmg, {} dealt {:.2} dmg",
            self.winner_name,
            self.damage_dealt_by(self.winner()),
            self.defeated_name,
            self.damage_dealt_by(self.defeated)
        )
    }

    /// Serialize the outcome as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(turn: u32, damage: f64, is_critical: bool, hp_before: f64) -> TurnRecord {
        let attacker = Combatant::attacker_for_turn(turn);
        let (attacker_name, defender_name) = match attacker {
            Combatant::First => ("Alice", "Bob"),
            Combatant::Second => ("Bob", "Alice"),
        };
        TurnRecord {
            turn,
            attacker,
            attacker_name: attacker_name.to_string(),
            defender_name: defender_name.to_string(),
            weapon: "Unarmed".to_string(),
            damage,
            is_critical,
            defender_hp_before: hp_before,
            defender_hp_after: (hp_before - damage).max(0.0),
        }
    }

    #[test]
    fn test_attacker_alternates() {
        assert_eq!(Combatant::attacker_for_turn(0), Combatant::First);
        assert_eq!(Combatant::attacker_for_turn(1), Combatant::Second);
        assert_eq!(Combatant::attacker_for_turn(2), Combatant::First);
        assert_eq!(Combatant::First.opponent(), Combatant::Second);
    }

    #[test]
    fn test_narration_without_crit() {
        let record = make_record(0, 3.6, false, 10.0);
        assert_eq!(
            record.narration_lines(),
            vec!["Alice used Unarmed".to_string(), "\tBob took 3.60 dmg".to_string()]
        );
    }

    #[test]
    fn test_narration_with_crit() {
        let record = make_record(1, 7.2, true, 10.0);
        let lines = record.narration_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Bob used Unarmed");
        assert_eq!(lines[1], "\tCRITICAL HIT!");
        assert_eq!(lines[2], "\tAlice took 7.20 dmg");
    }

    #[test]
    fn test_overkill_loses_only_remaining_hp() {
        let record = make_record(0, 5.0, false, 2.0);
        assert!(record.is_killing_blow());
        assert!((record.hp_lost() - 2.0).abs() < f64::EPSILON);
        assert_eq!(record.defender(), Combatant::Second);
    }

    #[test]
    fn test_outcome_totals() {
        let outcome = BattleOutcome {
            turns: 3,
            defeated: Combatant::Second,
            defeated_name: "Bob".to_string(),
            winner_name: "Alice".to_string(),
            log: vec![
                make_record(0, 4.0, false, 10.0),
                make_record(1, 3.0, false, 10.0),
                make_record(2, 8.0, true, 6.0),
            ],
        };

        assert_eq!(outcome.winner(), Combatant::First);
        assert!((outcome.damage_dealt_by(Combatant::First) - 12.0).abs() < f64::EPSILON);
        assert!((outcome.damage_dealt_by(Combatant::Second) - 3.0).abs() < f64::EPSILON);
        assert_eq!(outcome.crit_count(), 1);
        assert_eq!(outcome.summary(), "Alice defeated Bob in 3 turns (1 critical hits)");
        assert_eq!(outcome.damage_report(), "Alice dealt 12.00 dmg, Bob dealt 3.00 dmg");
    }

    #[test]
    fn test_outcome_json() {
        let outcome = BattleOutcome {
            turns: 1,
            defeated: Combatant::Second,
            defeated_name: "Bob".to_string(),
            winner_name: "Alice".to_string(),
            log: vec![make_record(0, 4.0, false, 1.0)],
        };

        let json = outcome.to_json().unwrap();
        assert!(json.contains("\"defeated\": \"second\""));

        let parsed: BattleOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.turns, 1);
    }
}
