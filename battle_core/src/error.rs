//! Error types for equipping weapons and running battles

use thiserror::Error;

/// A weapon was assigned to a character below its minimum level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot add a weapon of minimum level {min_level} to character of level {level}")]
pub struct WeaponEligibilityError {
    /// Name of the rejected weapon
    pub weapon: String,
    /// The weapon's minimum level
    pub min_level: i32,
    /// The character's level at the time of the attempt
    pub level: i32,
}

/// Battle could not be run to completion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    /// The damage formula divides by the defender's defense
    #[error("{name} has non-positive defense ({defense}); damage is undefined")]
    NonPositiveDefense { name: String, defense: i32 },
    /// The configured turn limit ran out with both characters still standing
    #[error("Battle still undecided after {turns} turns")]
    TurnLimitReached { turns: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_message() {
        let err = WeaponEligibilityError {
            weapon: "Excalibur".to_string(),
            min_level: 50,
            level: 5,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add a weapon of minimum level 50 to character of level 5"
        );
    }

    #[test]
    fn test_battle_error_messages() {
        let err = BattleError::NonPositiveDefense {
            name: "Slime".to_string(),
            defense: 0,
        };
        assert!(err.to_string().contains("Slime"));

        let err = BattleError::TurnLimitReached { turns: 100 };
        assert!(err.to_string().contains("100"));
    }
}
