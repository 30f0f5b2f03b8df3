//! Application state

use battle_core::{
    config::ConfigError, default_roster, Battle, BattleOutcome, Character, CombatLog, Combatant,
    Narrator, Roster,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Log lines kept in memory
const MAX_LOG_LINES: usize = 200;

/// Log lines visible before the view starts scrolling
const VISIBLE_LOG_LINES: usize = 15;

/// Turn cap so a zero-damage matchup cannot hang `fight_to_end`
const MAX_TURNS: u32 = 10_000;

pub struct App {
    pub roster: Roster,
    /// Roster indices of the current matchup
    pub first_index: usize,
    pub second_index: usize,
    pub first: Character,
    pub second: Character,
    pub battle: Battle,
    pub combat_log: CombatLog,
    pub outcome: Option<BattleOutcome>,
    /// Last error raised by the battle, shown in the status bar
    pub error: Option<String>,
    pub seed: u64,
    pub rng: ChaCha8Rng,
    pub show_help: bool,
    pub log_scroll: usize,
}

impl App {
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        let roster = default_roster();
        if roster.characters.len() < 2 {
            return Err(ConfigError::ValidationError(
                "roster needs at least two characters".to_string(),
            ));
        }

        let first = roster.build(&roster.characters[0].name)?;
        let second = roster.build(&roster.characters[1].name)?;

        let mut app = App {
            roster,
            first_index: 0,
            second_index: 1,
            first,
            second,
            battle: Battle::new().with_max_turns(MAX_TURNS),
            combat_log: CombatLog::with_capacity_limit(MAX_LOG_LINES),
            outcome: None,
            error: None,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            show_help: false,
            log_scroll: 0,
        };
        app.combat_log.battle_started(&app.first, &app.second);
        Ok(app)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some() || self.error.is_some()
    }

    /// Execute one turn
    pub fn step(&mut self) {
        if self.is_finished() {
            return;
        }

        match self.battle.next_turn(&mut self.first, &mut self.second, &mut self.rng) {
            Ok(Some(record)) => {
                self.combat_log.turn_taken(&record);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "battle stopped");
                self.error = Some(e.to_string());
                self.combat_log.push(format!("Battle stopped: {}", e));
            }
        }

        if let Some(outcome) = self.battle.outcome(&self.first, &self.second) {
            let defeated = match outcome.defeated {
                Combatant::First => &self.first,
                Combatant::Second => &self.second,
            };
            self.combat_log.battle_ended(defeated);
            self.combat_log.push(outcome.summary());
            self.combat_log.push(outcome.damage_report());
            tracing::info!(turns = outcome.turns, defeated = %outcome.defeated_name, "battle finished");
            self.outcome = Some(outcome);
        }

        self.follow_log();
    }

    /// Execute turns until the battle is decided
    pub fn fight_to_end(&mut self) {
        while !self.is_finished() {
            self.step();
        }
    }

    /// Restart the current matchup with the next seed
    pub fn reset(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.restart();
    }

    /// Pick the next opponent for the first character and restart
    pub fn next_opponent(&mut self) {
        let count = self.roster.characters.len();
        let mut next = (self.second_index + 1) % count;
        if next == self.first_index {
            next = (next + 1) % count;
        }
        self.second_index = next;
        self.restart();
    }

    /// Swap who attacks first and restart
    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.first_index, &mut self.second_index);
        self.restart();
    }

    fn restart(&mut self) {
        let first_name = self.roster.characters[self.first_index].name.clone();
        let second_name = self.roster.characters[self.second_index].name.clone();

        self.combat_log.clear();
        self.outcome = None;
        self.error = None;
        self.battle = Battle::new().with_max_turns(MAX_TURNS);
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.log_scroll = 0;

        match (self.roster.build(&first_name), self.roster.build(&second_name)) {
            (Ok(first), Ok(second)) => {
                self.first = first;
                self.second = second;
                self.combat_log.battle_started(&self.first, &self.second);
            }
            (Err(e), _) | (_, Err(e)) => {
                self.error = Some(e.to_string());
                self.combat_log.push(format!("Cannot start battle: {}", e));
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn on_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn on_down(&mut self) {
        let max_scroll = self.combat_log.len().saturating_sub(VISIBLE_LOG_LINES);
        if self.log_scroll < max_scroll {
            self.log_scroll += 1;
        }
    }

    /// Keep the newest lines in view
    fn follow_log(&mut self) {
        self.log_scroll = self.combat_log.len().saturating_sub(VISIBLE_LOG_LINES);
    }
}
