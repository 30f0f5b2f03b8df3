//! Narrator - Presentation of a battle as it happens

use super::TurnRecord;
use crate::character::Character;

/// Receives battle events as they happen
pub trait Narrator {
    fn battle_started(&mut self, _first: &Character, _second: &Character) {}

    fn turn_taken(&mut self, record: &TurnRecord);

    fn battle_ended(&mut self, _defeated: &Character) {}
}

pub fn opening_line(first: &Character, second: &Character) -> String {
    format!("{} starts a battle with {}!", first.name(), second.name())
}

pub fn closing_line(defeated: &Character) -> String {
    format!("{} is sleeping with the fishes.", defeated.name())
}

/// Prints narration to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn battle_started(&mut self, first: &Character, second: &Character) {
        println!("{}", opening_line(first, second));
    }

    fn turn_taken(&mut self, record: &TurnRecord) {
        for line in record.narration_lines() {
            println!("{}", line);
        }
    }

    fn battle_ended(&mut self, defeated: &Character) {
        println!("{}", closing_line(defeated));
    }
}

/// Discards narration
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn turn_taken(&mut self, _record: &TurnRecord) {}
}

/// Collects narration lines in memory
#[derive(Debug, Clone, Default)]
pub struct CombatLog {
    lines: Vec<String>,
    /// Oldest lines are dropped past this many
    max_lines: Option<usize>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `max_lines` lines
    pub fn with_capacity_limit(max_lines: usize) -> Self {
        CombatLog {
            lines: Vec::new(),
            max_lines: Some(max_lines),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        if let Some(max) = self.max_lines {
            if self.lines.len() > max {
                let excess = self.lines.len() - max;
                self.lines.drain(..excess);
            }
        }
    }
}

impl Narrator for CombatLog {
    fn battle_started(&mut self, first: &Character, second: &Character) {
        self.push(opening_line(first, second));
    }

    fn turn_taken(&mut self, record: &TurnRecord) {
        for line in record.narration_lines() {
            self.push(line);
        }
    }

    fn battle_ended(&mut self, defeated: &Character) {
        self.push(closing_line(defeated));
    }
}
