//! Core crossword engine
//!
//! Pure state tracking over a fixed puzzle definition: word slots, the
//! player's answers, word/puzzle completion, cursor navigation, and the
//! session clock. The engine performs no I/O and owns no timers; front
//! ends route discrete input events in (keypress, click, one-second tick)
//! and read render state back out.

use serde::{Deserialize, Serialize};

mod clock;
mod puzzle;
mod session;
mod slots;

pub use clock::SessionClock;
pub use puzzle::{Cell, Clue, Difficulty, Puzzle, ValidationReport};
pub use session::{Arrow, CellView, ClueView, Session};
pub use slots::{CellClues, SlotIndex};

/// A cell coordinate: row and column, zero-based from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Input direction: which of the clues covering the selected cell the
/// player is currently typing into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Identifies one word of a puzzle: clue numbers are unique within a
/// direction but not globally, so solved-word tracking keys on the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId {
    pub direction: Direction,
    pub num: u32,
}

impl WordId {
    pub fn new(direction: Direction, num: u32) -> Self {
        Self { direction, num }
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.direction, self.num)
    }
}
