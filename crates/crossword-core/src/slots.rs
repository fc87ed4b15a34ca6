//! Slot index: the derived cell-to-word mapping
//!
//! Built once per puzzle so nothing else recomputes which cells belong to
//! which word. A cell belongs to at most one across clue and at most one
//! down clue.

use crate::{Direction, Position, Puzzle, WordId};
use std::collections::HashMap;

/// The clue numbers covering one cell, per direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellClues {
    pub across: Option<u32>,
    pub down: Option<u32>,
}

impl CellClues {
    /// The covering clue in one direction
    pub fn along(self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }
}

/// Read-only view of a puzzle's word spans
#[derive(Debug, Clone)]
pub struct SlotIndex {
    spans: HashMap<WordId, Vec<Position>>,
    covering: HashMap<Position, CellClues>,
}

impl SlotIndex {
    pub fn new(puzzle: &Puzzle) -> Self {
        let mut spans = HashMap::new();
        let mut covering: HashMap<Position, CellClues> = HashMap::new();

        for (word, clue) in puzzle.words() {
            let cells: Vec<Position> = clue.cells(word.direction).collect();
            for pos in &cells {
                let entry = covering.entry(*pos).or_default();
                match word.direction {
                    Direction::Across => entry.across = Some(word.num),
                    Direction::Down => entry.down = Some(word.num),
                }
            }
            spans.insert(word, cells);
        }

        Self { spans, covering }
    }

    /// The ordered coordinates a word occupies; empty for unknown words
    pub fn span(&self, word: WordId) -> &[Position] {
        self.spans.get(&word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn clues_at(&self, pos: Position) -> CellClues {
        self.covering.get(&pos).copied().unwrap_or_default()
    }

    /// The word covering a cell in the given direction, if any
    pub fn word_at(&self, pos: Position, direction: Direction) -> Option<WordId> {
        self.clues_at(pos)
            .along(direction)
            .map(|num| WordId::new(direction, num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;

    fn easy_index() -> SlotIndex {
        SlotIndex::new(&Puzzle::for_difficulty(Difficulty::Easy))
    }

    #[test]
    fn spans_run_in_answer_order() {
        let index = easy_index();

        let alnwick = index.span(WordId::new(Direction::Across, 2));
        assert_eq!(alnwick.len(), 7);
        assert_eq!(alnwick[0], Position::new(1, 0));
        assert_eq!(alnwick[6], Position::new(1, 6));

        let tweed = index.span(WordId::new(Direction::Down, 1));
        assert_eq!(tweed.len(), 5);
        assert_eq!(tweed[0], Position::new(0, 3));
        assert_eq!(tweed[4], Position::new(4, 3));
    }

    #[test]
    fn crossing_cell_is_covered_both_ways() {
        let index = easy_index();
        let crossing = index.clues_at(Position::new(1, 3));
        assert_eq!(crossing.across, Some(2));
        assert_eq!(crossing.down, Some(1));
    }

    #[test]
    fn single_direction_cells_have_one_entry() {
        let index = easy_index();

        let across_only = index.clues_at(Position::new(1, 0));
        assert_eq!(across_only.across, Some(2));
        assert_eq!(across_only.down, None);

        let down_only = index.clues_at(Position::new(0, 3));
        assert_eq!(down_only.across, None);
        assert_eq!(down_only.down, Some(1));
    }

    #[test]
    fn blank_cells_are_uncovered() {
        let index = easy_index();
        assert_eq!(index.clues_at(Position::new(0, 0)), CellClues::default());
        assert_eq!(index.word_at(Position::new(0, 0), Direction::Across), None);
    }

    #[test]
    fn unknown_word_has_empty_span() {
        let index = easy_index();
        assert!(index.span(WordId::new(Direction::Across, 99)).is_empty());
    }
}
