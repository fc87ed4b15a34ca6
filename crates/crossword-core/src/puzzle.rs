//! Puzzle definitions: grid, clues, and the built-in catalog
//!
//! Puzzles are hand-authored, fixed data. The engine never validates them
//! at runtime; `Puzzle::validate` exists for authoring time and is
//! exercised over the whole catalog by the tests below.

use crate::{Direction, Position, WordId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Difficulty tier, one puzzle per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a lowercase tier name, e.g. from a CLI flag or JS string
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A grid cell: blank (not part of any word) or the correct letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blank,
    Letter(char),
}

impl Cell {
    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Blank => None,
            Cell::Letter(ch) => Some(ch),
        }
    }
}

/// One clue: number, display text, target answer, starting coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clue {
    pub num: u32,
    pub text: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
}

impl Clue {
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// The grid coordinates this clue occupies, in answer order
    pub fn cells(&self, direction: Direction) -> impl Iterator<Item = Position> + '_ {
        let (row, col) = (self.row, self.col);
        (0..self.answer.len()).map(move |i| match direction {
            Direction::Across => Position::new(row, col + i),
            Direction::Down => Position::new(row + i, col),
        })
    }
}

/// Authoring-time validation outcome
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub problems: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// A complete puzzle definition. Rows may be jagged; a coordinate beyond a
/// row's end is out of bounds, the same as a coordinate below the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    difficulty: Difficulty,
    grid: Vec<Vec<Cell>>,
    cell_numbers: HashMap<Position, u32>,
    across: BTreeMap<u32, Clue>,
    down: BTreeMap<u32, Clue>,
}

impl Puzzle {
    /// Look up the built-in puzzle for a difficulty tier
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => easy(),
            Difficulty::Medium => medium(),
            Difficulty::Hard => hard(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Widest row; jagged rows may be shorter
    pub fn cols(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total cell count, used to bound navigation skip loops
    pub fn cell_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0
            && (row as usize) < self.grid.len()
            && col >= 0
            && (col as usize) < self.grid[row as usize].len()
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos.row)?.get(pos.col).copied()
    }

    /// Out-of-bounds coordinates count as blank
    pub fn is_blank(&self, pos: Position) -> bool {
        self.cell(pos).map_or(true, Cell::is_blank)
    }

    /// The small clue-start label printed in the cell corner, if any
    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.cell_numbers.get(&pos).copied()
    }

    pub fn clues(&self, direction: Direction) -> &BTreeMap<u32, Clue> {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub fn clue(&self, word: WordId) -> Option<&Clue> {
        self.clues(word.direction).get(&word.num)
    }

    pub fn total_clues(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// All words, across before down, each paired with its clue
    pub fn words(&self) -> impl Iterator<Item = (WordId, &Clue)> {
        let across = self
            .across
            .values()
            .map(|c| (WordId::new(Direction::Across, c.num), c));
        let down = self
            .down
            .values()
            .map(|c| (WordId::new(Direction::Down, c.num), c));
        across.chain(down)
    }

    /// Check the authoring invariants: answers are uppercase letters, every
    /// span lies in-bounds over non-blank cells whose letters agree with the
    /// answer, and every non-blank cell is covered by at least one span.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut covered: Vec<Position> = Vec::new();

        for (word, clue) in self.words() {
            if clue.answer.is_empty() || !clue.answer.chars().all(|c| c.is_ascii_uppercase()) {
                report
                    .problems
                    .push(format!("{word}: answer {:?} is not uppercase A-Z", clue.answer));
            }
            for (pos, expected) in clue.cells(word.direction).zip(clue.answer.chars()) {
                match self.cell(pos) {
                    None => report
                        .problems
                        .push(format!("{word}: cell ({},{}) out of bounds", pos.row, pos.col)),
                    Some(Cell::Blank) => report
                        .problems
                        .push(format!("{word}: cell ({},{}) is blank", pos.row, pos.col)),
                    Some(Cell::Letter(ch)) if ch != expected => report.problems.push(format!(
                        "{word}: cell ({},{}) holds {ch}, answer wants {expected}",
                        pos.row, pos.col
                    )),
                    Some(Cell::Letter(_)) => {}
                }
                covered.push(pos);
            }
        }

        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let pos = Position::new(row, col);
                if !cell.is_blank() && !covered.contains(&pos) {
                    report
                        .problems
                        .push(format!("cell ({row},{col}) belongs to no clue"));
                }
            }
        }

        report
    }
}

fn grid_from_rows(rows: &[&str]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|ch| if ch == ' ' { Cell::Blank } else { Cell::Letter(ch) })
                .collect()
        })
        .collect()
}

fn clue(num: u32, text: &str, answer: &str, row: usize, col: usize) -> (u32, Clue) {
    (
        num,
        Clue {
            num,
            text: text.to_string(),
            answer: answer.to_string(),
            row,
            col,
        },
    )
}

fn numbers(entries: &[(usize, usize, u32)]) -> HashMap<Position, u32> {
    entries
        .iter()
        .map(|&(row, col, num)| (Position::new(row, col), num))
        .collect()
}

fn easy() -> Puzzle {
    Puzzle {
        difficulty: Difficulty::Easy,
        grid: grid_from_rows(&[
            "   T",
            "ALNWICK",
            "   E",
            "TYNE",
            "   D",
            " DURHAM",
        ]),
        cell_numbers: numbers(&[(0, 3, 1), (1, 0, 2), (3, 0, 3), (5, 1, 4)]),
        across: BTreeMap::from([
            clue(2, "Castle town and county seat of Northumberland", "ALNWICK", 1, 0),
            clue(3, "River flowing through Newcastle", "TYNE", 3, 0),
            clue(4, "Cathedral city in County Durham", "DURHAM", 5, 1),
        ]),
        down: BTreeMap::from([clue(
            1,
            "River marking the border with Scotland",
            "TWEED",
            0,
            3,
        )]),
    }
}

fn medium() -> Puzzle {
    Puzzle {
        difficulty: Difficulty::Medium,
        grid: grid_from_rows(&[
            "     A",
            "     SHEARER",
            "GATESHEAD",
            "     I",
            "   SUNDERLAND",
            "     G",
            "     T",
            "     O",
            "     N",
        ]),
        cell_numbers: numbers(&[(0, 5, 1), (1, 5, 2), (2, 0, 3), (4, 3, 4)]),
        across: BTreeMap::from([
            clue(2, "Newcastle United's legendary striker Alan", "SHEARER", 1, 5),
            clue(3, "Town connected to Newcastle by seven bridges", "GATESHEAD", 2, 0),
            clue(4, "Wearside city and footballing rival", "SUNDERLAND", 4, 3),
        ]),
        down: BTreeMap::from([clue(
            1,
            "Coal town that raised the Charlton brothers",
            "ASHINGTON",
            0,
            5,
        )]),
    }
}

fn hard() -> Puzzle {
    Puzzle {
        difficulty: Difficulty::Hard,
        grid: grid_from_rows(&[
            "      L",
            "      I",
            "HADRIANSWALL",
            "      D",
            "      I",
            "SEAHOUSES",
            "      F",
            "     WALLSEND",
            "      R",
            "      N",
            "      E",
        ]),
        cell_numbers: numbers(&[(0, 6, 1), (2, 0, 2), (5, 0, 3), (7, 5, 4)]),
        across: BTreeMap::from([
            clue(2, "Historic landmark built by Romans", "HADRIANSWALL", 2, 0),
            clue(3, "Harbour village gateway to the Farne Islands", "SEAHOUSES", 5, 0),
            clue(4, "Town where the Roman wall met the Tyne", "WALLSEND", 7, 5),
        ]),
        down: BTreeMap::from([clue(
            1,
            "Holy Island off the Northumberland coast",
            "LINDISFARNE",
            0,
            6,
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_satisfies_invariants() {
        for difficulty in Difficulty::ALL {
            let puzzle = Puzzle::for_difficulty(difficulty);
            let report = puzzle.validate();
            assert!(
                report.is_valid(),
                "{difficulty} puzzle invalid: {:?}",
                report.problems
            );
        }
    }

    #[test]
    fn easy_puzzle_layout() {
        let puzzle = Puzzle::for_difficulty(Difficulty::Easy);
        assert_eq!(puzzle.rows(), 6);
        assert_eq!(puzzle.cols(), 7);
        assert_eq!(puzzle.total_clues(), 4);

        // ALNWICK is across clue 2 starting at (1,0)
        let alnwick = &puzzle.clues(Direction::Across)[&2];
        assert_eq!(alnwick.answer, "ALNWICK");
        assert_eq!(alnwick.start(), Position::new(1, 0));
        assert_eq!(puzzle.number_at(Position::new(1, 0)), Some(2));
        assert_eq!(puzzle.number_at(Position::new(1, 1)), None);
    }

    #[test]
    fn jagged_rows_bound_per_row() {
        let puzzle = Puzzle::for_difficulty(Difficulty::Medium);
        // Row 4 holds SUNDERLAND out to col 12, row 5 stops at col 5
        assert!(puzzle.in_bounds(4, 12));
        assert!(!puzzle.in_bounds(5, 12));
        assert!(!puzzle.in_bounds(-1, 0));
        assert!(!puzzle.in_bounds(0, -1));
    }

    #[test]
    fn out_of_bounds_reads_as_blank() {
        let puzzle = Puzzle::for_difficulty(Difficulty::Easy);
        assert!(puzzle.is_blank(Position::new(99, 0)));
        assert!(puzzle.is_blank(Position::new(0, 99)));
        assert!(puzzle.is_blank(Position::new(0, 0)));
        assert!(!puzzle.is_blank(Position::new(1, 0)));
    }

    #[test]
    fn clue_cells_follow_direction() {
        let puzzle = Puzzle::for_difficulty(Difficulty::Easy);
        let tweed = &puzzle.clues(Direction::Down)[&1];
        let cells: Vec<Position> = tweed.cells(Direction::Down).collect();
        assert_eq!(cells.first(), Some(&Position::new(0, 3)));
        assert_eq!(cells.last(), Some(&Position::new(4, 3)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn validate_reports_uncovered_cells() {
        let mut puzzle = Puzzle::for_difficulty(Difficulty::Easy);
        puzzle.grid[0][0] = Cell::Letter('X');
        let report = puzzle.validate();
        assert!(!report.is_valid());
        assert!(report.problems.iter().any(|p| p.contains("belongs to no clue")));
    }

    #[test]
    fn validate_reports_letter_disagreement() {
        let mut puzzle = Puzzle::for_difficulty(Difficulty::Easy);
        puzzle.grid[1][0] = Cell::Letter('Z');
        let report = puzzle.validate();
        assert!(!report.is_valid());
    }

    #[test]
    fn difficulty_names_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(&difficulty.to_string()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_name("extreme"), None);
    }
}
