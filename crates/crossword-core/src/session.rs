//! One puzzle-play session: answers, completion, cursor, clock
//!
//! A session owns all mutable state for one play of one puzzle. Front ends
//! create a session per game, feed it input events, and drop it on
//! teardown; nothing is shared between sessions.

use crate::{Clue, Difficulty, Direction, Position, Puzzle, SessionClock, SlotIndex, WordId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// An arrow-key press. Horizontal arrows force the across direction,
/// vertical arrows force down, before the cursor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

impl Arrow {
    fn direction(self) -> Direction {
        match self {
            Arrow::Left | Arrow::Right => Direction::Across,
            Arrow::Up | Arrow::Down => Direction::Down,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Arrow::Up => (-1, 0),
            Arrow::Down => (1, 0),
            Arrow::Left => (0, -1),
            Arrow::Right => (0, 1),
        }
    }
}

/// Everything a front end needs to draw one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub blank: bool,
    pub letter: Option<char>,
    pub number: Option<u32>,
    pub selected: bool,
    pub in_active_word: bool,
    pub in_solved_word: bool,
}

/// One clue-list entry with its render flags
#[derive(Debug, Clone, Serialize)]
pub struct ClueView {
    pub word: WordId,
    pub text: String,
    pub solved: bool,
    pub active: bool,
}

pub struct Session {
    puzzle: Puzzle,
    slots: SlotIndex,
    answers: HashMap<Position, char>,
    correct_words: HashSet<WordId>,
    complete: bool,
    solved_event: bool,
    cursor: Option<Position>,
    direction: Direction,
    clock: SessionClock,
}

impl Session {
    /// Start a session on the built-in puzzle for a difficulty tier
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_puzzle(Puzzle::for_difficulty(difficulty))
    }

    /// Start a session on an arbitrary puzzle. The cursor lands on the
    /// first across clue's starting cell (first down clue if there is no
    /// across clue), and the clock starts running.
    pub fn with_puzzle(puzzle: Puzzle) -> Self {
        let slots = SlotIndex::new(&puzzle);
        let (cursor, direction) =
            if let Some(clue) = puzzle.clues(Direction::Across).values().next() {
                (Some(clue.start()), Direction::Across)
            } else if let Some(clue) = puzzle.clues(Direction::Down).values().next() {
                (Some(clue.start()), Direction::Down)
            } else {
                (None, Direction::Across)
            };

        Self {
            puzzle,
            slots,
            answers: HashMap::new(),
            correct_words: HashSet::new(),
            complete: false,
            solved_event: false,
            cursor,
            direction,
            clock: SessionClock::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn slots(&self) -> &SlotIndex {
        &self.slots
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn correct_words(&self) -> &HashSet<WordId> {
        &self.correct_words
    }

    pub fn word_is_correct(&self, word: WordId) -> bool {
        self.correct_words.contains(&word)
    }

    /// The player's entry at a coordinate, if any
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.answers.get(&pos).copied()
    }

    // --- input events ---

    /// Click-to-select. Blank and out-of-bounds cells are absorbed;
    /// re-selecting the current cell toggles the direction; a cell covered
    /// in exactly one direction forces that direction.
    pub fn select_cell(&mut self, pos: Position) {
        if self.puzzle.is_blank(pos) {
            return;
        }
        if self.cursor == Some(pos) {
            self.direction = self.direction.toggled();
            return;
        }
        self.cursor = Some(pos);
        let covering = self.slots.clues_at(pos);
        match (covering.across, covering.down) {
            (Some(_), None) => self.direction = Direction::Across,
            (None, Some(_)) => self.direction = Direction::Down,
            _ => {}
        }
    }

    /// Clue-list click: jump to a clue's starting cell
    pub fn select_clue(&mut self, word: WordId) {
        if let Some(clue) = self.puzzle.clue(word) {
            self.cursor = Some(clue.start());
            self.direction = word.direction;
        }
    }

    /// Arrow-key movement with blank skipping and word wrapping
    pub fn move_arrow(&mut self, arrow: Arrow) {
        self.direction = arrow.direction();
        let (d_row, d_col) = arrow.delta();
        self.step(d_row, d_col);
    }

    /// Type a letter at the cursor, then advance one step in the active
    /// direction. Ignored once the puzzle is complete.
    pub fn type_letter(&mut self, ch: char) {
        if self.complete || !ch.is_ascii_alphabetic() {
            return;
        }
        let Some(pos) = self.cursor else { return };
        self.write_letter(pos, ch);
        match self.direction {
            Direction::Across => self.step(0, 1),
            Direction::Down => self.step(1, 0),
        }
    }

    /// Answer-store write without cursor movement. Blank cells absorb the
    /// write; the letter is stored uppercase.
    pub fn set_letter(&mut self, pos: Position, ch: char) {
        if self.complete || !ch.is_ascii_alphabetic() {
            return;
        }
        self.write_letter(pos, ch);
    }

    /// Clear one entry; a no-op if the cell is already empty
    pub fn clear_letter(&mut self, pos: Position) {
        if self.complete {
            return;
        }
        if self.answers.remove(&pos).is_some() {
            self.recheck_words();
        }
    }

    /// Backspace: clear the cursor cell if it holds a letter (cursor does
    /// not move); otherwise step backward in the active direction and
    /// clear whichever cell the cursor lands on.
    pub fn backspace(&mut self) {
        if self.complete {
            return;
        }
        let Some(pos) = self.cursor else { return };
        if self.answers.contains_key(&pos) {
            self.clear_letter(pos);
            return;
        }
        match self.direction {
            Direction::Across => self.step(0, -1),
            Direction::Down => self.step(-1, 0),
        }
        if let Some(landed) = self.cursor {
            self.clear_letter(landed);
        }
    }

    /// Jump to the next clue in combined clue-number order (across before
    /// down on equal numbers), cyclically, and adopt its direction.
    pub fn tab_to_next_clue(&mut self) {
        let Some(pos) = self.cursor else { return };
        let Some(current) = self.slots.word_at(pos, self.direction) else {
            return;
        };

        let mut words: Vec<(WordId, &Clue)> = self.puzzle.words().collect();
        words.sort_by_key(|(word, _)| word.num);

        let Some(idx) = words.iter().position(|(word, _)| *word == current) else {
            return;
        };
        let (word, clue) = words[(idx + 1) % words.len()];
        self.cursor = Some(clue.start());
        self.direction = word.direction;
    }

    /// One-second clock tick, driven by the front end
    pub fn tick_second(&mut self) {
        self.clock.tick();
    }

    /// Session teardown: halt the clock so a leaked periodic callback can
    /// never advance it
    pub fn end(&mut self) {
        self.clock.stop();
    }

    /// The puzzle-solved signal, delivered at most once per session
    pub fn take_solved_event(&mut self) -> bool {
        std::mem::take(&mut self.solved_event)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.seconds()
    }

    pub fn elapsed_string(&self) -> String {
        self.clock.elapsed_string()
    }

    // --- render state ---

    pub fn cell_view(&self, pos: Position) -> CellView {
        let blank = self.puzzle.is_blank(pos);
        CellView {
            blank,
            letter: if blank { None } else { self.letter_at(pos) },
            number: self.puzzle.number_at(pos),
            selected: self.cursor == Some(pos),
            in_active_word: self.cell_in_active_word(pos),
            in_solved_word: self.cell_in_solved_word(pos),
        }
    }

    /// The word the cursor is typing into, if the cursor cell is covered
    /// in the active direction
    pub fn active_word(&self) -> Option<WordId> {
        self.slots.word_at(self.cursor?, self.direction)
    }

    pub fn cell_in_active_word(&self, pos: Position) -> bool {
        self.active_word()
            .map_or(false, |word| self.slots.span(word).contains(&pos))
    }

    pub fn cell_in_solved_word(&self, pos: Position) -> bool {
        let covering = self.slots.clues_at(pos);
        covering
            .across
            .map(|num| WordId::new(Direction::Across, num))
            .into_iter()
            .chain(covering.down.map(|num| WordId::new(Direction::Down, num)))
            .any(|word| self.correct_words.contains(&word))
    }

    /// Clue list for one direction with solved/active flags
    pub fn clue_views(&self, direction: Direction) -> Vec<ClueView> {
        let active = self.active_word();
        self.puzzle
            .clues(direction)
            .values()
            .map(|clue| {
                let word = WordId::new(direction, clue.num);
                ClueView {
                    word,
                    text: clue.text.clone(),
                    solved: self.correct_words.contains(&word),
                    active: active == Some(word),
                }
            })
            .collect()
    }

    // --- internals ---

    fn write_letter(&mut self, pos: Position, ch: char) {
        if self.puzzle.is_blank(pos) {
            return;
        }
        self.answers.insert(pos, ch.to_ascii_uppercase());
        self.recheck_words();
    }

    /// One cursor step. Blank cells are skipped onward in the same delta
    /// direction; leaving the grid wraps to the adjacent word of the
    /// active direction. The loop is bounded by the cell count, so a
    /// pathological all-blank path ends as a no-op.
    fn step(&mut self, d_row: i32, d_col: i32) {
        let Some(origin) = self.cursor else { return };
        let forward = d_row + d_col > 0;
        let mut row = origin.row as i32 + d_row;
        let mut col = origin.col as i32 + d_col;

        for _ in 0..self.puzzle.cell_count() {
            if !self.puzzle.in_bounds(row, col) {
                self.wrap(origin, forward);
                return;
            }
            let pos = Position::new(row as usize, col as usize);
            if !self.puzzle.is_blank(pos) {
                self.cursor = Some(pos);
                return;
            }
            row += d_row;
            col += d_col;
        }
    }

    /// Move to the adjacent word of the active direction among the clues
    /// sharing the origin's row (across) or column (down): next word's
    /// first cell going forward, previous word's last cell going
    /// backward, cyclically.
    fn wrap(&mut self, origin: Position, forward: bool) {
        let direction = self.direction;
        let mut words: Vec<&Clue> = self
            .puzzle
            .clues(direction)
            .values()
            .filter(|clue| match direction {
                Direction::Across => clue.row == origin.row,
                Direction::Down => clue.col == origin.col,
            })
            .collect();
        if words.is_empty() {
            return;
        }
        words.sort_by_key(|clue| match direction {
            Direction::Across => clue.col,
            Direction::Down => clue.row,
        });

        let Some(current) = words
            .iter()
            .position(|clue| clue.cells(direction).any(|p| p == origin))
        else {
            return;
        };

        let target = if forward {
            words[(current + 1) % words.len()].start()
        } else {
            let prev = words[(current + words.len() - 1) % words.len()];
            prev.cells(direction).last().unwrap_or(prev.start())
        };
        self.cursor = Some(target);
    }

    /// Re-evaluate every word against the answer store. Runs after every
    /// mutation, over all clues, so retraction stays correct when a
    /// shared cell changes. The false-to-true completion transition stops
    /// the clock and arms the solved signal exactly once.
    fn recheck_words(&mut self) {
        for (word, clue) in self.puzzle.words() {
            let mut entered = String::with_capacity(clue.answer.len());
            let filled = clue.cells(word.direction).all(|pos| {
                match self.answers.get(&pos) {
                    Some(ch) => {
                        entered.push(*ch);
                        true
                    }
                    None => false,
                }
            });
            if filled && entered == clue.answer {
                self.correct_words.insert(word);
            } else {
                self.correct_words.remove(&word);
            }
        }

        if !self.complete && self.correct_words.len() == self.puzzle.total_clues() {
            self.complete = true;
            self.solved_event = true;
            self.clock.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy() -> Session {
        Session::new(Difficulty::Easy)
    }

    fn across(num: u32) -> WordId {
        WordId::new(Direction::Across, num)
    }

    fn down(num: u32) -> WordId {
        WordId::new(Direction::Down, num)
    }

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.type_letter(ch);
        }
    }

    fn fill_word(session: &mut Session, word: WordId) {
        let answer = session.puzzle().clue(word).unwrap().answer.clone();
        let span = session.slots().span(word).to_vec();
        for (pos, ch) in span.into_iter().zip(answer.chars()) {
            session.set_letter(pos, ch);
        }
    }

    #[test]
    fn session_starts_on_first_across_clue() {
        let session = easy();
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
        assert_eq!(session.direction(), Direction::Across);
        assert_eq!(session.elapsed_secs(), 0);
        assert!(!session.is_complete());
        assert!(session.correct_words().is_empty());
    }

    #[test]
    fn selecting_a_blank_cell_changes_nothing() {
        let mut session = easy();
        session.select_cell(Position::new(0, 0));
        session.select_cell(Position::new(99, 99));
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
        assert_eq!(session.direction(), Direction::Across);
    }

    #[test]
    fn reselecting_the_cursor_cell_toggles_direction() {
        let mut session = easy();
        let crossing = Position::new(1, 3);
        session.select_cell(crossing);
        assert_eq!(session.direction(), Direction::Across);

        session.select_cell(crossing);
        assert_eq!(session.direction(), Direction::Down);

        // An even number of re-selects restores the original direction
        session.select_cell(crossing);
        assert_eq!(session.direction(), Direction::Across);
    }

    #[test]
    fn selection_forces_the_only_covering_direction() {
        let mut session = easy();

        session.select_cell(Position::new(0, 3)); // TWEED only
        assert_eq!(session.direction(), Direction::Down);

        session.select_cell(Position::new(1, 0)); // ALNWICK only
        assert_eq!(session.direction(), Direction::Across);

        // Crossing cell keeps whatever direction was active
        session.select_cell(Position::new(0, 3));
        session.select_cell(Position::new(1, 3));
        assert_eq!(session.direction(), Direction::Down);
    }

    #[test]
    fn arrows_force_direction_and_move() {
        let mut session = easy();
        session.move_arrow(Arrow::Right);
        assert_eq!(session.cursor(), Some(Position::new(1, 1)));
        assert_eq!(session.direction(), Direction::Across);

        session.select_cell(Position::new(1, 3));
        session.move_arrow(Arrow::Down);
        assert_eq!(session.cursor(), Some(Position::new(2, 3)));
        assert_eq!(session.direction(), Direction::Down);
    }

    #[test]
    fn moving_over_blanks_skips_to_the_next_cell_in_line() {
        let mut session = easy();
        // Below (1,0) rows 2 is blank in column 0; TYNE starts at (3,0)
        session.move_arrow(Arrow::Down);
        assert_eq!(session.cursor(), Some(Position::new(3, 0)));
    }

    #[test]
    fn moving_off_grid_with_no_word_in_line_is_absorbed() {
        let mut session = easy();
        session.select_cell(Position::new(3, 0)); // TYNE start, column 0
        session.move_arrow(Arrow::Down);
        // Column 0 has no down clue: blanks skip to the grid edge, no-op
        assert_eq!(session.cursor(), Some(Position::new(3, 0)));
        assert_eq!(session.direction(), Direction::Down);
    }

    #[test]
    fn moving_past_a_word_end_wraps_to_the_adjacent_word() {
        let mut session = easy();
        // ALNWICK is the only across word in row 1, so the wrap is cyclic
        session.select_cell(Position::new(1, 6));
        session.move_arrow(Arrow::Right);
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
    }

    #[test]
    fn moving_backward_past_a_word_start_lands_on_the_previous_word_end() {
        let mut session = easy();
        session.move_arrow(Arrow::Left);
        assert_eq!(session.cursor(), Some(Position::new(1, 6)));

        let mut session = Session::new(Difficulty::Medium);
        session.select_cell(Position::new(0, 5)); // ASHINGTON start
        session.move_arrow(Arrow::Up);
        assert_eq!(session.cursor(), Some(Position::new(8, 5)));
    }

    #[test]
    fn typing_stores_uppercase_and_advances() {
        let mut session = easy();
        session.type_letter('a');
        assert_eq!(session.letter_at(Position::new(1, 0)), Some('A'));
        assert_eq!(session.cursor(), Some(Position::new(1, 1)));

        session.type_letter('?');
        assert_eq!(session.cursor(), Some(Position::new(1, 1)));
    }

    #[test]
    fn typing_at_a_word_end_advances_with_wrap() {
        let mut session = easy();
        session.select_cell(Position::new(1, 6));
        session.type_letter('K');
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
    }

    #[test]
    fn typing_down_advances_down() {
        let mut session = easy();
        session.select_cell(Position::new(0, 3));
        session.type_letter('T');
        assert_eq!(session.cursor(), Some(Position::new(1, 3)));
        assert_eq!(session.direction(), Direction::Down);
    }

    #[test]
    fn backspace_clears_in_place_when_the_cell_holds_a_letter() {
        let mut session = easy();
        session.type_letter('A');
        session.select_cell(Position::new(1, 0));
        session.backspace();
        assert_eq!(session.letter_at(Position::new(1, 0)), None);
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
    }

    #[test]
    fn backspace_on_an_empty_cell_steps_back_and_clears_there() {
        let mut session = easy();
        session.type_letter('A');
        session.type_letter('L');
        // Cursor now at (1,2), empty; the step back lands on (1,1)
        session.backspace();
        assert_eq!(session.cursor(), Some(Position::new(1, 1)));
        assert_eq!(session.letter_at(Position::new(1, 1)), None);
        assert_eq!(session.letter_at(Position::new(1, 0)), Some('A'));
    }

    #[test]
    fn backspace_at_a_word_start_wraps_backward() {
        let mut session = easy();
        session.backspace();
        assert_eq!(session.cursor(), Some(Position::new(1, 6)));
    }

    #[test]
    fn tab_cycles_clues_in_number_order() {
        let mut session = easy();
        // Clue order: 1 down, 2 across, 3 across, 4 across
        session.tab_to_next_clue();
        assert_eq!(session.cursor(), Some(Position::new(3, 0)));
        assert_eq!(session.direction(), Direction::Across);

        session.tab_to_next_clue();
        assert_eq!(session.cursor(), Some(Position::new(5, 1)));

        // From the last clue the cycle returns to clue 1, a down clue
        session.tab_to_next_clue();
        assert_eq!(session.cursor(), Some(Position::new(0, 3)));
        assert_eq!(session.direction(), Direction::Down);

        session.tab_to_next_clue();
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
        assert_eq!(session.direction(), Direction::Across);
    }

    #[test]
    fn select_clue_jumps_to_its_start() {
        let mut session = easy();
        session.select_clue(down(1));
        assert_eq!(session.cursor(), Some(Position::new(0, 3)));
        assert_eq!(session.direction(), Direction::Down);

        session.select_clue(across(4));
        assert_eq!(session.cursor(), Some(Position::new(5, 1)));
        assert_eq!(session.direction(), Direction::Across);
    }

    #[test]
    fn typing_a_full_correct_word_marks_it_solved() {
        let mut session = easy();
        type_word(&mut session, "ALNWICK");
        assert!(session.word_is_correct(across(2)));
        assert!(!session.is_complete());
    }

    #[test]
    fn a_wrong_overwrite_retracts_the_word() {
        let mut session = easy();
        type_word(&mut session, "ALNWICK");
        session.select_cell(Position::new(1, 0));
        session.type_letter('X');
        assert!(!session.word_is_correct(across(2)));
    }

    #[test]
    fn clearing_a_letter_retracts_the_word_immediately() {
        let mut session = easy();
        type_word(&mut session, "ALNWICK");
        session.clear_letter(Position::new(1, 2));
        assert!(!session.word_is_correct(across(2)));
    }

    #[test]
    fn editing_a_shared_cell_retracts_the_crossing_word() {
        let mut session = easy();
        type_word(&mut session, "ALNWICK");
        assert!(session.word_is_correct(across(2)));

        // (1,3) is shared with TWEED; a wrong letter there kills ALNWICK
        session.set_letter(Position::new(1, 3), 'Q');
        assert!(!session.word_is_correct(across(2)));
        assert!(!session.word_is_correct(down(1)));
    }

    #[test]
    fn lowercase_input_still_matches_the_answer() {
        let mut session = easy();
        type_word(&mut session, "alnwick");
        assert!(session.word_is_correct(across(2)));
    }

    #[test]
    fn completing_every_word_completes_the_puzzle() {
        let mut session = easy();
        for word in [down(1), across(2), across(3), across(4)] {
            fill_word(&mut session, word);
        }
        assert!(session.is_complete());
        assert_eq!(session.correct_words().len(), 4);
    }

    #[test]
    fn the_solved_signal_fires_exactly_once() {
        let mut session = easy();
        assert!(!session.take_solved_event());
        for word in [down(1), across(2), across(3), across(4)] {
            fill_word(&mut session, word);
        }
        assert!(session.take_solved_event());
        assert!(!session.take_solved_event());
    }

    #[test]
    fn completion_freezes_the_clock() {
        let mut session = easy();
        session.tick_second();
        session.tick_second();
        for word in [down(1), across(2), across(3), across(4)] {
            fill_word(&mut session, word);
        }
        let frozen = session.elapsed_secs();
        session.tick_second();
        session.tick_second();
        assert_eq!(session.elapsed_secs(), frozen);
    }

    #[test]
    fn mutations_after_completion_are_ignored() {
        let mut session = easy();
        for word in [down(1), across(2), across(3), across(4)] {
            fill_word(&mut session, word);
        }
        session.select_cell(Position::new(1, 0));
        session.type_letter('X');
        session.backspace();
        assert_eq!(session.letter_at(Position::new(1, 0)), Some('A'));
        assert!(session.is_complete());
    }

    #[test]
    fn ending_a_session_halts_the_clock() {
        let mut session = easy();
        session.tick_second();
        session.end();
        session.tick_second();
        assert_eq!(session.elapsed_secs(), 1);
    }

    #[test]
    fn elapsed_string_is_unpadded_minutes_padded_seconds() {
        let mut session = easy();
        for _ in 0..5 {
            session.tick_second();
        }
        assert_eq!(session.elapsed_string(), "0:05");
    }

    #[test]
    fn cell_views_carry_render_flags() {
        let mut session = easy();
        session.type_letter('A');
        session.select_cell(Position::new(1, 0));

        let view = session.cell_view(Position::new(1, 0));
        assert!(!view.blank);
        assert_eq!(view.letter, Some('A'));
        assert_eq!(view.number, Some(2));
        assert!(view.selected);
        assert!(view.in_active_word);

        let blank = session.cell_view(Position::new(0, 0));
        assert!(blank.blank);
        assert_eq!(blank.letter, None);
        assert!(!blank.selected);

        // (1,1) shares the active word but is not selected
        let neighbor = session.cell_view(Position::new(1, 1));
        assert!(!neighbor.selected);
        assert!(neighbor.in_active_word);
        // (3,0) is in a different word entirely
        assert!(!session.cell_view(Position::new(3, 0)).in_active_word);
    }

    #[test]
    fn solved_word_flag_covers_the_whole_span() {
        let mut session = easy();
        type_word(&mut session, "ALNWICK");
        assert!(session.cell_view(Position::new(1, 0)).in_solved_word);
        assert!(session.cell_view(Position::new(1, 6)).in_solved_word);
        assert!(!session.cell_view(Position::new(3, 0)).in_solved_word);
    }

    #[test]
    fn clue_views_flag_active_and_solved() {
        let mut session = easy();
        type_word(&mut session, "ALNWICK");
        session.select_cell(Position::new(3, 0));

        let across_views = session.clue_views(Direction::Across);
        assert_eq!(across_views.len(), 3);
        let alnwick = &across_views[0];
        assert!(alnwick.solved);
        assert!(!alnwick.active);
        let tyne = &across_views[1];
        assert!(!tyne.solved);
        assert!(tyne.active);

        let down_views = session.clue_views(Direction::Down);
        assert_eq!(down_views.len(), 1);
        assert!(!down_views[0].solved);
    }

    #[test]
    fn the_cursor_never_rests_on_a_blank_cell() {
        let mut session = easy();
        let arrows = [
            Arrow::Right,
            Arrow::Down,
            Arrow::Down,
            Arrow::Left,
            Arrow::Up,
            Arrow::Right,
            Arrow::Up,
            Arrow::Left,
        ];
        for arrow in arrows {
            session.move_arrow(arrow);
            let pos = session.cursor().unwrap();
            assert!(!session.puzzle().is_blank(pos), "cursor on blank at {pos:?}");
        }
    }
}
