//! Basic example of driving the crossword engine

use crossword_core::{Difficulty, Direction, Position, Session};

fn main() {
    println!("Starting an easy session...\n");
    let mut session = Session::new(Difficulty::Easy);

    println!(
        "Cursor starts at {:?}, direction {}",
        session.cursor(),
        session.direction()
    );

    // Type the first across answer
    for ch in "ALNWICK".chars() {
        session.type_letter(ch);
    }

    for view in session.clue_views(Direction::Across) {
        let mark = if view.solved { "solved" } else { "open" };
        println!("{}. {} [{}]", view.word.num, view.text, mark);
    }

    // Render the grid as text
    println!();
    let puzzle = session.puzzle();
    for row in 0..puzzle.rows() {
        let mut line = String::new();
        for col in 0..puzzle.cols() {
            let view = session.cell_view(Position::new(row, col));
            line.push(if view.blank {
                '#'
            } else {
                view.letter.unwrap_or('.')
            });
        }
        println!("{line}");
    }

    println!("\nElapsed: {}", session.elapsed_string());
    println!("Complete: {}", session.is_complete());
}
