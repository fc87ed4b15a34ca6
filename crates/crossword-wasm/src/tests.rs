//! Tests for the WASM crossword game state

#[cfg(test)]
mod tests {
    use crate::game::{GameState, ScreenState};
    use crate::render::Layout;
    use crossword_core::{Direction, Position};

    /// Drive the state onto the easy puzzle's game screen
    fn playing_easy() -> GameState {
        let mut state = GameState::new();
        state.handle_key("s");
        state.handle_key("1");
        state.handle_key("Escape");
        state.handle_key("Enter");
        state
    }

    #[test]
    fn test_new_state_is_on_home() {
        let state = GameState::new();
        assert_eq!(state.screen(), ScreenState::Home);
        assert!(state.session().is_none());
        assert!(state.sound());
        assert!(!state.is_complete());
        assert_eq!(state.elapsed_string(), "0:00");
    }

    #[test]
    fn test_settings_pick_difficulty_and_sound() {
        let mut state = GameState::new();
        state.handle_key("s");
        assert_eq!(state.screen(), ScreenState::Settings);

        state.handle_key("3");
        assert_eq!(state.difficulty().to_string(), "hard");

        state.handle_key("s");
        assert!(!state.sound());

        state.handle_key("t");
        assert!(state.take_theme_toggle());
        assert!(!state.take_theme_toggle());

        state.handle_key("Escape");
        assert_eq!(state.screen(), ScreenState::Home);
    }

    #[test]
    fn test_start_selects_first_across_clue() {
        let state = playing_easy();
        assert_eq!(state.screen(), ScreenState::Playing);
        let session = state.session().unwrap();
        assert_eq!(session.cursor(), Some(Position::new(1, 0)));
        assert_eq!(session.direction(), Direction::Across);
    }

    #[test]
    fn test_typing_and_arrows_reach_the_session() {
        let mut state = playing_easy();
        state.handle_key("a");
        let session = state.session().unwrap();
        assert_eq!(session.letter_at(Position::new(1, 0)), Some('A'));
        assert_eq!(session.cursor(), Some(Position::new(1, 1)));

        state.handle_key("ArrowDown");
        assert_eq!(state.session().unwrap().direction(), Direction::Down);

        state.handle_key("Backspace");
        state.handle_key("Tab");
        assert!(state.session().is_some());
    }

    #[test]
    fn test_escape_leaves_the_game() {
        let mut state = playing_easy();
        state.handle_key("Escape");
        assert_eq!(state.screen(), ScreenState::Home);
        assert!(state.session().is_none());
    }

    #[test]
    fn test_clock_only_ticks_while_playing() {
        let mut state = GameState::new();
        state.tick_second();
        state.handle_key("Enter");
        state.tick_second();
        state.tick_second();
        assert_eq!(state.elapsed_string(), "0:02");
    }

    #[test]
    fn test_solving_reaches_celebration_and_chimes_once() {
        let mut state = playing_easy();
        for word in ["ALNWICK", "TYNE", "DURHAM", "TWEED"] {
            for ch in word.chars() {
                state.handle_key(&ch.to_string());
            }
            state.handle_key("Tab");
        }

        assert_eq!(state.screen(), ScreenState::Solved);
        assert!(state.is_complete());
        assert!(state.take_chime());
        assert!(!state.take_chime());

        state.handle_key("n");
        assert_eq!(state.screen(), ScreenState::Playing);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_snapshot_reports_progress() {
        let mut state = playing_easy();
        for ch in "ALNWICK".chars() {
            state.handle_key(&ch.to_string());
        }

        let snapshot = state.snapshot();
        assert_eq!(snapshot.difficulty, "easy");
        assert!(!snapshot.complete);
        assert_eq!(snapshot.correct_words, vec!["across-2".to_string()]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("across-2"));
    }

    #[test]
    fn test_layout_hit_testing() {
        let state = playing_easy();
        let session = state.session().unwrap();
        let layout = Layout::compute(1000, 700, session);

        // Center of the top-left cell
        let x = layout.grid_x + layout.cell / 2.0;
        let y = layout.grid_y + layout.cell / 2.0;
        assert_eq!(layout.cell_at(x, y), Some(Position::new(0, 0)));

        // Outside the grid
        assert_eq!(layout.cell_at(1.0, 1.0), None);
        assert_eq!(layout.clue_at(1.0, 1.0), None);
    }

    #[test]
    fn test_grid_clicks_select_cells() {
        let mut state = playing_easy();
        let layout = Layout::compute(1000, 700, state.session().unwrap());

        // Click the second cell of ALNWICK at (1,1)
        let x = layout.grid_x + layout.cell * 1.5;
        let y = layout.grid_y + layout.cell * 1.5;
        state.handle_click(x, y, &layout);
        assert_eq!(
            state.session().unwrap().cursor(),
            Some(Position::new(1, 1))
        );
    }
}
