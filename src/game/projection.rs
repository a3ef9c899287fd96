//! Display grid derived from a game
//!
//! One row per slot. Placed guesses are scored; the active slot shows the
//! letters typed so far; every other slot is blank.

use super::state::{Game, GuessKey};
use crate::core::{Feedback, Score, TRIES, WORD_SIZE, Word};

/// One letter box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A placed, scored guess
    Final,
    /// The slot receiving keystrokes
    Active,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: GuessKey,
    pub kind: RowKind,
    pub cells: [Cell; WORD_SIZE],
}

impl Row {
    fn scored(key: GuessKey, word: &Word) -> Self {
        let score = Score::calculate(word, Word::solution());
        let cells = std::array::from_fn(|i| Cell {
            letter: Some(char::from(word.char_at(i))),
            feedback: Some(score.feedback()[i]),
        });

        Self {
            key,
            kind: RowKind::Final,
            cells,
        }
    }

    fn active(key: GuessKey, value: &str) -> Self {
        let mut cells = [Cell::default(); WORD_SIZE];
        for (cell, letter) in cells.iter_mut().zip(value.chars()) {
            cell.letter = Some(letter);
        }

        Self {
            key,
            kind: RowKind::Active,
            cells,
        }
    }

    fn blank(key: GuessKey) -> Self {
        Self {
            key,
            kind: RowKind::Blank,
            cells: [Cell::default(); WORD_SIZE],
        }
    }

    /// Letters of the row, blanks as spaces
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.letter.unwrap_or(' ')).collect()
    }

    /// Score of a final row
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        if self.kind != RowKind::Final {
            return None;
        }
        let word = Word::new(self.text()).ok()?;
        Some(Score::calculate(&word, Word::solution()))
    }
}

/// Read-only render model: `TRIES` rows of `WORD_SIZE` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: [Row; TRIES],
}

impl Grid {
    /// Project the current state of `game`
    #[must_use]
    pub fn project(game: &Game) -> Self {
        let current = game.current();
        let rows = std::array::from_fn(|i| {
            let slot = &game.board().slots()[i];
            match slot.value() {
                Some(word) => Row::scored(slot.key(), word),
                None if current.number() == i => Row::active(slot.key(), current.value()),
                None => Row::blank(slot.key()),
            }
        });

        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: Game, keys: &str) -> Game {
        keys.chars()
            .map(|c| c.to_string())
            .fold(game, |g, k| g.dispatch(&k))
            .dispatch("Enter")
    }

    #[test]
    fn fresh_game_projects_active_then_blank_rows() {
        let grid = Grid::project(&Game::new());
        assert_eq!(grid.rows[0].kind, RowKind::Active);
        assert!(grid.rows[1..].iter().all(|r| r.kind == RowKind::Blank));
        assert!(
            grid.rows
                .iter()
                .flat_map(|r| r.cells.iter())
                .all(|c| *c == Cell::default())
        );
    }

    #[test]
    fn active_row_fills_from_the_left() {
        let game = Game::new().dispatch("a").dispatch("b");
        let row = &Grid::project(&game).rows[0];
        assert_eq!(row.text(), "ab   ");
        assert!(row.cells.iter().all(|c| c.feedback.is_none()));
        assert_eq!(row.score(), None);
    }

    #[test]
    fn placed_row_is_scored() {
        let game = play(Game::new(), "tseeo");
        let grid = Grid::project(&game);

        let row = &grid.rows[0];
        assert_eq!(row.kind, RowKind::Final);
        assert_eq!(row.text(), "tseeo");
        assert_eq!(row.cells[0].feedback, Some(Feedback::Correct));
        assert_eq!(row.cells[1].feedback, Some(Feedback::Present));
        assert_eq!(row.cells[4].feedback, Some(Feedback::Absent));
        assert_eq!(row.score().map(Score::to_emoji).as_deref(), Some("🟩🟨🟨🟨⬜"));

        assert_eq!(grid.rows[1].kind, RowKind::Active);
        assert_eq!(grid.rows[2].kind, RowKind::Blank);
    }

    #[test]
    fn rows_carry_slot_keys() {
        let game = play(Game::new(), "crane");
        let grid = Grid::project(&game);
        for (row, slot) in grid.rows.iter().zip(game.board().slots()) {
            assert_eq!(row.key, slot.key());
        }
    }

    #[test]
    fn won_game_has_no_active_row() {
        let game = play(Game::new(), "teste");
        let grid = Grid::project(&game);
        assert_eq!(grid.rows[0].kind, RowKind::Final);
        assert!(grid.rows[1..].iter().all(|r| r.kind == RowKind::Blank));
        assert!(grid.rows[0].score().is_some_and(Score::is_perfect));
    }
}
