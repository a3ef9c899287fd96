//! Best feedback seen per letter, for the on-screen keyboard

use super::state::Board;
use crate::core::{Feedback, Score, Word};
use rustc_hash::FxHashMap;

/// QWERTY layout rendered by the hosts
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    best: FxHashMap<char, Feedback>,
}

impl LetterHints {
    /// Collect hints from every placed guess on `board`
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut best: FxHashMap<char, Feedback> = FxHashMap::default();

        for (_, word) in board.placed() {
            let score = Score::calculate(word, Word::solution());
            for (&byte, &feedback) in word.chars().iter().zip(score.feedback()) {
                let entry = best.entry(char::from(byte)).or_insert(feedback);
                *entry = (*entry).max(feedback);
            }
        }

        Self { best }
    }

    /// Best feedback for `letter`, `None` if it was never played
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Feedback> {
        self.best.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    fn play(game: Game, word: &str) -> Game {
        word.chars()
            .map(|c| c.to_string())
            .fold(game, |g, k| g.dispatch(&k))
            .dispatch("Enter")
    }

    #[test]
    fn empty_board_has_no_hints() {
        let hints = LetterHints::from_board(Game::new().board());
        assert!(hints.is_empty());
        assert_eq!(hints.get('t'), None);
    }

    #[test]
    fn hints_track_each_played_letter() {
        let game = play(Game::new(), "crane");
        let hints = LetterHints::from_board(game.board());
        assert_eq!(hints.len(), 5);
        assert_eq!(hints.get('c'), Some(Feedback::Absent));
        assert_eq!(hints.get('e'), Some(Feedback::Correct));
        assert_eq!(hints.get('t'), None);
    }

    #[test]
    fn hints_keep_the_best_feedback() {
        // 's' and 't' are present in "sabot", correct in "hosts"
        let game = play(play(Game::new(), "sabot"), "hosts");
        let hints = LetterHints::from_board(game.board());
        assert_eq!(hints.get('s'), Some(Feedback::Correct));
        assert_eq!(hints.get('t'), Some(Feedback::Correct));
    }

    #[test]
    fn keyboard_covers_the_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }
}
