//! Game state and its transitions
//!
//! A [`Game`] is a plain value: every transition consumes it and returns the
//! next state. Invalid actions return the state unchanged.

use super::input::Action;
use super::rules::{check_submission, is_winner};
use crate::core::{TRIES, WORD_SIZE, Word};
use std::fmt;
use tracing::{debug, info};

/// Stable identifier for a board row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessKey(u64);

impl GuessKey {
    #[must_use]
    pub fn fresh() -> Self {
        Self(rand::random())
    }
}

impl fmt::Display for GuessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// One board slot: either a placed guess or a row reserved for a later turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    key: GuessKey,
    value: Option<Word>,
}

impl Guess {
    fn empty() -> Self {
        Self {
            key: GuessKey::fresh(),
            value: None,
        }
    }

    #[must_use]
    pub const fn key(&self) -> GuessKey {
        self.key
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Word> {
        self.value.as_ref()
    }
}

/// The in-progress guess and the slot it will occupy once submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentGuess {
    value: String,
    number: usize,
}

impl CurrentGuess {
    #[cfg(test)]
    pub(crate) fn new(value: &str, number: usize) -> Self {
        debug_assert!(value.len() <= WORD_SIZE);
        debug_assert!(number < TRIES);
        Self {
            value: value.to_string(),
            number,
        }
    }

    const fn empty(number: usize) -> Self {
        Self {
            value: String::new(),
            number,
        }
    }

    /// Letters typed so far
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Slot index this guess will occupy
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }
}

/// Exactly `TRIES` slots, index-addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: [Guess; TRIES],
}

impl Board {
    /// A board of empty slots, each with a fresh key
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Guess::empty()),
        }
    }

    #[must_use]
    pub const fn slots(&self) -> &[Guess; TRIES] {
        &self.slots
    }

    /// Placed guesses with their slot index
    pub fn placed(&self) -> impl Iterator<Item = (usize, &Word)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.value().map(|word| (i, word)))
    }

    /// Place `word` at `index` under a fresh key
    ///
    /// # Panics
    /// Panics if `index >= TRIES`
    #[must_use]
    pub(crate) fn with_placed(mut self, index: usize, word: Word) -> Self {
        self.slots[index] = Guess {
            key: GuessKey::fresh(),
            value: Some(word),
        };
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Active slot has no letters yet
    Empty,
    /// Letters typed in the active slot
    InProgress,
    /// The guess at `slot` matched the solution
    Won { slot: usize },
    /// No slot left that can accept a submission
    Exhausted,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Exhausted)
    }
}

/// Board, in-progress guess and status of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current: CurrentGuess,
    status: GameStatus,
}

impl Game {
    /// Start a game: `TRIES` empty slots, empty guess at slot 0
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: CurrentGuess::empty(0),
            status: GameStatus::Empty,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn current(&self) -> &CurrentGuess {
        &self.current
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Classify a key symbol and apply it
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Game;
    ///
    /// let game = ["c", "r", "a", "n", "e", "Enter"]
    ///     .iter()
    ///     .fold(Game::new(), |game, key| game.dispatch(key));
    ///
    /// assert_eq!(game.current().number(), 1);
    /// assert!(game.board().slots()[0].value().is_some());
    /// ```
    #[must_use]
    pub fn dispatch(self, key: &str) -> Self {
        match Action::classify(key) {
            Some(action) => self.apply(action),
            None => self,
        }
    }

    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::AppendLetter(c) => self.append_letter(c),
            Action::DeleteLetter => self.delete_letter(),
            Action::Submit => self.submit(),
        }
    }

    /// Append a letter unless the guess is already full
    #[must_use]
    pub fn append_letter(mut self, letter: char) -> Self {
        if self.is_frozen()
            || !letter.is_ascii_lowercase()
            || self.current.value.len() == WORD_SIZE
        {
            return self;
        }

        self.current.value.push(letter);
        self.settle()
    }

    /// Remove the last letter, if any
    #[must_use]
    pub fn delete_letter(mut self) -> Self {
        if self.is_frozen() || self.current.value.pop().is_none() {
            return self;
        }

        self.settle()
    }

    /// Place the in-progress guess if it is acceptable
    #[must_use]
    pub fn submit(self) -> Self {
        if self.is_frozen() {
            return self;
        }

        if let Err(reason) = check_submission(&self.current, &self.board) {
            debug!(slot = self.current.number, %reason, "submission rejected");
            return self;
        }

        let Ok(word) = Word::new(self.current.value.as_str()) else {
            return self;
        };

        let slot = self.current.number;
        debug!(slot, guess = %word, "guess placed");
        let board = self.board.with_placed(slot, word);

        let current = if is_winner(&self.current) {
            info!(slot, "solution found");
            self.current
        } else {
            CurrentGuess::empty(slot + 1)
        };

        Self {
            board,
            current,
            status: self.status,
        }
        .settle()
    }

    /// Throw away the current game and start over
    #[must_use]
    pub fn restart(self) -> Self {
        debug!(status = ?self.status, "game restarted");
        Self::new()
    }

    // Once won, nothing but a restart changes the game
    const fn is_frozen(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    fn settle(mut self) -> Self {
        let solution = Word::solution();
        self.status = if let Some((slot, _)) = self.board.placed().find(|(_, w)| *w == solution) {
            GameStatus::Won { slot }
        } else if self.current.number + 1 == TRIES {
            GameStatus::Exhausted
        } else if self.current.value.is_empty() {
            GameStatus::Empty
        } else {
            GameStatus::InProgress
        };
        self
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(game: Game, word: &str) -> Game {
        word.chars().fold(game, |game, c| game.dispatch(&c.to_string()))
    }

    fn play(game: Game, word: &str) -> Game {
        type_word(game, word).dispatch("Enter")
    }

    #[test]
    fn new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::Empty);
        assert_eq!(game.current().value(), "");
        assert_eq!(game.current().number(), 0);
        assert_eq!(game.board().slots().len(), TRIES);
        assert_eq!(game.board().placed().count(), 0);
    }

    #[test]
    fn board_keys_are_distinct() {
        let board = Board::new();
        let keys: std::collections::HashSet<_> =
            board.slots().iter().map(Guess::key).collect();
        assert_eq!(keys.len(), TRIES);
    }

    #[test]
    fn letters_accumulate_up_to_word_size() {
        for len in 0..=WORD_SIZE {
            let word = &"abcde"[..len];
            let game = type_word(Game::new(), word);
            assert_eq!(game.current().value(), word);
        }
    }

    #[test]
    fn append_at_full_length_is_noop() {
        let game = type_word(Game::new(), "abcde");
        let after = game.clone().dispatch("f");
        assert_eq!(after, game);
        assert_eq!(after.current().value(), "abcde");
    }

    #[test]
    fn append_ignores_non_lowercase() {
        let game = Game::new().append_letter('A').append_letter('1');
        assert_eq!(game.current().value(), "");
    }

    #[test]
    fn delete_from_empty_is_noop() {
        let game = Game::new();
        let after = game.clone().dispatch("Backspace");
        assert_eq!(after, game);
    }

    #[test]
    fn delete_removes_last_letter() {
        let game = type_word(Game::new(), "abc").dispatch("Backspace");
        assert_eq!(game.current().value(), "ab");
        assert_eq!(game.status(), GameStatus::InProgress);

        let game = game.delete_letter().delete_letter();
        assert_eq!(game.status(), GameStatus::Empty);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let game = type_word(Game::new(), "ab");
        let after = ["Shift", "A", "Escape", "1"]
            .iter()
            .fold(game.clone(), |g, key| g.dispatch(key));
        assert_eq!(after, game);
    }

    #[test]
    fn short_guess_never_placed() {
        let game = play(Game::new(), "abcd");
        assert_eq!(game.board().placed().count(), 0);
        assert_eq!(game.current().number(), 0);
        assert_eq!(game.current().value(), "abcd");
    }

    #[test]
    fn valid_guess_placed_and_advances() {
        let game = play(Game::new(), "crane");
        let placed: Vec<_> = game.board().placed().collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].0, 0);
        assert_eq!(placed[0].1.text(), "crane");
        assert_eq!(game.current().number(), 1);
        assert_eq!(game.current().value(), "");
        assert_eq!(game.status(), GameStatus::Empty);
    }

    #[test]
    fn placing_a_guess_renews_its_key() {
        let game = Game::new();
        let before = game.board().slots()[0].key();
        let game = play(game, "crane");
        assert_ne!(game.board().slots()[0].key(), before);
    }

    #[test]
    fn duplicate_never_placed() {
        let game = play(play(play(Game::new(), "crane"), "slate"), "crane");
        assert_eq!(game.board().placed().count(), 2);
        assert_eq!(game.current().number(), 2);
        assert_eq!(game.current().value(), "crane");
    }

    #[test]
    fn last_slot_cannot_be_submitted() {
        let game = ["crane", "slate", "audio", "pilot", "mound"]
            .iter()
            .fold(Game::new(), |g, w| play(g, w));
        assert_eq!(game.board().placed().count(), TRIES - 1);
        assert_eq!(game.current().number(), TRIES - 1);
        assert_eq!(game.status(), GameStatus::Exhausted);

        let game = play(game, "fight");
        assert_eq!(game.board().placed().count(), TRIES - 1);
        assert!(game.board().slots()[TRIES - 1].value().is_none());
        assert_eq!(game.current().value(), "fight");
        assert_eq!(game.status(), GameStatus::Exhausted);
    }

    #[test]
    fn winning_guess_stops_play() {
        let game = play(play(Game::new(), "crane"), "teste");
        assert_eq!(game.status(), GameStatus::Won { slot: 1 });
        assert!(game.status().is_over());
        assert_eq!(game.current().number(), 1);

        let after = play(game.clone().dispatch("Backspace"), "fight");
        assert_eq!(after, game);
        assert_eq!(after.board().placed().count(), 2);
    }

    #[test]
    fn win_on_first_guess() {
        let game = play(Game::new(), "teste");
        assert_eq!(game.status(), GameStatus::Won { slot: 0 });
    }

    #[test]
    fn restart_resets_from_any_state() {
        let mid = type_word(play(Game::new(), "crane"), "sl");
        let won = play(Game::new(), "teste");
        let exhausted = ["crane", "slate", "audio", "pilot", "mound"]
            .iter()
            .fold(Game::new(), |g, w| play(g, w));

        for game in [mid, won, exhausted] {
            let old_keys: Vec<_> = game.board().slots().iter().map(Guess::key).collect();
            let fresh = game.restart();
            assert_eq!(fresh.status(), GameStatus::Empty);
            assert_eq!(fresh.current().value(), "");
            assert_eq!(fresh.current().number(), 0);
            assert_eq!(fresh.board().placed().count(), 0);
            assert!(
                fresh
                    .board()
                    .slots()
                    .iter()
                    .all(|slot| !old_keys.contains(&slot.key()))
            );
        }
    }
}
