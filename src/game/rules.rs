//! Submission rules and win detection

use super::state::{Board, CurrentGuess};
use crate::core::{SOLUTION, TRIES, WORD_SIZE};
use std::fmt;

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than `WORD_SIZE` letters typed
    Incomplete(usize),
    /// The guess sits in the last slot, which never accepts a submission
    FinalSlot,
    /// Same value as a guess already on the board
    Duplicate,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete(len) => {
                write!(f, "Guess must be exactly {WORD_SIZE} letters, got {len}")
            }
            Self::FinalSlot => write!(f, "The last slot cannot be submitted"),
            Self::Duplicate => write!(f, "Guess was already played"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Check whether `current` may be placed on `board`
///
/// The slot guard compares `number + 1` against `TRIES`, so the final slot
/// (index `TRIES - 1`) is never submittable.
///
/// # Errors
/// Returns the first rule the guess breaks, in order: length, slot, duplicate.
pub fn check_submission(current: &CurrentGuess, board: &Board) -> Result<(), Rejection> {
    let len = current.value().len();
    if len != WORD_SIZE {
        return Err(Rejection::Incomplete(len));
    }

    if current.number() + 1 == TRIES {
        return Err(Rejection::FinalSlot);
    }

    if board
        .placed()
        .any(|(_, word)| word.text() == current.value())
    {
        return Err(Rejection::Duplicate);
    }

    Ok(())
}

/// Whether `current` may be placed on `board`
#[must_use]
pub fn is_acceptable(current: &CurrentGuess, board: &Board) -> bool {
    check_submission(current, board).is_ok()
}

/// Whether the in-progress value matches the solution, ignoring case
#[must_use]
pub fn is_winner(current: &CurrentGuess) -> bool {
    current.value().to_lowercase() == SOLUTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn guess(value: &str, number: usize) -> CurrentGuess {
        CurrentGuess::new(value, number)
    }

    #[test]
    fn rejects_incomplete_guess() {
        let board = Board::new();
        assert_eq!(
            check_submission(&guess("abc", 0), &board),
            Err(Rejection::Incomplete(3))
        );
        assert!(!is_acceptable(&guess("", 0), &board));
    }

    #[test]
    fn accepts_full_unique_guess() {
        let board = Board::new();
        assert!(is_acceptable(&guess("crane", 0), &board));
        assert!(is_acceptable(&guess("crane", TRIES - 2), &board));
    }

    #[test]
    fn rejects_final_slot() {
        let board = Board::new();
        assert_eq!(
            check_submission(&guess("crane", TRIES - 1), &board),
            Err(Rejection::FinalSlot)
        );
    }

    #[test]
    fn rejects_duplicate_anywhere_on_board() {
        let board = Board::new()
            .with_placed(0, Word::new("crane").unwrap())
            .with_placed(1, Word::new("slate").unwrap());

        assert_eq!(
            check_submission(&guess("crane", 2), &board),
            Err(Rejection::Duplicate)
        );
        assert_eq!(
            check_submission(&guess("slate", 2), &board),
            Err(Rejection::Duplicate)
        );
        assert!(is_acceptable(&guess("audio", 2), &board));
    }

    #[test]
    fn winner_ignores_case() {
        assert!(is_winner(&guess("teste", 0)));
        assert!(is_winner(&guess("TESTE", 0)));
        assert!(!is_winner(&guess("testa", 0)));
        assert!(!is_winner(&guess("test", 0)));
    }

    #[test]
    fn rejection_display() {
        assert_eq!(
            Rejection::Incomplete(2).to_string(),
            "Guess must be exactly 5 letters, got 2"
        );
    }
}
