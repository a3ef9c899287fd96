//! Per-letter feedback for a placed guess
//!
//! Each position is scored independently against the solution:
//! - Correct: same letter at the same position
//! - Present: letter occurs anywhere in the solution
//! - Absent: letter does not occur in the solution
//!
//! Presence is a plain membership test. Letter counts are not consumed, so a
//! letter repeated in the guess is marked present at every misplaced position
//! even when the solution holds it only once.

use super::{WORD_SIZE, Word};

/// Feedback for a single letter, ordered from least to most informative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square for this feedback
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for every position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([Feedback; WORD_SIZE]);

impl Score {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_SIZE]);

    /// Score `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Score, Word};
    ///
    /// let guess = Word::new("aabbb").unwrap();
    /// let solution = Word::new("abxyz").unwrap();
    /// let score = Score::calculate(&guess, &solution);
    ///
    /// // The second 'a' is still present: letter counts are not consumed
    /// assert_eq!(score.feedback()[1], Feedback::Present);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_SIZE];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *slot = if letter == solution.char_at(i) {
                Feedback::Correct
            } else if solution.has_letter(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(result)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_SIZE] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count positions with the given feedback
    #[must_use]
    pub fn count(self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().copied().map(Feedback::to_emoji).collect()
    }
}
