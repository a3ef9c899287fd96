//! Key symbol classification
//!
//! Hosts deliver key names as short strings ("a", "Backspace", "Enter").
//! Only single lowercase ASCII letters are typed; everything else that is
//! not Backspace or Enter is ignored.

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AppendLetter(char),
    DeleteLetter,
    Submit,
}

impl Action {
    /// Classify a key symbol
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Action;
    ///
    /// assert_eq!(Action::classify("q"), Some(Action::AppendLetter('q')));
    /// assert_eq!(Action::classify("Enter"), Some(Action::Submit));
    /// assert_eq!(Action::classify("Q"), None);
    /// ```
    #[must_use]
    pub fn classify(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_lowercase()
        {
            return Some(Self::AppendLetter(c));
        }

        match symbol {
            "Backspace" => Some(Self::DeleteLetter),
            "Enter" => Some(Self::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lowercase_letters() {
        for c in 'a'..='z' {
            assert_eq!(
                Action::classify(&c.to_string()),
                Some(Action::AppendLetter(c))
            );
        }
    }

    #[test]
    fn classify_control_keys() {
        assert_eq!(Action::classify("Backspace"), Some(Action::DeleteLetter));
        assert_eq!(Action::classify("Enter"), Some(Action::Submit));
    }

    #[test]
    fn classify_ignores_everything_else() {
        for symbol in ["A", "Z", "1", " ", "", "ab", "é", "Escape", "enter", "Shift", "Tab"] {
            assert_eq!(Action::classify(symbol), None, "symbol {symbol:?}");
        }
    }
}
