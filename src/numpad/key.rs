//! Keys on the numeric pad

use super::validator::DECIMAL_SEPARATOR;

/// A single key press on the numeric pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumpadKey {
    /// Digit 0-9
    Digit(u8),
    /// Decimal separator
    Decimal,
    /// Remove the last character
    Backspace,
    /// Reset to empty
    Clear,
}

impl NumpadKey {
    /// Map a typed character to a key. Both `.` and `,` act as the separator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' | ',' => Some(Self::Decimal),
            _ => None,
        }
    }

    /// Compute the candidate text produced by pressing this key on `current`.
    ///
    /// The candidate is not validated here; a second separator yields a
    /// candidate the partial check rejects. A digit above 9 is not a key on
    /// the pad and leaves the text as it is.
    pub fn apply(self, current: &str) -> String {
        let mut candidate = current.to_string();
        match self {
            Self::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    candidate.push(c);
                }
            }
            Self::Decimal => candidate.push(DECIMAL_SEPARATOR),
            Self::Backspace => {
                candidate.pop();
            }
            Self::Clear => candidate.clear(),
        }
        candidate
    }
}
