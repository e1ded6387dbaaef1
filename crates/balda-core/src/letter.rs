//! Letter tokens placed in grid cells.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::CoreError;

/// A single letter token.
///
/// Letters are opaque: no alphabet is assumed, so any alphabetic Unicode
/// scalar value whose lowercase form is a single scalar value is accepted.
/// The stored value is always lower-cased.
///
/// # Examples
///
/// ```
/// use balda_core::Letter;
///
/// let letter = Letter::new('Л').unwrap();
/// assert_eq!(letter.as_char(), 'л');
///
/// assert!(Letter::new('7').is_err());
/// assert!(Letter::new('-').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Cyrillic small letter a, the first letter of the Russian alphabet.
    pub const CYRILLIC_A: Self = Self('а');

    /// Creates a letter, lower-casing the input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLetter`] if `c` is not alphabetic or does not
    /// lower-case to exactly one character.
    pub fn new(c: char) -> Result<Self, CoreError> {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.is_alphabetic() => Ok(Self(l)),
            _ => Err(CoreError::InvalidLetter(c)),
        }
    }

    /// Returns the underlying character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Splits a word into letters.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLetter`] for the first character that is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use balda_core::Letter;
    ///
    /// let letters = Letter::parse_word("Кот").unwrap();
    /// assert_eq!(letters.len(), 3);
    /// assert!(Letter::parse_word("к-т").is_err());
    /// ```
    pub fn parse_word(word: &str) -> Result<Vec<Self>, CoreError> {
        word.chars().map(Self::new).collect()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<char> for Letter {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl FromStr for Letter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            (Some(c), Some(_)) => Err(CoreError::InvalidLetter(c)),
            (None, _) => Err(CoreError::InvalidLetter('\0')),
        }
    }
}
