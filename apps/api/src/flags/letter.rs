//! Letters and words: the only input shapes the flag system accepts.
//!
//! Free-form text is normalized at the boundary: every non-letter is dropped,
//! the rest is uppercased, and the result is capped at the caller's maximum.
//! An empty result is rejected here so nothing downstream ever sees an empty word.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive bounds on the caller-supplied maximum word length.
pub const MIN_MAX_LENGTH: usize = 2;
pub const MAX_MAX_LENGTH: usize = 10;

pub const ALPHABET: [Letter; 26] = {
    let mut letters = [Letter(b'A'); 26];
    let mut i = 0;
    while i < 26 {
        letters[i] = Letter(b'A' + i as u8);
        i += 1;
    }
    letters
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("word contains no letters")]
    Empty,

    #[error("max length {0} is outside 2..=10")]
    MaxLengthOutOfRange(usize),
}

/// One of the 26 uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Case-insensitive conversion. Anything outside A–Z / a–z is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (A = 0).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Letter::from_char(c).ok_or_else(|| serde::de::Error::custom(format!("not a letter: {c:?}")))
    }
}

/// A non-empty ordered sequence of letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(Vec<Letter>);

impl Word {
    /// Normalizes free-form input: letters only, uppercased, capped at `max_length`.
    pub fn parse(input: &str, max_length: usize) -> Result<Self, WordError> {
        let letters: Vec<Letter> = input
            .chars()
            .filter_map(Letter::from_char)
            .take(max_length)
            .collect();
        Self::from_letters(letters)
    }

    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, WordError> {
        if letters.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Word(letters))
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_lowercase(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    /// Progressive reveal: `C`, `CA`, `CAT`.
    pub fn prefixes(&self) -> Vec<String> {
        (1..=self.0.len())
            .map(|n| self.0[..n].iter().map(|l| l.as_char()).collect())
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Checks a caller-supplied maximum length against the accepted range.
pub fn validate_max_length(max_length: usize) -> Result<usize, WordError> {
    if (MIN_MAX_LENGTH..=MAX_MAX_LENGTH).contains(&max_length) {
        Ok(max_length)
    } else {
        Err(WordError::MaxLengthOutOfRange(max_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_is_case_insensitive() {
        assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
        assert_eq!(Letter::from_char('q').unwrap().as_char(), 'Q');
    }

    #[test]
    fn test_non_letters_are_rejected() {
        assert!(Letter::from_char('1').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('é').is_none());
    }

    #[test]
    fn test_alphabet_is_ordered() {
        assert_eq!(ALPHABET[0].as_char(), 'A');
        assert_eq!(ALPHABET[25].as_char(), 'Z');
        assert!(ALPHABET.iter().enumerate().all(|(i, l)| l.index() == i));
    }

    #[test]
    fn test_parse_filters_uppercases_and_caps() {
        let word = Word::parse("c a-t 42 dog", 5).unwrap();
        assert_eq!(word.to_string(), "CATDO");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_parse_empty_input_is_rejected() {
        assert_eq!(Word::parse("", 6), Err(WordError::Empty));
        assert_eq!(Word::parse("123 !!", 6), Err(WordError::Empty));
    }

    #[test]
    fn test_prefixes_reveal_one_letter_at_a_time() {
        let word = Word::parse("cat", 6).unwrap();
        assert_eq!(word.prefixes(), vec!["C", "CA", "CAT"]);
    }

    #[test]
    fn test_lowercase_for_filenames() {
        assert_eq!(Word::parse("FlAg", 6).unwrap().to_lowercase(), "flag");
    }

    #[test]
    fn test_max_length_range() {
        assert!(validate_max_length(2).is_ok());
        assert!(validate_max_length(10).is_ok());
        assert_eq!(validate_max_length(1), Err(WordError::MaxLengthOutOfRange(1)));
        assert_eq!(validate_max_length(11), Err(WordError::MaxLengthOutOfRange(11)));
    }

    #[test]
    fn test_letter_serializes_as_char() {
        let json = serde_json::to_string(&Letter::from_char('x').unwrap()).unwrap();
        assert_eq!(json, "\"X\"");
    }
}
