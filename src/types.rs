//! Common types and data structures

use std::fmt;

/// An uppercase ASCII letter, A through Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Accepts either case; anything outside A-Z is rejected.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self(c.to_ascii_uppercase() as u8))
    }

    /// Parse a text field holding exactly one letter (surrounding whitespace ignored)
    pub fn parse_single(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < 26).then(|| Self(b'A' + index as u8))
    }

    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One character of a ciphertext token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Cipher(Letter),
    /// Punctuation and digits, displayed as-is and never substituted
    Literal(char),
}

/// A cipher letter paired with its current plaintext, if mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedCell {
    pub cipher: Letter,
    pub plain: Option<Letter>,
}

impl DecodedCell {
    pub fn display_char(&self) -> char {
        self.plain
            .map(Letter::as_char)
            .unwrap_or(crate::constants::PLACEHOLDER)
    }
}

pub type DecodedWord = Vec<DecodedCell>;

/// A successful mapping change, with the target it replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub from: Letter,
    pub to: Letter,
    pub previous: Option<Letter>,
}
