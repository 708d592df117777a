//! Substitution model - ciphertext, the cipher-to-plaintext mapping, and the
//! views derived from them. Holds no presentation state.

use crate::types::{DecodedCell, DecodedWord, Glyph, Letter, Substitution};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    #[error("substitution needs exactly one letter on each side")]
    InvalidInput,
    #[error("'{letter}' is already used for another letter.")]
    DuplicateTarget { letter: Letter, used_by: Letter },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CiphertextError {
    #[error("ciphertext is empty")]
    Empty,
    #[error("ciphertext contains no letters")]
    NoLetters,
}

// ============================================================================
// CIPHERTEXT
// ============================================================================

/// Whitespace-separated word tokens, uppercased. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    words: Vec<Vec<Glyph>>,
    letter_count: usize,
}

impl Ciphertext {
    pub fn parse(text: &str) -> Result<Self, CiphertextError> {
        if text.trim().is_empty() {
            return Err(CiphertextError::Empty);
        }

        let words: Vec<Vec<Glyph>> = text
            .split_whitespace()
            .map(|token| {
                token
                    .chars()
                    .map(|c| Letter::new(c).map_or(Glyph::Literal(c), Glyph::Cipher))
                    .collect()
            })
            .collect();

        let letter_count = words
            .iter()
            .flatten()
            .filter(|g| matches!(g, Glyph::Cipher(_)))
            .count();
        if letter_count == 0 {
            return Err(CiphertextError::NoLetters);
        }

        Ok(Self { words, letter_count })
    }

    pub fn words(&self) -> &[Vec<Glyph>] {
        &self.words
    }

    /// Cipher letters in reading order, punctuation skipped
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.words.iter().flatten().filter_map(|g| match g {
            Glyph::Cipher(l) => Some(*l),
            Glyph::Literal(_) => None,
        })
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }
}

// ============================================================================
// MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionModel {
    ciphertext: Ciphertext,
    mapping: [Option<Letter>; 26],
    frequencies: Vec<(Letter, usize)>,
}

impl SubstitutionModel {
    pub fn new(ciphertext: Ciphertext) -> Self {
        let frequencies = count_frequencies(&ciphertext);
        Self {
            ciphertext,
            mapping: [None; 26],
            frequencies,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, CiphertextError> {
        Ciphertext::parse(text).map(Self::new)
    }

    pub fn ciphertext(&self) -> &Ciphertext {
        &self.ciphertext
    }

    /// Validate raw text-field input and apply it. Rejections never touch the mapping.
    pub fn propose_substitution(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<Substitution, SubstitutionError> {
        let (Some(from), Some(to)) = (Letter::parse_single(from), Letter::parse_single(to)) else {
            return Err(SubstitutionError::InvalidInput);
        };
        self.substitute(from, to)
    }

    pub fn substitute(&mut self, from: Letter, to: Letter) -> Result<Substitution, SubstitutionError> {
        if let Some(used_by) = self.cipher_for(to).filter(|&holder| holder != from) {
            return Err(SubstitutionError::DuplicateTarget { letter: to, used_by });
        }

        let previous = self.mapping[from.index()].replace(to);
        debug!(%from, %to, ?previous, "Substitution applied");
        Ok(Substitution { from, to, previous })
    }

    pub fn mapping_for(&self, cipher: Letter) -> Option<Letter> {
        self.mapping[cipher.index()]
    }

    /// Cipher letter currently holding `plain`, if any
    pub fn cipher_for(&self, plain: Letter) -> Option<Letter> {
        self.mapping
            .iter()
            .position(|m| *m == Some(plain))
            .and_then(Letter::from_index)
    }

    /// Current (cipher, plain) pairs in cipher order
    pub fn mappings(&self) -> impl Iterator<Item = (Letter, Letter)> + '_ {
        Letter::all().filter_map(|c| self.mapping[c.index()].map(|p| (c, p)))
    }

    /// One cell per cipher letter position, grouped by word
    pub fn decode(&self) -> Vec<DecodedWord> {
        self.ciphertext
            .words()
            .iter()
            .map(|word| {
                word.iter()
                    .filter_map(|g| match g {
                        Glyph::Cipher(cipher) => Some(DecodedCell {
                            cipher: *cipher,
                            plain: self.mapping_for(*cipher),
                        }),
                        Glyph::Literal(_) => None,
                    })
                    .collect()
            })
            .collect()
    }

    /// Decoded words as display strings; punctuation passes through unchanged
    pub fn decoded_words(&self) -> Vec<String> {
        self.ciphertext
            .words()
            .iter()
            .map(|word| {
                word.iter()
                    .map(|g| match g {
                        Glyph::Cipher(cipher) => DecodedCell {
                            cipher: *cipher,
                            plain: self.mapping_for(*cipher),
                        }
                        .display_char(),
                        Glyph::Literal(c) => *c,
                    })
                    .collect()
            })
            .collect()
    }

    pub fn used_plaintext_letters(&self) -> BTreeSet<Letter> {
        self.mapping.iter().flatten().copied().collect()
    }

    /// Occurring letters by descending count, ties alphabetical
    pub fn frequency_table(&self) -> &[(Letter, usize)] {
        &self.frequencies
    }

    pub fn letter_count(&self) -> usize {
        self.ciphertext.letter_count()
    }

    /// Distinct cipher letters appearing in the ciphertext that have a mapping
    pub fn mapped_count(&self) -> usize {
        self.frequencies
            .iter()
            .filter(|(l, _)| self.mapping_for(*l).is_some())
            .count()
    }

    pub fn distinct_letter_count(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_solved(&self) -> bool {
        self.mapped_count() == self.distinct_letter_count()
    }
}

fn count_frequencies(ciphertext: &Ciphertext) -> Vec<(Letter, usize)> {
    let mut counts = [0usize; 26];
    for letter in ciphertext.letters() {
        counts[letter.index()] += 1;
    }

    let mut table: Vec<(Letter, usize)> = Letter::all()
        .map(|l| (l, counts[l.index()]))
        .filter(|(_, n)| *n > 0)
        .collect();
    // Stable sort keeps alphabetical order among equal counts
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CIPHERTEXT;

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn model(text: &str) -> SubstitutionModel {
        SubstitutionModel::from_text(text).unwrap()
    }

    fn assert_injective(m: &SubstitutionModel) {
        let values: Vec<Letter> = m.mappings().map(|(_, p)| p).collect();
        let unique: BTreeSet<Letter> = values.iter().copied().collect();
        assert_eq!(values.len(), unique.len(), "mapping is not injective");
    }

    #[test]
    fn rejects_empty_ciphertext() {
        assert_eq!(Ciphertext::parse(""), Err(CiphertextError::Empty));
        assert_eq!(Ciphertext::parse("  \n\t "), Err(CiphertextError::Empty));
    }

    #[test]
    fn rejects_ciphertext_without_letters() {
        assert_eq!(Ciphertext::parse("12 ?! ..."), Err(CiphertextError::NoLetters));
    }

    #[test]
    fn tokenizes_and_uppercases() {
        let c = Ciphertext::parse("ab,  Cd\nE").unwrap();
        assert_eq!(c.words().len(), 3);
        assert_eq!(c.words()[0], vec![Glyph::Cipher(l('A')), Glyph::Cipher(l('B')), Glyph::Literal(',')]);
        assert_eq!(c.letter_count(), 5);
        let letters: String = c.letters().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDE");
    }

    #[test]
    fn valid_substitution_sets_only_that_entry() {
        let mut m = model(DEFAULT_CIPHERTEXT);
        m.substitute(l('K'), l('E')).unwrap();
        let before = m.clone();

        let applied = m.propose_substitution("x", "o").unwrap();
        assert_eq!(applied, Substitution { from: l('X'), to: l('O'), previous: None });
        assert_eq!(m.mapping_for(l('X')), Some(l('O')));
        for c in Letter::all().filter(|c| *c != l('X')) {
            assert_eq!(m.mapping_for(c), before.mapping_for(c));
        }
    }

    #[test]
    fn repeating_a_substitution_is_idempotent() {
        let mut once = model("HELLO WORLD");
        once.propose_substitution("H", "J").unwrap();

        let mut twice = model("HELLO WORLD");
        twice.propose_substitution("H", "J").unwrap();
        let second = twice.propose_substitution("H", "J").unwrap();

        assert_eq!(second.previous, Some(l('J')));
        assert_eq!(once, twice);
    }

    #[test]
    fn overwrite_replaces_previous_target() {
        let mut m = model("ABC");
        m.substitute(l('A'), l('X')).unwrap();
        let applied = m.substitute(l('A'), l('Y')).unwrap();
        assert_eq!(applied.previous, Some(l('X')));
        assert_eq!(m.mapping_for(l('A')), Some(l('Y')));
        assert!(!m.used_plaintext_letters().contains(&l('X')));
    }

    #[test]
    fn duplicate_target_is_rejected_without_mutation() {
        let mut m = model("ABC CBA");
        m.substitute(l('A'), l('X')).unwrap();
        m.substitute(l('C'), l('Z')).unwrap();
        let before = m.clone();

        let err = m.propose_substitution("b", "x").unwrap_err();
        assert_eq!(err, SubstitutionError::DuplicateTarget { letter: l('X'), used_by: l('A') });
        assert_eq!(err.to_string(), "'X' is already used for another letter.");
        assert_eq!(m, before);

        // Overwriting an existing key onto a used target is rejected too
        assert!(m.substitute(l('C'), l('X')).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn malformed_input_is_rejected_without_mutation() {
        let mut m = model("ABC");
        m.substitute(l('A'), l('X')).unwrap();
        let before = m.clone();

        for (from, to) in [("", "X"), ("A", ""), ("AB", "X"), ("A", "XY"), ("1", "X"), ("A", "?")] {
            assert_eq!(m.propose_substitution(from, to), Err(SubstitutionError::InvalidInput));
        }
        assert_eq!(m, before);
    }

    #[test]
    fn mapping_stays_injective_across_sequences() {
        let mut m = model(DEFAULT_CIPHERTEXT);
        let steps = [
            ("K", "E"), ("X", "O"), ("S", "T"), ("U", "H"), ("K", "T"),
            ("X", "E"), ("K", "A"), ("X", "E"), ("M", "R"), ("T", "R"),
            ("T", "S"), ("M", "O"), ("H", "A"), ("Z", "N"), ("C", "D"),
        ];
        for (from, to) in steps {
            let _ = m.propose_substitution(from, to);
            assert_injective(&m);
        }
    }

    #[test]
    fn decode_covers_every_letter_position() {
        let mut m = model("FOO, BAR! 42 BAZ");
        m.substitute(l('O'), l('E')).unwrap();
        m.substitute(l('B'), l('T')).unwrap();

        let decoded = m.decode();
        assert_eq!(decoded.len(), 4);
        assert!(decoded[2].is_empty());
        let cells: Vec<DecodedCell> = decoded.into_iter().flatten().collect();
        assert_eq!(cells.len(), m.letter_count());
        for cell in cells {
            assert_eq!(cell.plain.is_none(), m.mapping_for(cell.cipher).is_none());
            assert_eq!(cell.display_char() == '_', cell.plain.is_none());
        }
        assert_eq!(m.decoded_words(), vec!["_EE,", "T__!", "42", "T__"]);
    }

    #[test]
    fn frequency_table_is_sorted_and_complete() {
        let m = model(DEFAULT_CIPHERTEXT);
        let table = m.frequency_table();

        let total: usize = table.iter().map(|(_, n)| n).sum();
        assert_eq!(total, m.letter_count());
        assert!(table.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(table[0], (l('K'), 9));
        assert_eq!(m.frequency_table(), table);
    }

    #[test]
    fn frequency_ties_break_alphabetically_and_ignore_case() {
        let m = model("cab BCA a-c");
        assert_eq!(
            m.frequency_table(),
            &[(l('A'), 3), (l('C'), 3), (l('B'), 2)]
        );
    }

    #[test]
    fn used_letters_follow_mapping_values() {
        let mut m = model("ABC");
        assert!(m.used_plaintext_letters().is_empty());
        m.substitute(l('A'), l('Q')).unwrap();
        m.substitute(l('B'), l('R')).unwrap();
        let used: Vec<char> = m.used_plaintext_letters().into_iter().map(Letter::as_char).collect();
        assert_eq!(used, vec!['Q', 'R']);
        assert_eq!(m.cipher_for(l('R')), Some(l('B')));
    }

    #[test]
    fn solved_once_every_occurring_letter_is_mapped() {
        let mut m = model("AB BA");
        assert_eq!(m.distinct_letter_count(), 2);
        assert!(!m.is_solved());
        m.substitute(l('A'), l('N')).unwrap();
        // Letters outside the ciphertext do not count toward progress
        m.substitute(l('Z'), l('Q')).unwrap();
        assert_eq!(m.mapped_count(), 1);
        m.substitute(l('B'), l('O')).unwrap();
        assert!(m.is_solved());
    }

    #[test]
    fn two_word_scenario() {
        let mut m = model("AB BA");

        m.propose_substitution("A", "X").unwrap();
        assert_eq!(m.decoded_words(), vec!["X_", "_X"]);

        let before = m.clone();
        assert!(matches!(
            m.propose_substitution("B", "X"),
            Err(SubstitutionError::DuplicateTarget { .. })
        ));
        assert_eq!(m, before);

        m.propose_substitution("B", "Y").unwrap();
        assert_eq!(m.decoded_words(), vec!["XY", "YX"]);
    }
}
