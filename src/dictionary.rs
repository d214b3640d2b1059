// Copyright 2024 Saorsa Labs Limited
//
// This software is dual-licensed under:
// - GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later)
// - Commercial License
//
// For AGPL-3.0 license, see LICENSE-AGPL-3.0
// For commercial licensing, contact: saorsalabs@gmail.com
//
// Unless required by applicable law or agreed to in writing, software
// distributed under these licenses is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.

//! # Word Dictionary
//!
//! A fixed vocabulary of exactly 2048 unique, non-empty words. Each word
//! stands for an 11-bit value, its position in the list.
//!
//! ## Source format
//!
//! One word per line. Lines end in `\n` or `\r\n`, and a single terminator
//! after the last word is ignored, so a file written by any ordinary editor
//! loads. A second trailing terminator is an empty 2049th line and is
//! rejected as [`LoadError::WrongSize`]. Words are stored verbatim: no
//! trimming and no case folding. Lookups are case-sensitive.

use crate::error::{DipError, DipResult, LoadError};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Number of words a dictionary must hold
pub const DICTIONARY_SIZE: usize = 2048;

/// Bits of information carried by a single word
pub const WORD_BITS: u32 = 11;

/// Mask selecting one word's worth of bits
pub const WORD_MASK: u64 = (1 << WORD_BITS) - 1;

static ENGLISH: &str = include_str!("../wordlists/english.txt");

/// Position of a word in the dictionary, always below [`DICTIONARY_SIZE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordIndex(u16);

impl WordIndex {
    /// Smallest index
    pub const MIN: WordIndex = WordIndex(0);
    /// Largest index
    pub const MAX: WordIndex = WordIndex((DICTIONARY_SIZE - 1) as u16);

    /// Returns `None` when `value` does not fit in 11 bits
    pub fn new(value: u16) -> Option<Self> {
        (usize::from(value) < DICTIONARY_SIZE).then_some(Self(value))
    }

    /// Keep the low 11 bits of `bits`
    pub fn from_bits(bits: u64) -> Self {
        Self((bits & WORD_MASK) as u16)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl From<WordIndex> for u64 {
    fn from(index: WordIndex) -> Self {
        u64::from(index.0)
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated, immutable word list with its reverse index
#[derive(Clone, PartialEq, Eq)]
pub struct WordDictionary {
    words: Vec<String>,
    positions: HashMap<String, WordIndex>,
}

impl WordDictionary {
    /// Build a dictionary from newline-separated text
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        Self::from_words(text.lines())
    }

    /// Build a dictionary from raw file contents, which must be UTF-8
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::from_text(std::str::from_utf8(bytes)?)
    }

    /// Build a dictionary from an already split list of words
    ///
    /// Checks run in order: size, then blank words, then duplicates. The
    /// first failure is returned.
    pub fn from_words<I, S>(words: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.len() != DICTIONARY_SIZE {
            return Err(LoadError::WrongSize {
                expected: DICTIONARY_SIZE,
                actual: words.len(),
            });
        }

        if let Some(blank) = words.iter().position(String::is_empty) {
            return Err(LoadError::BlankWord(blank));
        }

        let mut positions = HashMap::with_capacity(DICTIONARY_SIZE);
        for (i, word) in words.iter().enumerate() {
            // i < DICTIONARY_SIZE, checked above
            let index = WordIndex(i as u16);
            if positions.insert(word.clone(), index).is_some() {
                return Err(LoadError::DuplicateWord(i));
            }
        }

        debug!("Loaded word dictionary with {} entries", words.len());
        Ok(Self { words, positions })
    }

    /// Read and validate a dictionary file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DipResult<Self> {
        let path = path.as_ref();
        info!("Loading word dictionary from: {}", path.display());

        let bytes =
            fs::read(path).map_err(|e| DipError::io(path.to_string_lossy().into_owned(), e))?;
        Ok(Self::from_bytes(&bytes)?)
    }

    /// The bundled English list (`abandon` .. `zoo`)
    pub fn english() -> Result<Self, LoadError> {
        Self::from_text(ENGLISH)
    }

    /// Word stored at `index`
    pub fn word_at(&self, index: WordIndex) -> &str {
        &self.words[index.as_usize()]
    }

    /// Position of `word`, matched exactly
    pub fn index_of(&self, word: &str) -> Option<WordIndex> {
        self.positions.get(word).copied()
    }

    /// True if `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Debug for WordDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordDictionary")
            .field("len", &self.words.len())
            .field("first", &self.words.first())
            .field("last", &self.words.last())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn synthetic_words() -> Vec<String> {
        (0..DICTIONARY_SIZE).map(|i| format!("w{i:04}")).collect()
    }

    #[test]
    fn test_word_index_bounds() {
        assert_eq!(WordIndex::new(0), Some(WordIndex::MIN));
        assert_eq!(WordIndex::new(2047), Some(WordIndex::MAX));
        assert_eq!(WordIndex::new(2048), None);
        assert_eq!(WordIndex::from_bits(0x1_0000_0801).value(), 1);
        assert_eq!(WordIndex::from_bits(u64::MAX), WordIndex::MAX);
    }

    #[test]
    fn test_english_dictionary() {
        let dict = WordDictionary::english().unwrap();
        assert_eq!(dict.len(), DICTIONARY_SIZE);
        assert_eq!(dict.word_at(WordIndex::MIN), "abandon");
        assert_eq!(dict.word_at(WordIndex::MAX), "zoo");
        assert_eq!(dict.index_of("ability"), WordIndex::new(1));
        assert_eq!(dict.index_of("Zoo"), None);
    }

    #[test]
    fn test_lookup_round_trip() {
        let dict = WordDictionary::from_words(synthetic_words()).unwrap();
        for (i, word) in dict.iter().enumerate() {
            let index = dict.index_of(word).unwrap();
            assert_eq!(usize::from(index.value()), i);
            assert_eq!(dict.word_at(index), word);
        }
    }

    #[test]
    fn test_single_trailing_newline_is_stripped() {
        let text = synthetic_words().join("\n") + "\n";
        let dict = WordDictionary::from_text(&text).unwrap();
        assert_eq!(dict.len(), DICTIONARY_SIZE);
        assert_eq!(dict.word_at(WordIndex::MAX), "w2047");
    }

    #[test]
    fn test_no_trailing_newline() {
        let text = synthetic_words().join("\n");
        assert!(WordDictionary::from_text(&text).is_ok());
    }

    #[test]
    fn test_double_trailing_newline_is_rejected() {
        let text = synthetic_words().join("\n") + "\n\n";
        assert_eq!(
            WordDictionary::from_text(&text),
            Err(LoadError::WrongSize {
                expected: DICTIONARY_SIZE,
                actual: DICTIONARY_SIZE + 1,
            })
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = synthetic_words().join("\r\n") + "\r\n";
        let dict = WordDictionary::from_text(&text).unwrap();
        assert_eq!(dict.word_at(WordIndex::MIN), "w0000");
        assert!(dict.contains("w0001"));
    }

    #[test]
    fn test_wrong_size() {
        let mut words = synthetic_words();
        words.pop();
        assert_eq!(
            WordDictionary::from_words(words),
            Err(LoadError::WrongSize {
                expected: DICTIONARY_SIZE,
                actual: DICTIONARY_SIZE - 1,
            })
        );
    }

    #[test]
    fn test_blank_word() {
        let mut words = synthetic_words();
        words[17] = String::new();
        assert_eq!(
            WordDictionary::from_words(words),
            Err(LoadError::BlankWord(17))
        );
    }

    #[test]
    fn test_duplicate_word_reports_second_occurrence() {
        let mut words = synthetic_words();
        words[900] = words[12].clone();
        assert_eq!(
            WordDictionary::from_words(words),
            Err(LoadError::DuplicateWord(900))
        );
    }

    #[test]
    fn test_blank_checked_before_duplicates() {
        let mut words = synthetic_words();
        words[5] = words[4].clone();
        words[1000] = String::new();
        assert_eq!(
            WordDictionary::from_words(words),
            Err(LoadError::BlankWord(1000))
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let result = WordDictionary::from_bytes(&[0x61, 0xff, 0x0a]);
        assert!(matches!(result, Err(LoadError::InvalidUtf8(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", synthetic_words().join("\n")).unwrap();

        let dict = WordDictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.len(), DICTIONARY_SIZE);
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordDictionary::load_from_file("/nonexistent/dip_wordlist.txt");
        assert!(matches!(result, Err(DipError::Io { .. })));
    }
}
