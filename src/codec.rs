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

//! # Mnemonic Codec
//!
//! Converts between IPv4 addresses and three-word mnemonics. Each word
//! carries 11 bits, so three words span 2^33 values, twice the IPv4 space.
//!
//! ```text
//!  bit 32      22 21      11 10       0
//!     [   word 1  ][  word 2  ][  word 3  ]
//! ```
//!
//! Decoding takes an explicit `top` flag that sets bit 32, choosing between
//! the lower and upper half of the word space. Only the first word sees that
//! bit. Encoding reduces modulo 2^32, so the flag is gone once a mnemonic
//! becomes an address again: both halves encode to the same address, and
//! nothing in the mnemonic tells you which half produced it.

use crate::dictionary::{WORD_BITS, WordDictionary, WordIndex};
use crate::error::ParseError;
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use tracing::trace;

/// Characters that delimit words in a mnemonic. Runs of them count once.
pub const SEPARATORS: [char; 4] = ['.', '^', '_', '-'];

/// Number of words in a mnemonic
pub const MNEMONIC_WORDS: usize = 3;

const TOP_BIT: u64 = 1 << 32;

/// A decoded three-word mnemonic
///
/// Only the codec builds one, so the words always match the indices for
/// the dictionary that produced them. It serializes for output but is not
/// deserializable; parse mnemonic text with [`encode_to_address`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Mnemonic {
    indices: [u16; MNEMONIC_WORDS],
    words: [String; MNEMONIC_WORDS],
}

impl Mnemonic {
    fn from_indices(indices: [WordIndex; MNEMONIC_WORDS], dictionary: &WordDictionary) -> Self {
        Self {
            indices: indices.map(WordIndex::value),
            words: indices.map(|i| dictionary.word_at(i).to_string()),
        }
    }

    /// Dictionary positions of the three words
    pub fn indices(&self) -> [u16; MNEMONIC_WORDS] {
        self.indices
    }

    pub fn words(&self) -> &[String; MNEMONIC_WORDS] {
        &self.words
    }

    /// The address this mnemonic encodes to. Always the 32-bit address that
    /// was decoded, whichever `top` value was used.
    pub fn to_ipv4(&self) -> Ipv4Addr {
        encode_indices(self.indices.map(|i| WordIndex::from_bits(u64::from(i))))
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join("-"))
    }
}

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Split mnemonic text into tokens, dropping empty ones
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Resolve the first three tokens found in the dictionary
///
/// Unknown tokens are skipped, and tokens after the third match are never
/// looked at. Returns `None` if fewer than three tokens resolve.
pub fn resolve_indices(
    text: &str,
    dictionary: &WordDictionary,
) -> Option<[WordIndex; MNEMONIC_WORDS]> {
    let mut found = [WordIndex::MIN; MNEMONIC_WORDS];
    let mut count = 0;

    for token in tokenize(text) {
        let lowered = token.to_lowercase();
        match dictionary.index_of(&lowered) {
            Some(index) => {
                found[count] = index;
                count += 1;
                if count == MNEMONIC_WORDS {
                    return Some(found);
                }
            }
            None => trace!("Skipping unknown mnemonic token: {}", token),
        }
    }

    None
}

/// Pack three word indices into an address
///
/// The first index lands on bits 22..=32; bit 32 is dropped by the
/// modulo-2^32 reduction.
pub fn encode_indices(indices: [WordIndex; MNEMONIC_WORDS]) -> Ipv4Addr {
    let [i0, i1, i2] = indices.map(u64::from);
    let packed = (i0 << (2 * WORD_BITS)) | (i1 << WORD_BITS) | i2;
    Ipv4Addr::from((packed % TOP_BIT) as u32)
}

/// Split an address into three word indices
///
/// With `top` set the address is read as `address + 2^32`, which changes
/// only the first index.
pub fn split_address(address: Ipv4Addr, top: bool) -> [WordIndex; MNEMONIC_WORDS] {
    let mut acc = u64::from(u32::from(address));
    if top {
        acc += TOP_BIT;
    }

    [
        WordIndex::from_bits(acc >> (2 * WORD_BITS)),
        WordIndex::from_bits(acc >> WORD_BITS),
        WordIndex::from_bits(acc),
    ]
}

/// Convert mnemonic text to an address
///
/// Tokens are separated by runs of `.`, `^`, `_` or `-` and matched without
/// regard to case. `None` means fewer than three tokens were dictionary
/// words; that is an ordinary outcome, not a failure.
pub fn encode_to_address(text: &str, dictionary: &WordDictionary) -> Option<Ipv4Addr> {
    resolve_indices(text, dictionary).map(encode_indices)
}

/// Convert an already parsed address to its mnemonic
pub fn decode_ipv4(address: Ipv4Addr, top: bool, dictionary: &WordDictionary) -> Mnemonic {
    Mnemonic::from_indices(split_address(address, top), dictionary)
}

/// Convert dotted-quad text to a mnemonic
///
/// `top` selects the upper half of the word space and must be supplied by
/// the caller. It cannot be recovered later: re-encoding the mnemonic gives
/// back the same address for either value.
pub fn decode_from_address(
    address: &str,
    top: bool,
    dictionary: &WordDictionary,
) -> Result<Mnemonic, ParseError> {
    Ok(decode_ipv4(parse_ipv4(address)?, top, dictionary))
}

/// Parse address text, telling malformed input apart from IPv6
///
/// IPv4-mapped IPv6 text (`::ffff:a.b.c.d`) yields the embedded IPv4
/// address. Surrounding whitespace is ignored.
pub fn parse_ipv4(address: &str) -> Result<Ipv4Addr, ParseError> {
    let trimmed = address.trim();
    match trimmed.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => Ok(v4),
        Ok(IpAddr::V6(v6)) => v6
            .to_ipv4_mapped()
            .ok_or_else(|| ParseError::UnsupportedFamily(trimmed.to_string().into())),
        Err(_) => Err(ParseError::InvalidAddress(trimmed.to_string().into())),
    }
}

/// Codec bound to one dictionary
#[derive(Debug, Clone, Copy)]
pub struct MnemonicCodec<'a> {
    dictionary: &'a WordDictionary,
}

impl<'a> MnemonicCodec<'a> {
    pub fn new(dictionary: &'a WordDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'a WordDictionary {
        self.dictionary
    }

    pub fn encode(&self, text: &str) -> Option<Ipv4Addr> {
        encode_to_address(text, self.dictionary)
    }

    pub fn decode(&self, address: &str, top: bool) -> Result<Mnemonic, ParseError> {
        decode_from_address(address, top, self.dictionary)
    }

    pub fn decode_ipv4(&self, address: Ipv4Addr, top: bool) -> Mnemonic {
        decode_ipv4(address, top, self.dictionary)
    }
}
