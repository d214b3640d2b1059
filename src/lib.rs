// Copyright 2024 Saorsa Labs Limited
//
// This software is dual-licensed under:
// - GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later)
// - Commercial License
//
// For AGPL-3.0 license, see LICENSE-AGPL-3.0
// For commercial licensing, contact: david@saorsalabs.com
//
// Unless required by applicable law or agreed to in writing, software
// distributed under these licenses is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.

// Enforce no unwrap/expect/panic in production code only (tests can use them)
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![cfg_attr(not(test), warn(clippy::expect_used))]
#![cfg_attr(not(test), warn(clippy::panic))]

//! # Saorsa DIP
//!
//! Human-pronounceable three-word names for IPv4 addresses.
//!
//! ## Features
//!
//! - 2048-word dictionary, 11 bits per word
//! - Separator- and case-tolerant mnemonic parsing
//! - Explicit upper/lower half selection when decoding
//! - Bundled English word list, or any validated list from disk
//!
//! ## Example
//!
//! ```rust
//! use saorsa_dip::{WordDictionary, decode_from_address, encode_to_address};
//! use std::net::Ipv4Addr;
//!
//! let dictionary = WordDictionary::english()?;
//!
//! let mnemonic = decode_from_address("192.168.0.1", false, &dictionary)?;
//! assert_eq!(mnemonic.to_string(), "gate-parade-ability");
//!
//! // Any of '.', '^', '_' or '-' separates words
//! let address = encode_to_address("Gate.Parade_ability", &dictionary);
//! assert_eq!(address, Some(Ipv4Addr::new(192, 168, 0, 1)));
//!
//! // The upper half yields a different mnemonic for the same address
//! let upper = decode_from_address("192.168.0.1", true, &dictionary)?;
//! assert_eq!(upper.to_ipv4(), Ipv4Addr::new(192, 168, 0, 1));
//! # Ok::<(), saorsa_dip::DipError>(())
//! ```

#![allow(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

/// Word list loading and lookup
pub mod dictionary;

/// Mnemonic <-> address conversion
pub mod codec;

/// Error types
pub mod error;

/// Configuration management system
pub mod config;

/// Command handling for the `dip` binary
pub mod cli;

pub use codec::{
    Mnemonic, MnemonicCodec, decode_from_address, decode_ipv4, encode_to_address, parse_ipv4,
};
pub use config::Config;
pub use dictionary::{DICTIONARY_SIZE, WordDictionary, WordIndex};
pub use error::{ConfigError, DipError, DipResult as Result, LoadError, ParseError};

/// Saorsa DIP version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
