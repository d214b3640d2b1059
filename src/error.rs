// Copyright (c) 2025 Saorsa Labs Limited

// This file is part of the Saorsa P2P network.

// Licensed under the AGPL-3.0 license:
// <https://www.gnu.org/licenses/agpl-3.0.html>

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Error handling for the mnemonic address codec
//!
//! Errors are split by the stage that produces them:
//!
//! - [`LoadError`]: the word dictionary could not be built. Fatal to any
//!   caller that needs a codec.
//! - [`ParseError`]: an address handed to the decoder was malformed or of
//!   the wrong family. Recoverable; the two kinds are kept apart so callers
//!   can say which one happened.
//! - [`ConfigError`]: the layered configuration could not be read or failed
//!   validation.
//!
//! [`DipError`] wraps all of them for code that crosses stage boundaries.
//!
//! A mnemonic that resolves to fewer than three dictionary words is *not* an
//! error. The encoder reports it as `None`.
//!
//! # Usage
//!
//! ```rust
//! use saorsa_dip::error::{DipError, ParseError};
//! use saorsa_dip::{WordDictionary, decode_from_address};
//!
//! let dictionary = WordDictionary::english()?;
//! match decode_from_address("::1", false, &dictionary) {
//!     Err(ParseError::UnsupportedFamily(_)) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok::<(), DipError>(())
//! ```

use std::borrow::Cow;
use std::io;
use thiserror::Error;

/// Core error type for the codec library
#[derive(Debug, Error)]
pub enum DipError {
    // Dictionary errors
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] LoadError),

    // Address parse errors
    #[error("Address error: {0}")]
    Address(#[from] ParseError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Reading a file from disk failed
    #[error("IO error for {path}: {source}")]
    Io {
        path: Cow<'static, str>,
        #[source]
        source: io::Error,
    },

    // Serialization of command output failed
    #[error("Serialization error: {0}")]
    Serialization(Cow<'static, str>),
}

/// Errors raised while building a [`WordDictionary`](crate::WordDictionary)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("word list is not the correct size: expected {expected}, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("word {0} is blank")]
    BlankWord(usize),

    #[error("word {0} duplicates an earlier entry")]
    DuplicateWord(usize),

    #[error("word list is not valid UTF-8: {0}")]
    InvalidUtf8(Cow<'static, str>),
}

/// Errors raised while turning address text into a mnemonic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unable to parse ip: {0}")]
    InvalidAddress(Cow<'static, str>),

    #[error("only IPv4 addresses are supported, got {0}")]
    UnsupportedFamily(Cow<'static, str>),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    #[error("Parse error: {0}")]
    ParseError(Cow<'static, str>),

    #[error("Validation failed: {0}")]
    ValidationFailed(Cow<'static, str>),

    #[error("IO error for {path}: {source}")]
    IoError {
        path: Cow<'static, str>,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for codec operations
pub type DipResult<T> = Result<T, DipError>;

impl DipError {
    /// Attach a path to an I/O failure
    pub fn io(path: impl Into<Cow<'static, str>>, source: io::Error) -> Self {
        DipError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error was caused by what the caller passed in rather
    /// than by the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DipError::Address(_) | DipError::Config(ConfigError::InvalidValue { .. })
        )
    }

    /// Log error with appropriate level
    pub fn log(&self) {
        use tracing::{error, warn};

        match self {
            DipError::Address(_) | DipError::Config(_) => warn!("{}", self),
            _ => error!("{}", self),
        }
    }
}

impl From<serde_json::Error> for DipError {
    fn from(err: serde_json::Error) -> Self {
        DipError::Serialization(err.to_string().into())
    }
}

impl From<std::str::Utf8Error> for LoadError {
    fn from(err: std::str::Utf8Error) -> Self {
        LoadError::InvalidUtf8(err.to_string().into())
    }
}
