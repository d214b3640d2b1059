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

//! CLI command handler for the `dip` binary

use crate::codec::{MnemonicCodec, parse_ipv4};
use crate::config::Config;
use crate::dictionary::WordDictionary;
use crate::error::DipResult;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "dip")]
#[command(version, about = "Three-word mnemonics for IPv4 addresses")]
pub struct DipCommand {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Word list file, overrides the configured dictionary
    #[arg(short, long, global = true)]
    pub wordlist: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a mnemonic to an address
    Encode {
        /// Words separated by '.', '^', '_' or '-'
        mnemonic: String,
    },

    /// Convert an address to a mnemonic
    Decode {
        /// Dotted-quad IPv4 address
        address: String,

        /// Use the upper half of the word space; `--top=false` forces the
        /// lower half. Defaults to the configured value.
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        top: Option<bool>,
    },

    /// Show both mnemonics of an address
    Words {
        /// Dotted-quad IPv4 address
        address: String,
    },

    /// Load and validate the dictionary
    Check,
}

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report {
    Encode {
        mnemonic: String,
        address: Option<Ipv4Addr>,
    },
    Decode {
        address: Ipv4Addr,
        top: bool,
        mnemonic: String,
        indices: [u16; 3],
    },
    Words {
        address: Ipv4Addr,
        lower: String,
        upper: String,
    },
    Check {
        source: String,
        words: usize,
        first: String,
        last: String,
    },
}

impl Report {
    /// False when the command ran but produced no result
    pub fn is_success(&self) -> bool {
        !matches!(self, Report::Encode { address: None, .. })
    }

    /// Render as one line of text, or as JSON
    pub fn render(&self, json: bool) -> DipResult<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }

        Ok(match self {
            Report::Encode {
                address: Some(address),
                ..
            } => address.to_string(),
            Report::Encode { address: None, .. } => "no address".to_string(),
            Report::Decode { mnemonic, .. } => mnemonic.clone(),
            Report::Words { lower, upper, .. } => format!("{lower}\n{upper}"),
            Report::Check {
                source,
                words,
                first,
                last,
            } => format!("{source}: {words} words ({first} .. {last})"),
        })
    }
}

pub struct CliHandler {
    config: Config,
    dictionary: WordDictionary,
}

impl CliHandler {
    /// Load the dictionary named by `config`
    pub fn new(config: Config) -> DipResult<Self> {
        let dictionary = config.load_dictionary()?;
        Ok(Self::with_dictionary(config, dictionary))
    }

    pub fn with_dictionary(config: Config, dictionary: WordDictionary) -> Self {
        Self { config, dictionary }
    }

    pub fn execute(&self, command: Commands) -> DipResult<Report> {
        let codec = MnemonicCodec::new(&self.dictionary);

        match command {
            Commands::Encode { mnemonic } => {
                let address = codec.encode(&mnemonic);
                debug!("Encoded {:?} to {:?}", mnemonic, address);
                Ok(Report::Encode { mnemonic, address })
            }
            Commands::Decode { address, top } => {
                let address = parse_ipv4(&address)?;
                let top = top.unwrap_or(self.config.codec.top);
                let mnemonic = codec.decode_ipv4(address, top);
                Ok(Report::Decode {
                    address,
                    top,
                    indices: mnemonic.indices(),
                    mnemonic: mnemonic.to_string(),
                })
            }
            Commands::Words { address } => {
                let address = parse_ipv4(&address)?;
                Ok(Report::Words {
                    address,
                    lower: codec.decode_ipv4(address, false).to_string(),
                    upper: codec.decode_ipv4(address, true).to_string(),
                })
            }
            Commands::Check => Ok(Report::Check {
                source: self.source_name(),
                words: self.dictionary.len(),
                first: self.dictionary.iter().next().unwrap_or_default().to_string(),
                last: self.dictionary.iter().last().unwrap_or_default().to_string(),
            }),
        }
    }

    fn source_name(&self) -> String {
        match &self.config.dictionary.path {
            Some(path) => path.display().to_string(),
            None => "english (bundled)".to_string(),
        }
    }
}
