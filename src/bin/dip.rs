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

use anyhow::{Context, Result};
use clap::Parser;
use saorsa_dip::cli::{CliHandler, DipCommand};
use saorsa_dip::config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = DipCommand::parse();

    let mut config = Config::load_with_path(args.config.as_ref())
        .context("Failed to load configuration")?;
    if let Some(path) = args.wordlist {
        config.dictionary.path = Some(path);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let handler = CliHandler::new(config).context("Failed to load word dictionary")?;

    let report = match handler.execute(args.command) {
        Ok(report) => report,
        Err(e) if e.is_input_error() => {
            e.log();
            eprintln!("error: {e}");
            return Ok(ExitCode::from(2));
        }
        Err(e) => {
            e.log();
            return Err(e.into());
        }
    };

    println!("{}", report.render(args.json)?);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
