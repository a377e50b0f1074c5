// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # ndefcodec CLI
//!
//! Inspect and build NDEF messages and Type 2 Tag TLV areas from hex.
//!
//! ## Usage
//!
//! ```sh
//! # Decode a message
//! ndefcodec decode D1010E55036E66632D666F72756D2E6F7267
//!
//! # Build messages
//! ndefcodec encode uri https://www.example.com
//! ndefcodec encode text "Hello" --lang en
//! ndefcodec encode smart-poster https://www.example.com --title Example --action save
//!
//! # Decode a tag data area
//! ndefcodec tlv 0303D00000FE --json
//! ```

mod cmd;
mod common;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use cmd::{DecodeCmd, EncodeCmd, TlvCmd};
use common::{init_logging, load_options, Result};

/// ndefcodec - NFC Data Exchange Format toolkit
///
/// Works on hex strings; no tag reader is involved.
#[derive(Parser, Clone)]
#[command(name = "ndefcodec")]
#[command(about = "Encode and decode NDEF messages and Type 2 Tag TLVs", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Codec options file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode an NDEF message given as hex
    Decode(DecodeCmd),

    /// Encode a record as an NDEF message (uri, text, smart-poster)
    #[command(subcommand)]
    Encode(EncodeCmd),

    /// Decode a Type 2 Tag TLV area given as hex
    Tlv(TlvCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = load_options(cli.config.as_deref())?;

    match cli.command {
        Commands::Decode(cmd) => cmd.run(options),
        Commands::Encode(cmd) => cmd.run(options),
        Commands::Tlv(cmd) => cmd.run(options),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
