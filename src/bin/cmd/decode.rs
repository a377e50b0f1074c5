// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode command - print the records of an NDEF message.

use clap::Args;
use serde_json::Value;

use super::view::{print_record, record_value};
use crate::common::{build_codec, output_json_or, parse_hex, Result};
use ndefcodec::CodecOptions;

/// Decode an NDEF message.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Message bytes as hex
    #[arg(value_name = "HEX")]
    hex: String,

    /// External type to decode instead of keeping raw (repeatable)
    #[arg(long = "external", value_name = "DOMAIN:TYPE")]
    external: Vec<String>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

impl DecodeCmd {
    pub fn run(self, options: CodecOptions) -> Result<()> {
        let bytes = parse_hex(&self.hex)?;
        let codec = build_codec(options, &self.external)?;
        let records = codec.decode(&bytes)?;
        let values: Vec<Value> = records.iter().map(record_value).collect();

        output_json_or(self.json, &values, || {
            println!("=== NDEF message ({} bytes, {} records) ===", bytes.len(), values.len());
            for (index, value) in values.iter().enumerate() {
                print_record(index, value, 0);
            }
            Ok(())
        })
    }
}
