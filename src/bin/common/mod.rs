// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ndefcodec::{CodecOptions, NdefMessageCodec, RegistryBuilder};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install the log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load codec options from a TOML file, or the defaults.
pub fn load_options(path: Option<&Path>) -> Result<CodecOptions> {
    let Some(path) = path else {
        return Ok(CodecOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let options = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(?options, "loaded codec options");
    Ok(options)
}

/// Codec over the Well-Known registry plus the given external types.
pub fn build_codec(options: CodecOptions, external_types: &[String]) -> Result<NdefMessageCodec> {
    let registry = external_types
        .iter()
        .fold(RegistryBuilder::well_known(), |builder, name| {
            builder.external_type(name.as_str())
        })
        .build()?;
    Ok(NdefMessageCodec::with_options(Arc::new(registry), options))
}

/// Parse a hex string. Whitespace, `:` separators and a `0x` prefix are allowed.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex input '{input}'"))
}

/// Print `value` as pretty JSON, or run `human_fn`.
pub fn output_json_or<T>(json: bool, value: &T, human: impl FnOnce() -> Result<()>) -> Result<()>
where
    T: Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("D10101").unwrap(), vec![0xD1, 0x01, 0x01]);
        assert_eq!(parse_hex("0xd1 01:01").unwrap(), vec![0xD1, 0x01, 0x01]);
        assert!(parse_hex("D1Z").is_err());
        assert!(parse_hex("D10").is_err());
    }

    #[test]
    fn test_load_default_options() {
        let options = load_options(None).unwrap();
        assert_eq!(options, CodecOptions::default());
    }
}
