// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! 4-bit field packing.

use crate::core::{CodecError, Result};

/// Largest value a nibble can hold.
pub const NIBBLE_MAX: u8 = 0x0F;

/// High nibble of `byte`.
#[inline]
pub fn most_significant_nibble(byte: u8) -> u8 {
    byte >> 4
}

/// Low nibble of `byte`.
#[inline]
pub fn least_significant_nibble(byte: u8) -> u8 {
    byte & NIBBLE_MAX
}

/// Pack two nibbles into one byte.
///
/// Fails with [`CodecError::EncoderError`] if either value exceeds 15.
///
/// ```
/// use ndefcodec::tlv::nibble::encode_nibbles;
///
/// assert_eq!(encode_nibbles(0x2, 0x3).unwrap(), 0x23);
/// assert!(encode_nibbles(0x10, 0x0).is_err());
/// ```
pub fn encode_nibbles(high: u8, low: u8) -> Result<u8> {
    check_nibble("high nibble", high)?;
    check_nibble("low nibble", low)?;
    Ok((high << 4) | low)
}

/// Replace the high nibble of `byte`.
pub fn set_most_significant_nibble(byte: u8, value: u8) -> Result<u8> {
    encode_nibbles(value, least_significant_nibble(byte))
}

/// Replace the low nibble of `byte`.
pub fn set_least_significant_nibble(byte: u8, value: u8) -> Result<u8> {
    encode_nibbles(most_significant_nibble(byte), value)
}

/// Check that `value` fits in four bits.
pub fn check_nibble(field: &str, value: u8) -> Result<()> {
    if value > NIBBLE_MAX {
        return Err(CodecError::encoder(format!(
            "{field} value {value} does not fit in 4 bits"
        )));
    }
    Ok(())
}
