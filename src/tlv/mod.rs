// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type 2 Tag TLV structures.
//!
//! - [`nibble`] - 4-bit field packing
//! - [`memory`] - Lock Control and Memory Control TLV values
//! - [`stream`] - the TLV block sequence of a tag data area

pub mod memory;
pub mod nibble;
pub mod stream;

pub use memory::{LockControlTlv, MemoryArea, MemoryControlTlv};
pub use stream::{decode_tlv_stream, encode_tlv_stream, find_ndef_message, Tlv};

use crate::core::{CodecError, Result};

/// Length of a memory TLV value.
pub const MEMORY_TLV_LEN: usize = 3;

/// A fixed-width, nibble-packed memory descriptor.
pub trait MemoryTlv: Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Build from the 3 value bytes. Every bit pattern is accepted.
    fn from_bytes(bytes: [u8; MEMORY_TLV_LEN]) -> Self;

    /// Serialize to the 3 value bytes.
    fn to_bytes(&self) -> [u8; MEMORY_TLV_LEN];

    /// The described memory area.
    fn area(&self) -> &MemoryArea;
}

/// Encode a memory TLV value.
pub fn encode_tlv<T: MemoryTlv>(tlv: &T) -> [u8; MEMORY_TLV_LEN] {
    tlv.to_bytes()
}

/// Decode a memory TLV value from the first 3 bytes of `bytes`.
///
/// ```
/// use ndefcodec::tlv::{decode_tlv, LockControlTlv, MemoryTlv};
///
/// let lock: LockControlTlv = decode_tlv(&[0x23, 0x30, 0x34]).unwrap();
/// assert_eq!(lock.area().position(), 35);
/// ```
pub fn decode_tlv<T: MemoryTlv>(bytes: &[u8]) -> Result<T> {
    let value: [u8; MEMORY_TLV_LEN] = bytes
        .get(..MEMORY_TLV_LEN)
        .and_then(|head| head.try_into().ok())
        .ok_or_else(|| {
            CodecError::malformed_tlv(format!(
                "{} needs {MEMORY_TLV_LEN} bytes, got {}",
                T::NAME,
                bytes.len()
            ))
        })?;
    Ok(T::from_bytes(value))
}
