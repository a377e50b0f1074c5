// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte cursor for reading NDEF and TLV structures.
//!
//! All multi-byte integers in NDEF and Type 2 Tag TLVs are big endian.

use byteorder::{BigEndian, ByteOrder};

use crate::core::{CodecError, Result};

/// Bounds-checked read cursor over a byte buffer.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use ndefcodec::encoding::ByteCursor;
///
/// let data = [0x02, b'e', b'n', 0x00, 0x00, 0x01, 0x00];
/// let mut cursor = ByteCursor::new(&data);
/// assert_eq!(cursor.read_u8_prefixed()?, b"en");
/// assert_eq!(cursor.read_u32_be()?, 256);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Get the current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    fn ensure(&self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(CodecError::buffer_too_short(
                count,
                self.remaining(),
                self.offset,
            ));
        }
        Ok(())
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.data[self.offset])
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek_u8()?;
        self.offset += 1;
        Ok(value)
    }

    /// Read a big-endian u16 value.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let value = BigEndian::read_u16(&self.data[self.offset..]);
        self.offset += 2;
        Ok(value)
    }

    /// Read a big-endian u32 value.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let value = BigEndian::read_u32(&self.data[self.offset..]);
        self.offset += 4;
        Ok(value)
    }

    /// Read a byte slice.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        let start = self.offset;
        self.offset += count;
        Ok(&self.data[start..self.offset])
    }

    /// Read a block preceded by a one-byte length.
    pub fn read_u8_prefixed(&mut self) -> Result<&'a [u8]> {
        let start = self.offset;
        let len = self.read_u8()? as usize;
        self.read_bytes(len).inspect_err(|_| self.offset = start)
    }

    /// Consume and return everything that is left.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let start = self.offset.min(self.data.len());
        self.offset = self.data.len();
        &self.data[start..]
    }

    /// Skip bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.offset += count;
        Ok(())
    }
}

/// Extract `width` bits of `byte` starting at bit `lsb` (0 = least significant).
///
/// `lsb + width` must not exceed 8.
#[inline]
pub fn bit_range(byte: u8, lsb: u32, width: u32) -> u8 {
    debug_assert!(lsb + width <= 8, "bit range out of byte");
    let mask = ((1u16 << width) - 1) as u8;
    (byte >> lsb) & mask
}
