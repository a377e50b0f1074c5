// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Append-only byte writer, the counterpart of [`super::ByteCursor`].

use byteorder::{BigEndian, WriteBytesExt};

use crate::core::{CodecError, Result};

/// Default initial capacity for the writer buffer.
const DEFAULT_CAPACITY: usize = 32;

/// Growable output buffer with big-endian integer helpers.
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    /// Create a new writer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new writer with the specified initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Write a big-endian u16.
    pub fn write_u16_be(&mut self, value: u16) {
        // Writing into a Vec cannot fail.
        let _ = self.buffer.write_u16::<BigEndian>(value);
    }

    /// Write a big-endian u32.
    pub fn write_u32_be(&mut self, value: u32) {
        let _ = self.buffer.write_u32::<BigEndian>(value);
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Write a block preceded by a one-byte length.
    ///
    /// `field` names the block in the error raised when it exceeds 255 bytes.
    pub fn write_u8_prefixed(&mut self, field: &str, bytes: &[u8]) -> Result<()> {
        let len = u8::try_from(bytes.len())
            .map_err(|_| CodecError::payload_too_large(field, bytes.len(), u8::MAX as usize))?;
        self.write_u8(len);
        self.write_bytes(bytes);
        Ok(())
    }

    /// Get a reference to the written data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the written data.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_integers() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xD1);
        writer.write_u16_be(0x0102);
        writer.write_u32_be(256);
        assert_eq!(writer.finish(), vec![0xD1, 0x01, 0x02, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_write_u8_prefixed() {
        let mut writer = ByteWriter::new();
        writer.write_u8_prefixed("lang", b"en").unwrap();
        assert_eq!(writer.data(), &[0x02, b'e', b'n']);
    }

    #[test]
    fn test_write_u8_prefixed_too_long() {
        let mut writer = ByteWriter::new();
        let err = writer.write_u8_prefixed("carrier", &[0u8; 256]).unwrap_err();
        assert_eq!(err, CodecError::payload_too_large("carrier", 256, 255));
        assert!(writer.is_empty());
    }
}
