// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Lock Control and Memory Control TLV values.
//!
//! Both share a 3-byte layout:
//!
//! ```text
//! byte 0 : page address (high nibble) | byte offset (low nibble)
//! byte 1 : size, 0 means 256
//! byte 2 : reserved or bytes locked per lock bit (high nibble)
//!          | bytes per page exponent (low nibble)
//! ```

use super::nibble::{
    check_nibble, encode_nibbles, least_significant_nibble, most_significant_nibble,
};
use super::{MemoryTlv, MEMORY_TLV_LEN};
use crate::core::{CodecError, Result};

/// Largest size a memory TLV can describe.
pub const MAX_AREA_SIZE: u16 = 256;

/// A region of tag memory described by a memory TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryArea {
    page_address: u8,
    byte_offset: u8,
    size: u16,
    bytes_per_page: u8,
}

impl MemoryArea {
    /// Create a memory area.
    ///
    /// `page_address`, `byte_offset` and `bytes_per_page` are nibbles;
    /// `size` must be in `1..=256`.
    pub fn new(page_address: u8, byte_offset: u8, size: u16, bytes_per_page: u8) -> Result<Self> {
        check_nibble("page address", page_address)?;
        check_nibble("byte offset", byte_offset)?;
        check_nibble("bytes per page", bytes_per_page)?;
        if size == 0 || size > MAX_AREA_SIZE {
            return Err(CodecError::encoder(format!(
                "size {size} outside 1..={MAX_AREA_SIZE}"
            )));
        }
        Ok(Self {
            page_address,
            byte_offset,
            size,
            bytes_per_page,
        })
    }

    pub fn page_address(&self) -> u8 {
        self.page_address
    }

    pub fn byte_offset(&self) -> u8 {
        self.byte_offset
    }

    /// Size in the unit of the enclosing TLV (bytes, or bits for lock control).
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Page size exponent: a page holds `2^bytes_per_page` bytes.
    pub fn bytes_per_page(&self) -> u8 {
        self.bytes_per_page
    }

    /// Absolute byte position of the area.
    pub fn position(&self) -> usize {
        ((self.page_address as usize) << self.bytes_per_page) + self.byte_offset as usize
    }

    fn from_bytes(bytes: [u8; MEMORY_TLV_LEN]) -> Self {
        let size = match bytes[1] {
            0 => MAX_AREA_SIZE,
            n => n as u16,
        };
        Self {
            page_address: most_significant_nibble(bytes[0]),
            byte_offset: least_significant_nibble(bytes[0]),
            size,
            bytes_per_page: least_significant_nibble(bytes[2]),
        }
    }

    /// Wire bytes with `high` in the upper nibble of byte 2.
    fn to_bytes(self, high: u8) -> [u8; MEMORY_TLV_LEN] {
        // Fields were range checked at construction.
        [
            (self.page_address << 4) | self.byte_offset,
            (self.size % 256) as u8,
            (high << 4) | self.bytes_per_page,
        ]
    }
}

/// Memory Control TLV value: a reserved memory area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryControlTlv {
    pub area: MemoryArea,
}

impl MemoryControlTlv {
    pub fn new(area: MemoryArea) -> Self {
        Self { area }
    }

    /// Size of the reserved area in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.area.size as usize
    }
}

impl MemoryTlv for MemoryControlTlv {
    const NAME: &'static str = "MemoryControl";

    fn from_bytes(bytes: [u8; MEMORY_TLV_LEN]) -> Self {
        Self {
            area: MemoryArea::from_bytes(bytes),
        }
    }

    fn to_bytes(&self) -> [u8; MEMORY_TLV_LEN] {
        self.area.to_bytes(0)
    }

    fn area(&self) -> &MemoryArea {
        &self.area
    }
}

/// Lock Control TLV value: the dynamic lock bits area.
///
/// The area size counts lock bits, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockControlTlv {
    pub area: MemoryArea,
    bytes_locked_per_lock_bit: u8,
}

impl LockControlTlv {
    /// Create a lock control TLV. `bytes_locked_per_lock_bit` is a nibble.
    pub fn new(area: MemoryArea, bytes_locked_per_lock_bit: u8) -> Result<Self> {
        encode_nibbles(bytes_locked_per_lock_bit, area.bytes_per_page)?;
        Ok(Self {
            area,
            bytes_locked_per_lock_bit,
        })
    }

    pub fn bytes_locked_per_lock_bit(&self) -> u8 {
        self.bytes_locked_per_lock_bit
    }

    /// Number of lock bits.
    pub fn size_in_bits(&self) -> u16 {
        self.area.size
    }

    /// Bytes needed to hold the lock bits, rounded up.
    pub fn size_in_bytes(&self) -> usize {
        (self.area.size as usize).div_ceil(8)
    }
}

impl MemoryTlv for LockControlTlv {
    const NAME: &'static str = "LockControl";

    fn from_bytes(bytes: [u8; MEMORY_TLV_LEN]) -> Self {
        Self {
            area: MemoryArea::from_bytes(bytes),
            bytes_locked_per_lock_bit: most_significant_nibble(bytes[2]),
        }
    }

    fn to_bytes(&self) -> [u8; MEMORY_TLV_LEN] {
        self.area.to_bytes(self.bytes_locked_per_lock_bit)
    }

    fn area(&self) -> &MemoryArea {
        &self.area
    }
}
