// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire-level NDEF record.

use super::Tnf;

/// Message Begin flag.
pub const FLAG_MB: u8 = 0x80;
/// Message End flag.
pub const FLAG_ME: u8 = 0x40;
/// Chunk Flag.
pub const FLAG_CF: u8 = 0x20;
/// Short Record flag (one-byte payload length).
pub const FLAG_SR: u8 = 0x10;
/// Id Length present flag.
pub const FLAG_IL: u8 = 0x08;

/// Largest payload that still fits the short record form.
pub const SHORT_RECORD_MAX: usize = 0xFF;

/// Largest type or id length representable on the wire.
pub const MAX_FIELD_LENGTH: usize = 0xFF;

/// One record as it appears on the wire.
///
/// The meaning of `record_type` depends on `tnf`. An `id` of `Some` is always
/// serialized with the IL flag, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NdefRecord {
    /// Type Name Format
    pub tnf: Tnf,
    /// Type bytes
    pub record_type: Vec<u8>,
    /// Optional record identifier
    pub id: Option<Vec<u8>>,
    /// Payload bytes
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Create a new wire record.
    pub fn new(
        tnf: Tnf,
        record_type: impl Into<Vec<u8>>,
        id: Option<Vec<u8>>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            tnf,
            record_type: record_type.into(),
            id,
            payload: payload.into(),
        }
    }

    /// The record used to represent an empty message.
    pub fn empty() -> Self {
        Self::new(Tnf::Empty, Vec::new(), None, Vec::new())
    }

    /// Whether this record uses the short record form.
    pub fn is_short(&self) -> bool {
        self.payload.len() <= SHORT_RECORD_MAX
    }

    /// Number of bytes this record occupies once serialized.
    pub fn encoded_len(&self) -> usize {
        let payload_len_field = if self.is_short() { 1 } else { 4 };
        let id_len = self.id.as_ref().map_or(0, |id| 1 + id.len());
        2 + payload_len_field + id_len + self.record_type.len() + self.payload.len()
    }
}
