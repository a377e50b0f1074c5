// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! TLV blocks of a Type 2 Tag data area.
//!
//! Each block is a tag byte, a length and a value. Null and Terminator have
//! neither length nor value. Lengths below `0xFF` take one byte; longer
//! values use `0xFF` followed by a big-endian u16.

use tracing::trace;

use super::memory::{LockControlTlv, MemoryControlTlv};
use super::{decode_tlv, encode_tlv, MemoryTlv, MEMORY_TLV_LEN};
use crate::core::{CodecError, Result};
use crate::encoding::cursor::ByteCursor;
use crate::encoding::writer::ByteWriter;

pub const TAG_NULL: u8 = 0x00;
pub const TAG_LOCK_CONTROL: u8 = 0x01;
pub const TAG_MEMORY_CONTROL: u8 = 0x02;
pub const TAG_NDEF_MESSAGE: u8 = 0x03;
pub const TAG_PROPRIETARY: u8 = 0xFD;
pub const TAG_TERMINATOR: u8 = 0xFE;

/// Marker for the 3-byte length form.
const LONG_LENGTH: u8 = 0xFF;

/// Longest value a TLV block can carry.
pub const MAX_TLV_VALUE_LEN: usize = 0xFFFE;

/// One TLV block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tlv {
    Null,
    LockControl(LockControlTlv),
    MemoryControl(MemoryControlTlv),
    /// Raw NDEF message bytes
    NdefMessage(Vec<u8>),
    Proprietary(Vec<u8>),
    Terminator,
}

impl Tlv {
    /// Tag byte of this block.
    pub fn tag(&self) -> u8 {
        match self {
            Tlv::Null => TAG_NULL,
            Tlv::LockControl(_) => TAG_LOCK_CONTROL,
            Tlv::MemoryControl(_) => TAG_MEMORY_CONTROL,
            Tlv::NdefMessage(_) => TAG_NDEF_MESSAGE,
            Tlv::Proprietary(_) => TAG_PROPRIETARY,
            Tlv::Terminator => TAG_TERMINATOR,
        }
    }

    /// The NDEF message bytes, if this is an NDEF Message block.
    pub fn ndef_message(&self) -> Option<&[u8]> {
        match self {
            Tlv::NdefMessage(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// First NDEF message in a decoded TLV sequence.
pub fn find_ndef_message(tlvs: &[Tlv]) -> Option<&[u8]> {
    tlvs.iter().find_map(Tlv::ndef_message)
}

/// Decode TLV blocks until a Terminator or the end of `data`.
pub fn decode_tlv_stream(data: &[u8]) -> Result<Vec<Tlv>> {
    let mut cursor = ByteCursor::new(data);
    let mut tlvs = Vec::new();

    while !cursor.is_at_end() {
        let offset = cursor.position();
        let tag = cursor.read_u8()?;
        let tlv = match tag {
            TAG_NULL => Tlv::Null,
            TAG_TERMINATOR => Tlv::Terminator,
            TAG_LOCK_CONTROL | TAG_MEMORY_CONTROL | TAG_NDEF_MESSAGE | TAG_PROPRIETARY => {
                let value = read_value(&mut cursor).map_err(|e| truncated(tag, offset, e))?;
                match tag {
                    TAG_LOCK_CONTROL => Tlv::LockControl(memory_value(value)?),
                    TAG_MEMORY_CONTROL => Tlv::MemoryControl(memory_value(value)?),
                    TAG_NDEF_MESSAGE => Tlv::NdefMessage(value.to_vec()),
                    _ => Tlv::Proprietary(value.to_vec()),
                }
            }
            other => {
                return Err(CodecError::malformed_tlv(format!(
                    "unknown tag 0x{other:02X} at offset {offset}"
                )))
            }
        };
        trace!(offset, tag, "read TLV block");

        let done = tlv == Tlv::Terminator;
        tlvs.push(tlv);
        if done {
            break;
        }
    }

    Ok(tlvs)
}

fn read_value<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8]> {
    let len = match cursor.read_u8()? {
        LONG_LENGTH => cursor.read_u16_be()? as usize,
        n => n as usize,
    };
    cursor.read_bytes(len)
}

fn truncated(tag: u8, offset: usize, err: CodecError) -> CodecError {
    CodecError::malformed_tlv(format!("truncated block 0x{tag:02X} at offset {offset}: {err}"))
}

fn memory_value<T: MemoryTlv>(value: &[u8]) -> Result<T> {
    if value.len() != MEMORY_TLV_LEN {
        return Err(CodecError::malformed_tlv(format!(
            "{} value must be {MEMORY_TLV_LEN} bytes, got {}",
            T::NAME,
            value.len()
        )));
    }
    decode_tlv(value)
}

/// Encode TLV blocks. No Terminator is appended.
pub fn encode_tlv_stream(tlvs: &[Tlv]) -> Result<Vec<u8>> {
    let mut writer = ByteWriter::new();
    for tlv in tlvs {
        writer.write_u8(tlv.tag());
        match tlv {
            Tlv::Null | Tlv::Terminator => {}
            Tlv::LockControl(lock) => write_value(&mut writer, &encode_tlv(lock))?,
            Tlv::MemoryControl(memory) => write_value(&mut writer, &encode_tlv(memory))?,
            Tlv::NdefMessage(bytes) | Tlv::Proprietary(bytes) => write_value(&mut writer, bytes)?,
        }
    }
    Ok(writer.finish())
}

fn write_value(writer: &mut ByteWriter, value: &[u8]) -> Result<()> {
    if value.len() > MAX_TLV_VALUE_LEN {
        return Err(CodecError::payload_too_large(
            "TLV value",
            value.len(),
            MAX_TLV_VALUE_LEN,
        ));
    }
    if value.len() < LONG_LENGTH as usize {
        writer.write_u8(value.len() as u8);
    } else {
        writer.write_u8(LONG_LENGTH);
        writer.write_u16_be(value.len() as u16);
    }
    writer.write_bytes(value);
    Ok(())
}
