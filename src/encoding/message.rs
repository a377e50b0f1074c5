// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! NDEF message codec.
//!
//! Two layers:
//!
//! - **Wire framing** ([`write_ndef_records`], [`read_ndef_records`]) turns
//!   [`NdefRecord`]s into bytes and back, handling the flags byte, short
//!   records and id lengths.
//! - **[`NdefMessageCodec`]** maps [`Record`]s onto wire records through a
//!   [`RecordRegistry`], recursing for payloads that embed messages.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndefcodec::core::{Record, UriRecord};
//! use ndefcodec::encoding::NdefMessageCodec;
//!
//! let codec = NdefMessageCodec::default();
//! let bytes = codec.encode(&[UriRecord::new("https://www.example.com").into()])?;
//! assert_eq!(bytes[0], 0xD1);
//!
//! let records = codec.decode(&bytes)?;
//! assert_eq!(records, vec![Record::Uri(UriRecord::new("https://www.example.com"))]);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use super::cursor::ByteCursor;
use super::options::CodecOptions;
use super::registry::{default_registry, RecordRegistry};
use super::writer::ByteWriter;
use crate::core::ndef::{
    FLAG_CF, FLAG_IL, FLAG_MB, FLAG_ME, FLAG_SR, MAX_FIELD_LENGTH, SHORT_RECORD_MAX,
};
use crate::core::{CodecError, NdefRecord, Record, Result, Tnf};

// =============================================================================
// Wire framing
// =============================================================================

/// Serialize wire records as one NDEF message.
///
/// MB is set on the first record and ME on the last. An empty slice is
/// written as a single Empty record.
pub fn write_ndef_records(records: &[NdefRecord]) -> Result<Vec<u8>> {
    if records.is_empty() {
        return write_ndef_records(&[NdefRecord::empty()]);
    }

    let capacity = records.iter().map(NdefRecord::encoded_len).sum();
    let mut writer = ByteWriter::with_capacity(capacity);
    let last = records.len() - 1;
    for (index, record) in records.iter().enumerate() {
        write_record(&mut writer, record, index == 0, index == last)?;
    }
    Ok(writer.finish())
}

fn write_record(
    writer: &mut ByteWriter,
    record: &NdefRecord,
    begin: bool,
    end: bool,
) -> Result<()> {
    if record.tnf == Tnf::Unchanged {
        return Err(CodecError::encoder("TNF 'unchanged' is only valid inside chunked records"));
    }

    let type_len = u8::try_from(record.record_type.len()).map_err(|_| {
        CodecError::payload_too_large("type", record.record_type.len(), MAX_FIELD_LENGTH)
    })?;
    let id_len = record
        .id
        .as_ref()
        .map(|id| {
            u8::try_from(id.len())
                .map_err(|_| CodecError::payload_too_large("id", id.len(), MAX_FIELD_LENGTH))
        })
        .transpose()?;
    let payload_len = u32::try_from(record.payload.len()).map_err(|_| {
        CodecError::payload_too_large("payload", record.payload.len(), u32::MAX as usize)
    })?;
    let short = record.payload.len() <= SHORT_RECORD_MAX;

    let mut flags = record.tnf as u8;
    if begin {
        flags |= FLAG_MB;
    }
    if end {
        flags |= FLAG_ME;
    }
    if short {
        flags |= FLAG_SR;
    }
    if id_len.is_some() {
        flags |= FLAG_IL;
    }

    writer.write_u8(flags);
    writer.write_u8(type_len);
    if short {
        writer.write_u8(payload_len as u8);
    } else {
        writer.write_u32_be(payload_len);
    }
    if let Some(len) = id_len {
        writer.write_u8(len);
    }
    writer.write_bytes(&record.record_type);
    if let Some(id) = &record.id {
        writer.write_bytes(id);
    }
    writer.write_bytes(&record.payload);
    Ok(())
}

/// Parse one NDEF message into wire records.
///
/// Reading stops after the record carrying ME. Chunked records are rejected.
pub fn read_ndef_records(data: &[u8], options: &CodecOptions) -> Result<Vec<NdefRecord>> {
    Ok(read_positioned_records(data, options)?
        .into_iter()
        .map(|(_, record)| record)
        .collect())
}

/// Like [`read_ndef_records`], pairing each record with its header offset.
fn read_positioned_records(
    data: &[u8],
    options: &CodecOptions,
) -> Result<Vec<(usize, NdefRecord)>> {
    if data.is_empty() {
        return Err(CodecError::malformed_message(0, "empty buffer"));
    }

    let mut cursor = ByteCursor::new(data);
    let mut records = Vec::new();
    loop {
        let offset = cursor.position();
        if cursor.is_at_end() {
            return Err(CodecError::malformed_message(
                offset,
                "message end (ME) flag missing before end of buffer",
            ));
        }

        let (record, flags) = read_record(&mut cursor, records.is_empty())
            .map_err(|e| e.into_malformed_message(offset))?;
        trace!(
            offset,
            tnf = record.tnf.as_str(),
            type_len = record.record_type.len(),
            payload_len = record.payload.len(),
            "read NDEF record"
        );
        records.push((offset, record));

        if flags & FLAG_ME != 0 {
            break;
        }
    }

    if !cursor.is_at_end() {
        let trailing = cursor.remaining();
        if options.reject_trailing_bytes {
            return Err(CodecError::malformed_message(
                cursor.position(),
                format!("{trailing} trailing bytes after message end"),
            ));
        }
        debug!(trailing, "ignoring bytes after NDEF message end");
    }

    Ok(records)
}

fn read_record(cursor: &mut ByteCursor<'_>, first: bool) -> Result<(NdefRecord, u8)> {
    let offset = cursor.position();
    let flags = cursor.read_u8()?;

    if first && flags & FLAG_MB == 0 {
        return Err(CodecError::malformed_message(
            offset,
            "first record lacks message begin (MB) flag",
        ));
    }
    if !first && flags & FLAG_MB != 0 {
        return Err(CodecError::malformed_message(
            offset,
            "message begin (MB) flag set on a record other than the first",
        ));
    }
    if flags & FLAG_CF != 0 {
        return Err(CodecError::malformed_message(
            offset,
            "chunked records (CF flag) are not supported",
        ));
    }

    let tnf = Tnf::try_from(flags & Tnf::MASK)
        .map_err(|_| CodecError::malformed_message(offset, "reserved TNF value 7"))?;
    if tnf == Tnf::Unchanged {
        return Err(CodecError::malformed_message(
            offset,
            "TNF 'unchanged' is only valid inside chunked records",
        ));
    }

    let type_len = cursor.read_u8()? as usize;
    let payload_len = if flags & FLAG_SR != 0 {
        cursor.read_u8()? as usize
    } else {
        cursor.read_u32_be()? as usize
    };
    let id_len = if flags & FLAG_IL != 0 {
        Some(cursor.read_u8()? as usize)
    } else {
        None
    };

    let record_type = cursor.read_bytes(type_len)?.to_vec();
    let id = match id_len {
        Some(len) => Some(cursor.read_bytes(len)?.to_vec()),
        None => None,
    };
    let payload = cursor.read_bytes(payload_len)?.to_vec();

    Ok((
        NdefRecord {
            tnf,
            record_type,
            id,
            payload,
        },
        flags,
    ))
}

// =============================================================================
// Message codec
// =============================================================================

/// Encodes and decodes [`Record`] sequences as NDEF messages.
///
/// The codec is cheap to clone; the registry and options are shared.
#[derive(Clone)]
pub struct NdefMessageCodec {
    registry: Arc<RecordRegistry>,
    options: Arc<CodecOptions>,
    depth: usize,
}

impl Default for NdefMessageCodec {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl std::fmt::Debug for NdefMessageCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NdefMessageCodec")
            .field("registry", &self.registry)
            .field("options", &self.options)
            .field("depth", &self.depth)
            .finish()
    }
}

impl NdefMessageCodec {
    /// Create a codec over `registry` with default options.
    pub fn new(registry: Arc<RecordRegistry>) -> Self {
        Self::with_options(registry, CodecOptions::default())
    }

    /// Create a codec over `registry` with explicit options.
    pub fn with_options(registry: Arc<RecordRegistry>, options: CodecOptions) -> Self {
        Self {
            registry,
            options: Arc::new(options),
            depth: 0,
        }
    }

    /// Get the registry used for record dispatch.
    pub fn registry(&self) -> &RecordRegistry {
        &self.registry
    }

    /// Get the codec options.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Nesting depth of this codec (0 for top level).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Codec for a message embedded in a payload one level down.
    pub fn nested(&self) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > self.options.max_nesting_depth {
            return Err(CodecError::malformed_message(
                0,
                format!(
                    "nested message depth {depth} exceeds limit of {}",
                    self.options.max_nesting_depth
                ),
            ));
        }
        Ok(Self {
            registry: Arc::clone(&self.registry),
            options: Arc::clone(&self.options),
            depth,
        })
    }

    /// Resolve the wire form of each record.
    pub fn to_ndef_records(&self, records: &[Record]) -> Result<Vec<NdefRecord>> {
        records
            .iter()
            .map(|record| self.registry.encode_record(record, self))
            .collect()
    }

    /// Encode records as one NDEF message.
    pub fn encode(&self, records: &[Record]) -> Result<Vec<u8>> {
        let ndef_records = self.to_ndef_records(records)?;
        let bytes = write_ndef_records(&ndef_records)?;
        debug!(
            records = ndef_records.len(),
            bytes = bytes.len(),
            depth = self.depth,
            "encoded NDEF message"
        );
        Ok(bytes)
    }

    /// Encode a message holding exactly one record.
    pub fn encode_single(&self, record: &Record) -> Result<Vec<u8>> {
        self.encode(std::slice::from_ref(record))
    }

    /// Decode an NDEF message.
    ///
    /// Framing errors are [`CodecError::MalformedMessage`]. A record whose
    /// payload fails to decode is reported as [`CodecError::InvalidRecord`]
    /// carrying the offset of its header.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<Record>> {
        let ndef_records = read_positioned_records(data, &self.options)?;
        let records = ndef_records
            .into_iter()
            .map(|(offset, ndef)| {
                self.registry
                    .decode_record(ndef, self)
                    .map_err(|e| CodecError::invalid_record(offset, e))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            records = records.len(),
            bytes = data.len(),
            depth = self.depth,
            "decoded NDEF message"
        );
        Ok(records)
    }
}
