// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # ndefcodec
//!
//! NFC Data Exchange Format (NDEF) codec and Type 2 Tag memory TLVs.
//!
//! The library turns byte buffers read from (or destined for) an NFC tag
//! into typed records and back. It does no tag I/O.
//!
//! ## Architecture
//!
//! - `core/` - record data model, wire record, error type
//! - `encoding/` - message framing, record type registry, Well-Known payload codecs
//! - `tlv/` - Lock Control / Memory Control TLVs and the TLV block stream
//!
//! ## Example: Encoding and decoding a message
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndefcodec::core::{Record, SmartPosterRecord, TextRecord, UriRecord};
//!
//! let poster = SmartPosterRecord::new(UriRecord::new("https://www.nfc-forum.org"))
//!     .with_title(TextRecord::new("NFC Forum", "en"));
//! let bytes = ndefcodec::encode_message(&[poster.clone().into()])?;
//!
//! let records = ndefcodec::decode_message(&bytes)?;
//! assert_eq!(records, vec![Record::SmartPoster(poster)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Reading a tag data area
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndefcodec::tlv::{decode_tlv_stream, find_ndef_message};
//!
//! let area = [0x03, 0x03, 0xD0, 0x00, 0x00, 0xFE];
//! let tlvs = decode_tlv_stream(&area)?;
//! let message = find_ndef_message(&tlvs).ok_or("no NDEF message")?;
//! assert_eq!(ndefcodec::decode_message(message)?.len(), 1);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, NdefRecord, Record, RecordKind, Result, Tnf};

// Encoding/decoding
pub mod encoding;

pub use encoding::{CodecOptions, NdefMessageCodec, RecordRegistry, RegistryBuilder};

// Tag memory TLVs
pub mod tlv;

pub use tlv::{decode_tlv, encode_tlv, LockControlTlv, MemoryControlTlv, MemoryTlv};

/// Encode records with the default registry and options.
pub fn encode_message(records: &[Record]) -> Result<Vec<u8>> {
    NdefMessageCodec::default().encode(records)
}

/// Decode a message with the default registry and options.
pub fn decode_message(data: &[u8]) -> Result<Vec<Record>> {
    NdefMessageCodec::default().decode(data)
}
