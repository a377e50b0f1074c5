// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! NDEF encoding/decoding.
//!
//! - [`cursor`] / [`writer`] - bounds-checked byte reading and writing
//! - [`message`] - NDEF message framing and the [`NdefMessageCodec`]
//! - [`registry`] - record type registry for payload codec dispatch
//! - [`wkt`] - Well-Known record payload codecs
//! - [`options`] - codec options

pub mod cursor;
pub mod message;
pub mod options;
pub mod registry;
pub mod wkt;
pub mod writer;

pub use cursor::{bit_range, ByteCursor};
pub use message::{read_ndef_records, write_ndef_records, NdefMessageCodec};
pub use options::CodecOptions;
pub use registry::{
    default_registry, PayloadDecoder, PayloadEncoder, RecordRegistry, RegistryBuilder,
    WellKnownRecordConfig,
};
pub use writer::ByteWriter;
