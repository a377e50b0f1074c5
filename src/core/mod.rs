// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout ndefcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling for all codec operations
//! - [`Record`] - Abstract record variants
//! - [`NdefRecord`] - Wire-level record unit
//! - [`Tnf`] - Type Name Format identifier

pub mod error;
pub mod ndef;
pub mod record;
pub mod well_known;

pub use error::{CodecError, Result};
pub use ndef::NdefRecord;
pub use record::{
    AbsoluteUriRecord, EmptyRecord, ExternalTypeRecord, MimeRecord, Record, RecordKind,
    UnknownRecord,
};
pub use well_known::{
    Action, ActionRecord, CarrierType, CarrierTypeFormat, HandoverCarrierRecord,
    SmartPosterRecord, TextEncoding, TextRecord, UriRecord,
};

/// Type Name Format, the 3-bit field that classifies a record's type bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tnf {
    /// Record carries no type, id or payload
    Empty = 0x00,
    /// NFC Forum well-known type (RTD)
    WellKnown = 0x01,
    /// Media type as defined in RFC 2046
    Mime = 0x02,
    /// Absolute URI as defined in RFC 3986
    AbsoluteUri = 0x03,
    /// NFC Forum external type
    External = 0x04,
    /// Unknown payload type
    Unknown = 0x05,
    /// Continuation of a chunked payload
    Unchanged = 0x06,
}

impl Tnf {
    /// Mask selecting the TNF bits of an NDEF flags byte.
    pub const MASK: u8 = 0x07;

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tnf::Empty => "empty",
            Tnf::WellKnown => "well-known",
            Tnf::Mime => "mime",
            Tnf::AbsoluteUri => "absolute-uri",
            Tnf::External => "external",
            Tnf::Unknown => "unknown",
            Tnf::Unchanged => "unchanged",
        }
    }
}

impl TryFrom<u8> for Tnf {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Tnf::Empty),
            0x01 => Ok(Tnf::WellKnown),
            0x02 => Ok(Tnf::Mime),
            0x03 => Ok(Tnf::AbsoluteUri),
            0x04 => Ok(Tnf::External),
            0x05 => Ok(Tnf::Unknown),
            0x06 => Ok(Tnf::Unchanged),
            _ => Err(CodecError::invalid_enum_value("Tnf", value)),
        }
    }
}

impl std::fmt::Display for Tnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tnf_from_u8() {
        assert_eq!(Tnf::try_from(0x01).unwrap(), Tnf::WellKnown);
        assert_eq!(Tnf::try_from(0x04).unwrap(), Tnf::External);
        assert_eq!(Tnf::try_from(0x06).unwrap(), Tnf::Unchanged);
    }

    #[test]
    fn test_tnf_reserved_value() {
        let err = Tnf::try_from(0x07).unwrap_err();
        assert_eq!(err, CodecError::invalid_enum_value("Tnf", 7));
    }

    #[test]
    fn test_tnf_as_str() {
        assert_eq!(Tnf::WellKnown.as_str(), "well-known");
        assert_eq!(Tnf::AbsoluteUri.to_string(), "absolute-uri");
    }
}
