// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for ndefcodec.
//!
//! Provides error types for codec operations:
//! - Record type registration and dispatch
//! - NDEF message framing
//! - Well-Known payload validation
//! - Memory TLV parsing

use thiserror::Error;

/// Errors that can occur while encoding or decoding NDEF data and TLVs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// No registry entry exists for the record being encoded
    #[error("Unsupported record type: '{kind}'")]
    UnsupportedRecordType {
        /// Record kind name
        kind: String,
    },

    /// Record could not be encoded because a field violates a wire limit
    #[error("Encoder error: {message}")]
    EncoderError {
        /// Error message
        message: String,
    },

    /// A length field cannot represent the data it describes
    #[error("Payload too large: {field} length {length} exceeds maximum of {max}")]
    PayloadTooLarge {
        /// Which length field overflowed
        field: String,
        /// Actual length
        length: usize,
        /// Maximum representable length
        max: usize,
    },

    /// NDEF message framing is invalid
    #[error("Malformed NDEF message at offset {offset}: {reason}")]
    MalformedMessage {
        /// Byte offset of the offending record or field
        offset: usize,
        /// What was wrong
        reason: String,
    },

    /// Buffer too short for requested read
    #[error("Buffer too short: requested {requested} bytes at position {cursor_pos}, but only {available} bytes available")]
    BufferTooShort {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when error occurred
        cursor_pos: usize,
    },

    /// Text record charset other than UTF-8 or UTF-16BE
    #[error("Unsupported encoding: '{charset}', only UTF-8 and UTF-16BE are allowed")]
    UnsupportedEncoding {
        /// Requested charset name
        charset: String,
    },

    /// Handover carrier type format outside the defined range
    #[error("Invalid carrier type format: {value}")]
    InvalidCarrierTypeFormat {
        /// Raw 3-bit value
        value: u8,
    },

    /// Handover carrier type does not fit the one-byte length field
    #[error("Carrier type too large: {length} bytes exceeds 255 byte limit")]
    CarrierTypeTooLarge {
        /// Encoded carrier type length
        length: usize,
    },

    /// Byte value does not map onto an enumeration
    #[error("Invalid value {value} for {name}")]
    InvalidEnumValue {
        /// Enumeration name
        name: String,
        /// Offending value
        value: u8,
    },

    /// Composite record is missing a required sub-record
    #[error("{record} is missing mandatory field '{field}'")]
    MissingMandatoryField {
        /// Record being decoded
        record: String,
        /// Missing field
        field: String,
    },

    /// Payload content is undecodable
    #[error("Malformed {record} payload: {reason}")]
    MalformedPayload {
        /// Record being decoded
        record: String,
        /// What was wrong
        reason: String,
    },

    /// TLV block is truncated or carries an unknown tag
    #[error("Malformed TLV: {reason}")]
    MalformedTlv {
        /// What was wrong
        reason: String,
    },

    /// A record inside a message failed to decode
    #[error("Invalid record at offset {offset}: {error}")]
    InvalidRecord {
        /// Byte offset of the record header within its message
        offset: usize,
        /// Payload-level failure
        error: Box<CodecError>,
    },

    /// Two configs registered for the same record kind in a strict registry
    #[error("Duplicate registration for record kind '{kind}'")]
    DuplicateRegistration {
        /// Record kind name
        kind: String,
    },
}

impl CodecError {
    /// Create an unsupported record type error.
    pub fn unsupported_record_type(kind: impl Into<String>) -> Self {
        CodecError::UnsupportedRecordType { kind: kind.into() }
    }

    /// Create an encoder error.
    pub fn encoder(message: impl Into<String>) -> Self {
        CodecError::EncoderError {
            message: message.into(),
        }
    }

    /// Create a payload too large error.
    pub fn payload_too_large(field: impl Into<String>, length: usize, max: usize) -> Self {
        CodecError::PayloadTooLarge {
            field: field.into(),
            length,
            max,
        }
    }

    /// Create a malformed message error.
    pub fn malformed_message(offset: usize, reason: impl Into<String>) -> Self {
        CodecError::MalformedMessage {
            offset,
            reason: reason.into(),
        }
    }

    /// Create a buffer too short error.
    pub fn buffer_too_short(requested: usize, available: usize, cursor_pos: usize) -> Self {
        CodecError::BufferTooShort {
            requested,
            available,
            cursor_pos,
        }
    }

    /// Create an unsupported encoding error.
    pub fn unsupported_encoding(charset: impl Into<String>) -> Self {
        CodecError::UnsupportedEncoding {
            charset: charset.into(),
        }
    }

    /// Create an invalid enum value error.
    pub fn invalid_enum_value(name: impl Into<String>, value: u8) -> Self {
        CodecError::InvalidEnumValue {
            name: name.into(),
            value,
        }
    }

    /// Create a missing mandatory field error.
    pub fn missing_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        CodecError::MissingMandatoryField {
            record: record.into(),
            field: field.into(),
        }
    }

    /// Create a malformed payload error.
    pub fn malformed_payload(record: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::MalformedPayload {
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed TLV error.
    pub fn malformed_tlv(reason: impl Into<String>) -> Self {
        CodecError::MalformedTlv {
            reason: reason.into(),
        }
    }

    /// Tag a record decoding failure with the offset of its record.
    pub fn invalid_record(offset: usize, error: CodecError) -> Self {
        CodecError::InvalidRecord {
            offset,
            error: Box::new(error),
        }
    }

    /// The innermost error, looking through [`CodecError::InvalidRecord`] wrappers.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            CodecError::InvalidRecord { error, .. } => error.root_cause(),
            other => other,
        }
    }

    /// Re-frame a cursor-level truncation as a message framing error.
    ///
    /// Other errors pass through unchanged.
    pub fn into_malformed_message(self, offset: usize) -> Self {
        match self {
            CodecError::BufferTooShort {
                requested,
                available,
                cursor_pos,
            } => CodecError::malformed_message(
                offset,
                format!(
                    "truncated record: expected {requested} bytes at position {cursor_pos}, {available} available"
                ),
            ),
            other => other,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedRecordType { kind } => vec![("kind", kind.clone())],
            CodecError::EncoderError { message } => vec![("message", message.clone())],
            CodecError::PayloadTooLarge { field, length, max } => vec![
                ("field", field.clone()),
                ("length", length.to_string()),
                ("max", max.to_string()),
            ],
            CodecError::MalformedMessage { offset, reason } => {
                vec![("offset", offset.to_string()), ("reason", reason.clone())]
            }
            CodecError::BufferTooShort {
                requested,
                available,
                cursor_pos,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("cursor", cursor_pos.to_string()),
            ],
            CodecError::UnsupportedEncoding { charset } => vec![("charset", charset.clone())],
            CodecError::InvalidCarrierTypeFormat { value } => vec![("value", value.to_string())],
            CodecError::CarrierTypeTooLarge { length } => vec![("length", length.to_string())],
            CodecError::InvalidEnumValue { name, value } => {
                vec![("name", name.clone()), ("value", value.to_string())]
            }
            CodecError::MissingMandatoryField { record, field } => {
                vec![("record", record.clone()), ("field", field.clone())]
            }
            CodecError::MalformedPayload { record, reason } => {
                vec![("record", record.clone()), ("reason", reason.clone())]
            }
            CodecError::MalformedTlv { reason } => vec![("reason", reason.clone())],
            CodecError::InvalidRecord { offset, error } => {
                vec![("offset", offset.to_string()), ("error", error.to_string())]
            }
            CodecError::DuplicateRegistration { kind } => vec![("kind", kind.clone())],
        }
    }
}

/// Result type for ndefcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
