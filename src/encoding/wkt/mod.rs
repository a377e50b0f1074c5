// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Payload codecs for the NFC Forum Well-Known record types.
//!
//! - [`text`] - Text (`T`)
//! - [`uri`] - URI (`U`) with the prefix abbreviation table
//! - [`action`] - Action (`act`)
//! - [`smart_poster`] - Smart Poster (`Sp`), a nested message
//! - [`handover`] - Handover Carrier (`Hc`)

pub mod action;
pub mod handover;
pub mod smart_poster;
pub mod text;
pub mod uri;

pub use action::ActionCodec;
pub use handover::HandoverCarrierCodec;
pub use smart_poster::SmartPosterCodec;
pub use text::TextCodec;
pub use uri::{UriCodec, URI_PREFIXES};

use crate::core::{CodecError, Record, RecordKind};

/// Error for a payload codec handed a record of another kind.
pub(crate) fn wrong_kind(expected: RecordKind, record: &Record) -> CodecError {
    CodecError::encoder(format!(
        "{expected} payload codec cannot encode a {} record",
        record.kind()
    ))
}
