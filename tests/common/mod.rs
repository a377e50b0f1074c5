// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use ndefcodec::core::{
    Action, ActionRecord, MimeRecord, Record, SmartPosterRecord, TextEncoding, TextRecord,
    UriRecord,
};
use ndefcodec::{NdefMessageCodec, RegistryBuilder};

// ============================================================================
// Fixtures
// ============================================================================

/// Parse a hex literal, ignoring spaces.
pub fn hex(s: &str) -> Vec<u8> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    ::hex::decode(digits).expect("valid hex fixture")
}

/// `http://www.nfc-forum.org` as a single URI record message.
pub const URI_MESSAGE: &str = "D1 01 0E 55 01 6E 66 63 2D 66 6F 72 75 6D 2E 6F 72 67";

/// A Smart Poster with every optional field set.
pub fn full_smart_poster() -> SmartPosterRecord {
    SmartPosterRecord::new(UriRecord::new("https://www.nfc-forum.org"))
        .with_title(TextRecord::new("NFC Forum", "en"))
        .with_action(ActionRecord::new(Action::OpenForEditing))
}

/// One record of most kinds the default registry handles.
pub fn mixed_records() -> Vec<Record> {
    vec![
        TextRecord::new("hello", "en").into(),
        TextRecord::with_encoding("grüß dich", "de", TextEncoding::Utf16).into(),
        UriRecord::new("mailto:someone@example.com").into(),
        full_smart_poster().into(),
        ActionRecord::new(Action::SaveForLater).into(),
        Record::from(MimeRecord::new("text/vcard", b"BEGIN:VCARD".to_vec()))
            .with_id(b"card".to_vec()),
    ]
}

/// Codec whose registry also decodes the given external types.
pub fn codec_with_external(types: &[&str]) -> NdefMessageCodec {
    let builder = types
        .iter()
        .fold(RegistryBuilder::well_known(), |b, t| b.external_type(*t));
    NdefMessageCodec::new(Arc::new(builder.build().expect("registry builds")))
}
