// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Abstract record variants.
//!
//! [`Record`] is what applications build and inspect. The registry maps each
//! variant onto an [`NdefRecord`] and back.

use super::ndef::NdefRecord;
use super::well_known::{
    ActionRecord, HandoverCarrierRecord, SmartPosterRecord, TextRecord, UriRecord,
};

/// Discriminant of a [`Record`], used as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Text,
    Uri,
    SmartPoster,
    Action,
    HandoverCarrier,
    External,
    Mime,
    AbsoluteUri,
    Empty,
    Unknown,
}

impl RecordKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Text => "Text",
            RecordKind::Uri => "Uri",
            RecordKind::SmartPoster => "SmartPoster",
            RecordKind::Action => "Action",
            RecordKind::HandoverCarrier => "HandoverCarrier",
            RecordKind::External => "External",
            RecordKind::Mime => "Mime",
            RecordKind::AbsoluteUri => "AbsoluteUri",
            RecordKind::Empty => "Empty",
            RecordKind::Unknown => "Unknown",
        }
    }

    /// Check if this kind belongs to the NFC Forum Well-Known family.
    pub fn is_well_known(&self) -> bool {
        matches!(
            self,
            RecordKind::Text
                | RecordKind::Uri
                | RecordKind::SmartPoster
                | RecordKind::Action
                | RecordKind::HandoverCarrier
        )
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An NDEF record in its decoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Text(TextRecord),
    Uri(UriRecord),
    SmartPoster(SmartPosterRecord),
    Action(ActionRecord),
    HandoverCarrier(HandoverCarrierRecord),
    External(ExternalTypeRecord),
    Mime(MimeRecord),
    AbsoluteUri(AbsoluteUriRecord),
    Empty(EmptyRecord),
    Unknown(UnknownRecord),
}

impl Record {
    /// Get the discriminant used for registry dispatch.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Text(_) => RecordKind::Text,
            Record::Uri(_) => RecordKind::Uri,
            Record::SmartPoster(_) => RecordKind::SmartPoster,
            Record::Action(_) => RecordKind::Action,
            Record::HandoverCarrier(_) => RecordKind::HandoverCarrier,
            Record::External(_) => RecordKind::External,
            Record::Mime(_) => RecordKind::Mime,
            Record::AbsoluteUri(_) => RecordKind::AbsoluteUri,
            Record::Empty(_) => RecordKind::Empty,
            Record::Unknown(_) => RecordKind::Unknown,
        }
    }

    /// Check if this record belongs to the Well-Known family.
    pub fn is_well_known(&self) -> bool {
        self.kind().is_well_known()
    }

    /// Get the record identifier, if any.
    pub fn id(&self) -> Option<&[u8]> {
        let id = match self {
            Record::Text(r) => &r.id,
            Record::Uri(r) => &r.id,
            Record::SmartPoster(r) => &r.id,
            Record::Action(r) => &r.id,
            Record::HandoverCarrier(r) => &r.id,
            Record::External(r) => &r.id,
            Record::Mime(r) => &r.id,
            Record::AbsoluteUri(r) => &r.id,
            Record::Empty(_) => return None,
            Record::Unknown(r) => &r.raw.id,
        };
        id.as_deref()
    }

    /// Replace the record identifier.
    ///
    /// Empty records cannot carry an identifier; the id is dropped for them.
    pub fn set_id(&mut self, id: Option<Vec<u8>>) {
        match self {
            Record::Text(r) => r.id = id,
            Record::Uri(r) => r.id = id,
            Record::SmartPoster(r) => r.id = id,
            Record::Action(r) => r.id = id,
            Record::HandoverCarrier(r) => r.id = id,
            Record::External(r) => r.id = id,
            Record::Mime(r) => r.id = id,
            Record::AbsoluteUri(r) => r.id = id,
            Record::Empty(_) => {}
            Record::Unknown(r) => r.raw.id = id,
        }
    }

    /// Builder-style variant of [`Record::set_id`].
    pub fn with_id(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.set_id(Some(id.into()));
        self
    }
}

macro_rules! impl_from_record {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Record {
                fn from(record: $ty) -> Self {
                    Record::$variant(record)
                }
            }
        )*
    };
}

impl_from_record! {
    Text => TextRecord,
    Uri => UriRecord,
    SmartPoster => SmartPosterRecord,
    Action => ActionRecord,
    HandoverCarrier => HandoverCarrierRecord,
    External => ExternalTypeRecord,
    Mime => MimeRecord,
    AbsoluteUri => AbsoluteUriRecord,
    Empty => EmptyRecord,
    Unknown => UnknownRecord,
}

/// NFC Forum external type record (`domain:type`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTypeRecord {
    /// Full external type name, e.g. `example.com:pos`
    pub domain_type: String,
    /// Opaque payload
    pub data: Vec<u8>,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl ExternalTypeRecord {
    /// Create a new external type record.
    pub fn new(domain_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            domain_type: domain_type.into(),
            data: data.into(),
            id: None,
        }
    }

    /// The domain part (before the first `:`).
    pub fn domain(&self) -> &str {
        self.domain_type
            .split_once(':')
            .map_or(self.domain_type.as_str(), |(domain, _)| domain)
    }

    /// The type part (after the first `:`), empty when there is no separator.
    pub fn type_name(&self) -> &str {
        self.domain_type
            .split_once(':')
            .map_or("", |(_, type_name)| type_name)
    }
}

/// Record whose type is an RFC 2046 media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeRecord {
    /// Media type, e.g. `text/vcard`
    pub content_type: String,
    /// Raw content
    pub content: Vec<u8>,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl MimeRecord {
    /// Create a new media-type record.
    pub fn new(content_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
            id: None,
        }
    }
}

/// Record whose type field is an absolute URI. The payload is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteUriRecord {
    /// The URI carried in the type field
    pub uri: String,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl AbsoluteUriRecord {
    /// Create a new absolute URI record.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            id: None,
        }
    }
}

/// The empty record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyRecord;

/// Record whose (TNF, type) combination is not registered.
///
/// The wire record is kept verbatim so re-encoding reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRecord {
    /// The record as read from the wire
    pub raw: NdefRecord,
}

impl UnknownRecord {
    /// Wrap a raw wire record.
    pub fn new(raw: NdefRecord) -> Self {
        Self { raw }
    }
}
