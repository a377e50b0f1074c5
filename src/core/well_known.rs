// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! NFC Forum Well-Known record types.
//!
//! Payload encodings live in [`crate::encoding::wkt`]; this module only holds
//! the decoded values.

use super::error::{CodecError, Result};
use super::record::Record;

/// Character encoding of a [`TextRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, big endian
    Utf16,
}

impl TextEncoding {
    /// Resolve a charset name.
    ///
    /// Accepts `UTF-8` and `UTF-16BE` (case-insensitive, `UTF-16` is taken as
    /// big endian). Anything else is rejected.
    pub fn from_charset(charset: &str) -> Result<Self> {
        match charset.to_ascii_uppercase().replace('_', "-").as_str() {
            "UTF-8" | "UTF8" => Ok(TextEncoding::Utf8),
            "UTF-16BE" | "UTF-16" | "UTF16" | "UTF16BE" => Ok(TextEncoding::Utf16),
            _ => Err(CodecError::unsupported_encoding(charset)),
        }
    }

    /// Canonical charset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16 => "UTF-16BE",
        }
    }
}

/// Well-Known Text record (`T`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    /// The text
    pub text: String,
    /// ISO/IANA language code, e.g. `en` or `en-US`
    pub language: String,
    /// Encoding used for the text on the wire
    pub encoding: TextEncoding,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl TextRecord {
    /// Create a UTF-8 text record.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self::with_encoding(text, language, TextEncoding::Utf8)
    }

    /// Create a text record with an explicit encoding.
    pub fn with_encoding(
        text: impl Into<String>,
        language: impl Into<String>,
        encoding: TextEncoding,
    ) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            encoding,
            id: None,
        }
    }

    /// Create a text record from a charset name.
    ///
    /// Fails with [`CodecError::UnsupportedEncoding`] for charsets other than
    /// UTF-8 and UTF-16BE.
    pub fn with_charset(
        text: impl Into<String>,
        language: impl Into<String>,
        charset: &str,
    ) -> Result<Self> {
        let encoding = TextEncoding::from_charset(charset)?;
        Ok(Self::with_encoding(text, language, encoding))
    }
}

/// Well-Known URI record (`U`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriRecord {
    /// The complete URI, prefix included
    pub uri: String,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl UriRecord {
    /// Create a URI record.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            id: None,
        }
    }
}

/// Recommended action for a Smart Poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Do the action (send the SMS, launch the browser, ...)
    DefaultAction = 0,
    /// Save for later
    SaveForLater = 1,
    /// Open for editing
    OpenForEditing = 2,
}

impl Action {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::DefaultAction => "default",
            Action::SaveForLater => "save",
            Action::OpenForEditing => "edit",
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Action::DefaultAction),
            1 => Ok(Action::SaveForLater),
            2 => Ok(Action::OpenForEditing),
            _ => Err(CodecError::invalid_enum_value("Action", value)),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" | "exec" => Ok(Action::DefaultAction),
            "save" => Ok(Action::SaveForLater),
            "edit" | "open" => Ok(Action::OpenForEditing),
            _ => Err(CodecError::encoder(format!("unknown action '{s}'"))),
        }
    }
}

/// Well-Known Action record (`act`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    /// The recommended action
    pub action: Action,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl ActionRecord {
    /// Create an action record.
    pub fn new(action: Action) -> Self {
        Self { action, id: None }
    }
}

/// Well-Known Smart Poster record (`Sp`).
///
/// The URI is mandatory; title and action are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartPosterRecord {
    /// Poster title
    pub title: Option<TextRecord>,
    /// Target URI
    pub uri: UriRecord,
    /// Recommended action
    pub action: Option<ActionRecord>,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl SmartPosterRecord {
    /// Create a smart poster pointing at `uri`.
    pub fn new(uri: UriRecord) -> Self {
        Self {
            title: None,
            uri,
            action: None,
            id: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: TextRecord) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the recommended action.
    pub fn with_action(mut self, action: ActionRecord) -> Self {
        self.action = Some(action);
        self
    }
}

/// Format of a handover carrier type field (3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CarrierTypeFormat {
    /// NFC Forum well-known type
    WellKnown = 0,
    /// Media type (RFC 2046)
    Media = 1,
    /// Absolute URI (RFC 3986)
    AbsoluteUri = 2,
    /// NFC Forum external type
    External = 3,
}

impl TryFrom<u8> for CarrierTypeFormat {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CarrierTypeFormat::WellKnown),
            1 => Ok(CarrierTypeFormat::Media),
            2 => Ok(CarrierTypeFormat::AbsoluteUri),
            3 => Ok(CarrierTypeFormat::External),
            _ => Err(CodecError::InvalidCarrierTypeFormat { value }),
        }
    }
}

/// The carrier type of a [`HandoverCarrierRecord`].
///
/// Well-known and external carrier types are complete records; media and
/// absolute URI carrier types are plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierType {
    WellKnown(Box<Record>),
    Media(String),
    AbsoluteUri(String),
    External(Box<Record>),
}

impl CarrierType {
    /// Format tag written in the first payload byte.
    pub fn format(&self) -> CarrierTypeFormat {
        match self {
            CarrierType::WellKnown(_) => CarrierTypeFormat::WellKnown,
            CarrierType::Media(_) => CarrierTypeFormat::Media,
            CarrierType::AbsoluteUri(_) => CarrierTypeFormat::AbsoluteUri,
            CarrierType::External(_) => CarrierTypeFormat::External,
        }
    }
}

/// Well-Known Handover Carrier record (`Hc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoverCarrierRecord {
    /// Carrier type
    pub carrier_type: CarrierType,
    /// Carrier data, empty when absent
    pub carrier_data: Vec<u8>,
    /// Record identifier
    pub id: Option<Vec<u8>>,
}

impl HandoverCarrierRecord {
    /// Create a handover carrier record without carrier data.
    pub fn new(carrier_type: CarrierType) -> Self {
        Self {
            carrier_type,
            carrier_data: Vec::new(),
            id: None,
        }
    }

    /// Attach carrier data.
    pub fn with_carrier_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.carrier_data = data.into();
        self
    }

    /// Format of the carrier type.
    pub fn carrier_type_format(&self) -> CarrierTypeFormat {
        self.carrier_type.format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_encoding_from_charset() {
        assert_eq!(TextEncoding::from_charset("UTF-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::from_charset("utf-16be").unwrap(), TextEncoding::Utf16);
        assert_eq!(TextEncoding::from_charset("UTF_16BE").unwrap(), TextEncoding::Utf16);
    }

    #[test]
    fn test_text_record_rejects_other_charsets() {
        let err = TextRecord::with_charset("hi", "en", "ISO-8859-1").unwrap_err();
        assert_eq!(err, CodecError::unsupported_encoding("ISO-8859-1"));
    }

    #[test]
    fn test_empty_carrier_data_is_no_data() {
        let record = HandoverCarrierRecord::new(CarrierType::Media("a/b".into()))
            .with_carrier_data(Vec::new());
        assert_eq!(record, HandoverCarrierRecord::new(CarrierType::Media("a/b".into())));
    }

    #[test]
    fn test_action_from_u8() {
        assert_eq!(Action::try_from(0).unwrap(), Action::DefaultAction);
        assert_eq!(Action::try_from(2).unwrap(), Action::OpenForEditing);
        assert!(matches!(
            Action::try_from(3),
            Err(CodecError::InvalidEnumValue { value: 3, .. })
        ));
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("save".parse::<Action>().unwrap(), Action::SaveForLater);
        assert!("later".parse::<Action>().is_err());
    }

    #[test]
    fn test_carrier_type_format_reserved() {
        assert_eq!(
            CarrierTypeFormat::try_from(4).unwrap_err(),
            CodecError::InvalidCarrierTypeFormat { value: 4 }
        );
        assert_eq!(
            CarrierType::Media("application/vnd.bluetooth.ep.oob".into()).format(),
            CarrierTypeFormat::Media
        );
    }
}
