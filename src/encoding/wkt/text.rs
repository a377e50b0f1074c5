// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Text record payload.
//!
//! ```text
//! byte 0      : bit 7 = UTF-16 flag, bit 6 = reserved, bits 5..0 = language length
//! 1..=len     : language code (ASCII)
//! rest        : text, UTF-8 or UTF-16BE
//! ```

use byteorder::{BigEndian, ByteOrder};

use super::wrong_kind;
use crate::core::{CodecError, Record, RecordKind, Result, TextEncoding, TextRecord};
use crate::encoding::cursor::{bit_range, ByteCursor};
use crate::encoding::registry::{PayloadDecoder, PayloadEncoder};
use crate::encoding::writer::ByteWriter;
use crate::encoding::NdefMessageCodec;

/// UTF-16 flag in the status byte.
const UTF16_FLAG: u8 = 0x80;

/// Longest language code the status byte can describe.
pub const MAX_LANGUAGE_LENGTH: usize = 0x3F;

const RECORD: &str = "Text";

/// Payload codec for [`TextRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl PayloadEncoder for TextCodec {
    fn encode_payload(&self, record: &Record, _codec: &NdefMessageCodec) -> Result<Vec<u8>> {
        let Record::Text(text) = record else {
            return Err(wrong_kind(RecordKind::Text, record));
        };
        encode_text(text)
    }
}

impl PayloadDecoder for TextCodec {
    fn decode_payload(&self, payload: &[u8], _codec: &NdefMessageCodec) -> Result<Record> {
        decode_text(payload).map(Record::Text)
    }
}

fn encode_text(record: &TextRecord) -> Result<Vec<u8>> {
    let language = record.language.as_bytes();
    if !record.language.is_ascii() {
        return Err(CodecError::encoder(format!(
            "language code '{}' is not ASCII",
            record.language
        )));
    }
    if language.len() > MAX_LANGUAGE_LENGTH {
        return Err(CodecError::encoder(format!(
            "language code length {} exceeds {MAX_LANGUAGE_LENGTH}",
            language.len()
        )));
    }

    let mut status = language.len() as u8;
    if record.encoding == TextEncoding::Utf16 {
        status |= UTF16_FLAG;
    }

    let mut writer = ByteWriter::with_capacity(1 + language.len() + record.text.len() * 2);
    writer.write_u8(status);
    writer.write_bytes(language);
    match record.encoding {
        TextEncoding::Utf8 => writer.write_bytes(record.text.as_bytes()),
        TextEncoding::Utf16 => {
            for unit in record.text.encode_utf16() {
                writer.write_u16_be(unit);
            }
        }
    }
    Ok(writer.finish())
}

fn decode_text(payload: &[u8]) -> Result<TextRecord> {
    let mut cursor = ByteCursor::new(payload);
    let status = cursor
        .read_u8()
        .map_err(|_| CodecError::malformed_payload(RECORD, "empty payload"))?;
    let encoding = if status & UTF16_FLAG != 0 {
        TextEncoding::Utf16
    } else {
        TextEncoding::Utf8
    };

    let language_len = bit_range(status, 0, 6) as usize;
    let language = cursor.read_bytes(language_len).map_err(|_| {
        CodecError::malformed_payload(
            RECORD,
            format!(
                "language code length {language_len} exceeds remaining {} bytes",
                payload.len() - 1
            ),
        )
    })?;
    if !language.is_ascii() {
        return Err(CodecError::malformed_payload(RECORD, "language code is not ASCII"));
    }
    let language = String::from_utf8_lossy(language).into_owned();

    let body = cursor.read_rest();
    let text = match encoding {
        TextEncoding::Utf8 => String::from_utf8(body.to_vec())
            .map_err(|e| CodecError::malformed_payload(RECORD, format!("invalid UTF-8: {e}")))?,
        TextEncoding::Utf16 => decode_utf16_be(body)?,
    };

    Ok(TextRecord {
        text,
        language,
        encoding,
        id: None,
    })
}

fn decode_utf16_be(body: &[u8]) -> Result<String> {
    if body.len() % 2 != 0 {
        return Err(CodecError::malformed_payload(
            RECORD,
            format!("odd UTF-16 text length {}", body.len()),
        ));
    }
    let mut units = vec![0u16; body.len() / 2];
    BigEndian::read_u16_into(body, &mut units);
    String::from_utf16(&units)
        .map_err(|e| CodecError::malformed_payload(RECORD, format!("invalid UTF-16: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_utf8() {
        let payload = encode_text(&TextRecord::new("Hi", "en")).unwrap();
        assert_eq!(payload, vec![0x02, b'e', b'n', b'H', b'i']);
    }

    #[test]
    fn test_encode_utf16() {
        let record = TextRecord::with_encoding("Hi", "de", TextEncoding::Utf16);
        let payload = encode_text(&record).unwrap();
        assert_eq!(payload, vec![0x82, b'd', b'e', 0x00, b'H', 0x00, b'i']);
    }

    #[test]
    fn test_decode_utf16_round_trip() {
        let record = TextRecord::with_encoding("Grüße 🙂", "de-DE", TextEncoding::Utf16);
        let decoded = decode_text(&encode_text(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_language_length_limit() {
        let record = TextRecord::new("x", "a".repeat(64));
        assert!(matches!(encode_text(&record), Err(CodecError::EncoderError { .. })));

        let record = TextRecord::new("x", "a".repeat(63));
        assert_eq!(encode_text(&record).unwrap()[0], 63);
    }

    #[test]
    fn test_reserved_bit_ignored_on_decode() {
        let decoded = decode_text(&[0x42, b'e', b'n', b'o', b'k']).unwrap();
        assert_eq!(decoded.language, "en");
        assert_eq!(decoded.text, "ok");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode_text(&[]), Err(CodecError::MalformedPayload { .. })));
        assert!(matches!(decode_text(&[0x05, b'e']), Err(CodecError::MalformedPayload { .. })));
        assert!(matches!(
            decode_text(&[0x80, 0x00]),
            Err(CodecError::MalformedPayload { .. })
        ));
        assert!(matches!(
            decode_text(&[0x00, 0xFF, 0xFE]),
            Err(CodecError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        let decoded = decode_text(&[0x02, b'e', b'n']).unwrap();
        assert_eq!(decoded.text, "");
    }
}
