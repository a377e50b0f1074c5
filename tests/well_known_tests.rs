// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Well-Known record integration tests.
//!
//! Tests cover:
//! - URI prefix abbreviation on the wire
//! - Text record encodings
//! - Smart Poster composition and mandatory URI
//! - Handover Carrier carrier types

mod common;

use common::{codec_with_external, full_smart_poster, hex};
use ndefcodec::core::{
    Action, ActionRecord, CarrierType, ExternalTypeRecord, HandoverCarrierRecord, MimeRecord,
    Record, TextEncoding, TextRecord, UriRecord,
};
use ndefcodec::encoding::wkt::URI_PREFIXES;
use ndefcodec::{decode_message, encode_message, CodecError};

/// Payload of the single record in `bytes` (short record, no id).
fn single_payload(bytes: &[u8]) -> &[u8] {
    let type_len = bytes[1] as usize;
    &bytes[3 + type_len..]
}

// ============================================================================
// URI
// ============================================================================

#[test]
fn test_uri_longest_prefix_is_chosen() {
    let bytes = encode_message(&[UriRecord::new("https://www.example.com").into()]).unwrap();
    let payload = single_payload(&bytes);
    assert_eq!(payload[0], 0x02);
    assert_eq!(&payload[1..], b"example.com");
}

#[test]
fn test_uri_every_prefix_round_trips() {
    for (index, prefix) in URI_PREFIXES.iter().enumerate() {
        let uri = format!("{prefix}rest");
        let bytes = encode_message(&[UriRecord::new(uri.as_str()).into()]).unwrap();
        let records = decode_message(&bytes).unwrap();
        assert_eq!(records, vec![Record::Uri(UriRecord::new(uri.as_str()))], "prefix {index}");
    }
}

#[test]
fn test_uri_out_of_range_prefix() {
    let bytes = hex("D1 01 02 55 24 61");
    assert_eq!(
        decode_message(&bytes).unwrap_err(),
        CodecError::invalid_record(0, CodecError::invalid_enum_value("UriPrefix", 0x24))
    );
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_utf8_wire_form() {
    let bytes = encode_message(&[TextRecord::new("Hello", "en-US").into()]).unwrap();
    assert_eq!(bytes, hex("D1 01 0B 54 05 65 6E 2D 55 53 48 65 6C 6C 6F"));
}

#[test]
fn test_text_utf16_round_trip() {
    let record = TextRecord::with_charset("Łódź", "pl", "UTF-16BE").unwrap();
    assert_eq!(record.encoding, TextEncoding::Utf16);
    let bytes = encode_message(&[record.clone().into()]).unwrap();
    assert_eq!(single_payload(&bytes)[0], 0x82);
    assert_eq!(decode_message(&bytes).unwrap(), vec![Record::Text(record)]);
}

#[test]
fn test_text_non_ascii_language_rejected() {
    let err = encode_message(&[TextRecord::new("x", "ελ").into()]).unwrap_err();
    assert!(matches!(err, CodecError::EncoderError { .. }));
}

// ============================================================================
// Smart Poster
// ============================================================================

#[test]
fn test_smart_poster_round_trip() {
    let poster: Record = full_smart_poster().into();
    let bytes = encode_message(std::slice::from_ref(&poster)).unwrap();
    assert_eq!(&bytes[3..5], b"Sp");
    assert_eq!(decode_message(&bytes).unwrap(), vec![poster]);
}

#[test]
fn test_smart_poster_without_uri() {
    // Sp record whose nested message only holds an action.
    let nested = encode_message(&[ActionRecord::new(Action::SaveForLater).into()]).unwrap();
    let mut bytes = vec![0xD1, 0x02, nested.len() as u8, b'S', b'p'];
    bytes.extend_from_slice(&nested);

    assert_eq!(
        decode_message(&bytes).unwrap_err().root_cause(),
        &CodecError::missing_field("SmartPoster", "uri")
    );
}

#[test]
fn test_smart_poster_with_empty_payload() {
    let bytes = [0xD1, 0x02, 0x00, b'S', b'p'];
    assert_eq!(
        decode_message(&bytes).unwrap_err(),
        CodecError::invalid_record(0, CodecError::missing_field("SmartPoster", "uri"))
    );
}

#[test]
fn test_payload_error_reports_record_offset() {
    let mut bytes = encode_message(&[
        TextRecord::new("ok", "en").into(),
        ActionRecord::new(Action::DefaultAction).into(),
    ])
    .unwrap();
    // Text record: 4 header bytes + 5 payload bytes; the action value is last.
    let last = bytes.len() - 1;
    bytes[last] = 0x09;

    match decode_message(&bytes).unwrap_err() {
        CodecError::InvalidRecord { offset, error } => {
            assert_eq!(offset, 9);
            assert_eq!(*error, CodecError::invalid_enum_value("Action", 9));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_smart_poster_ignores_foreign_sub_records() {
    let nested = encode_message(&[
        MimeRecord::new("image/png", vec![0x89]).into(),
        UriRecord::new("tel:1").into(),
    ])
    .unwrap();
    let mut bytes = vec![0xD1, 0x02, nested.len() as u8, b'S', b'p'];
    bytes.extend_from_slice(&nested);

    let Record::SmartPoster(poster) = &decode_message(&bytes).unwrap()[0] else {
        panic!("expected smart poster");
    };
    assert_eq!(poster.uri.uri, "tel:1");
    assert!(poster.title.is_none());
    assert!(poster.action.is_none());
}

// ============================================================================
// Handover Carrier
// ============================================================================

#[test]
fn test_handover_media_carrier_wire_form() {
    let record = HandoverCarrierRecord::new(CarrierType::Media(
        "application/vnd.bluetooth.ep.oob".into(),
    ))
    .with_carrier_data(vec![0x01]);
    let bytes = encode_message(&[record.clone().into()]).unwrap();
    let payload = single_payload(&bytes);
    assert_eq!(payload[0], 0x01);
    assert_eq!(payload[1] as usize, "application/vnd.bluetooth.ep.oob".len());
    assert_eq!(payload.last(), Some(&0x01));
    assert_eq!(decode_message(&bytes).unwrap(), vec![Record::HandoverCarrier(record)]);
}

#[test]
fn test_handover_empty_carrier_data_round_trip() {
    let record = HandoverCarrierRecord::new(CarrierType::Media("a/b".into()))
        .with_carrier_data(vec![]);
    let bytes = encode_message(&[record.clone().into()]).unwrap();
    assert_eq!(single_payload(&bytes), &[0x01, 0x03, b'a', b'/', b'b']);
    assert_eq!(decode_message(&bytes).unwrap(), vec![Record::HandoverCarrier(record)]);
}

#[test]
fn test_handover_external_carrier() {
    let codec = codec_with_external(&["nfc.example:wifi"]);
    let carrier = ExternalTypeRecord::new("nfc.example:wifi", vec![0x10, 0x20]);
    let record = Record::from(HandoverCarrierRecord::new(CarrierType::External(Box::new(
        carrier.into(),
    ))));
    let bytes = codec.encode_single(&record).unwrap();
    assert_eq!(codec.decode(&bytes).unwrap(), vec![record]);
}

#[test]
fn test_handover_reserved_format() {
    let bytes = hex("D1 02 02 48 63 05 00");
    assert_eq!(
        decode_message(&bytes).unwrap_err().root_cause(),
        &CodecError::InvalidCarrierTypeFormat { value: 5 }
    );
}

#[test]
fn test_handover_carrier_type_too_large() {
    let record = HandoverCarrierRecord::new(CarrierType::AbsoluteUri(format!(
        "urn:{}",
        "x".repeat(300)
    )));
    assert!(matches!(
        encode_message(&[record.into()]),
        Err(CodecError::CarrierTypeTooLarge { length: 304 })
    ));
}
