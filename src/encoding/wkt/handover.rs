// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Handover Carrier record payload.
//!
//! ```text
//! byte 0   : bits 2..0 = carrier type format, bits 7..3 reserved
//! byte 1   : carrier type length
//! ...      : carrier type
//! rest     : carrier data (optional)
//! ```
//!
//! Well-known and external carrier types are themselves NDEF records and are
//! written as a one-record nested message. Media and absolute URI carrier
//! types are UTF-8 strings.

use super::wrong_kind;
use crate::core::{
    CarrierType, CarrierTypeFormat, CodecError, HandoverCarrierRecord, Record, RecordKind,
    Result, Tnf,
};
use crate::encoding::cursor::{bit_range, ByteCursor};
use crate::encoding::message::{read_ndef_records, write_ndef_records};
use crate::encoding::registry::{PayloadDecoder, PayloadEncoder};
use crate::encoding::writer::ByteWriter;
use crate::encoding::NdefMessageCodec;

const RECORD: &str = "HandoverCarrier";

/// Payload codec for [`HandoverCarrierRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HandoverCarrierCodec;

impl PayloadEncoder for HandoverCarrierCodec {
    fn encode_payload(&self, record: &Record, codec: &NdefMessageCodec) -> Result<Vec<u8>> {
        let Record::HandoverCarrier(carrier) = record else {
            return Err(wrong_kind(RecordKind::HandoverCarrier, record));
        };

        let format = carrier.carrier_type_format();
        let carrier_type = match &carrier.carrier_type {
            CarrierType::WellKnown(nested) | CarrierType::External(nested) => {
                encode_nested_carrier(nested, format, codec)?
            }
            CarrierType::Media(value) | CarrierType::AbsoluteUri(value) => {
                value.as_bytes().to_vec()
            }
        };
        if carrier_type.len() > u8::MAX as usize {
            return Err(CodecError::CarrierTypeTooLarge {
                length: carrier_type.len(),
            });
        }

        let data = &carrier.carrier_data;
        let mut writer = ByteWriter::with_capacity(2 + carrier_type.len() + data.len());
        writer.write_u8(format as u8);
        writer.write_u8_prefixed("carrier type", &carrier_type)?;
        writer.write_bytes(data);
        Ok(writer.finish())
    }
}

impl PayloadDecoder for HandoverCarrierCodec {
    fn decode_payload(&self, payload: &[u8], codec: &NdefMessageCodec) -> Result<Record> {
        let mut cursor = ByteCursor::new(payload);
        let header = cursor
            .read_u8()
            .map_err(|_| CodecError::malformed_payload(RECORD, "empty payload"))?;
        let format = CarrierTypeFormat::try_from(bit_range(header, 0, 3))?;
        let carrier_type = cursor.read_u8_prefixed().map_err(|e| {
            CodecError::malformed_payload(RECORD, format!("truncated carrier type: {e}"))
        })?;

        let carrier_type = match format {
            CarrierTypeFormat::WellKnown => {
                let nested = decode_nested_carrier(carrier_type, format, codec)?;
                CarrierType::WellKnown(Box::new(nested))
            }
            CarrierTypeFormat::External => {
                let nested = decode_nested_carrier(carrier_type, format, codec)?;
                CarrierType::External(Box::new(nested))
            }
            CarrierTypeFormat::Media => CarrierType::Media(carrier_type_str(carrier_type)?),
            CarrierTypeFormat::AbsoluteUri => {
                CarrierType::AbsoluteUri(carrier_type_str(carrier_type)?)
            }
        };

        Ok(Record::HandoverCarrier(HandoverCarrierRecord {
            carrier_type,
            carrier_data: cursor.read_rest().to_vec(),
            id: None,
        }))
    }
}

fn expected_tnf(format: CarrierTypeFormat) -> Tnf {
    match format {
        CarrierTypeFormat::External => Tnf::External,
        _ => Tnf::WellKnown,
    }
}

fn encode_nested_carrier(
    record: &Record,
    format: CarrierTypeFormat,
    codec: &NdefMessageCodec,
) -> Result<Vec<u8>> {
    let nested = codec.nested()?;
    let ndef = nested.to_ndef_records(std::slice::from_ref(record))?;
    if ndef.iter().any(|r| r.tnf != expected_tnf(format)) {
        return Err(CodecError::InvalidCarrierTypeFormat {
            value: format as u8,
        });
    }
    write_ndef_records(&ndef)
}

fn decode_nested_carrier(
    bytes: &[u8],
    format: CarrierTypeFormat,
    codec: &NdefMessageCodec,
) -> Result<Record> {
    let nested = codec.nested()?;
    let mut records = read_ndef_records(bytes, nested.options())?;
    if records.len() != 1 {
        return Err(CodecError::malformed_payload(
            RECORD,
            format!("carrier type must be one record, found {}", records.len()),
        ));
    }
    let Some(ndef) = records.pop() else {
        return Err(CodecError::malformed_payload(RECORD, "missing carrier type record"));
    };
    if ndef.tnf != expected_tnf(format) {
        return Err(CodecError::InvalidCarrierTypeFormat {
            value: format as u8,
        });
    }
    nested.registry().decode_record(ndef, &nested)
}

fn carrier_type_str(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        CodecError::malformed_payload(RECORD, format!("carrier type is not UTF-8: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExternalTypeRecord, TextRecord, UriRecord};
    use crate::encoding::RegistryBuilder;
    use std::sync::Arc;

    fn encode(record: HandoverCarrierRecord) -> Result<Vec<u8>> {
        HandoverCarrierCodec.encode_payload(&record.into(), &NdefMessageCodec::default())
    }

    fn decode(payload: &[u8]) -> Result<Record> {
        HandoverCarrierCodec.decode_payload(payload, &NdefMessageCodec::default())
    }

    #[test]
    fn test_media_carrier_type() {
        let record = HandoverCarrierRecord::new(CarrierType::Media("a/b".into()))
            .with_carrier_data(vec![0xAA, 0xBB]);
        let payload = encode(record.clone()).unwrap();
        assert_eq!(payload, vec![0x01, 0x03, b'a', b'/', b'b', 0xAA, 0xBB]);
        assert_eq!(decode(&payload).unwrap(), Record::HandoverCarrier(record));
    }

    #[test]
    fn test_empty_carrier_data_round_trip() {
        let record = HandoverCarrierRecord::new(CarrierType::Media("a/b".into()))
            .with_carrier_data(vec![]);
        let payload = encode(record.clone()).unwrap();
        assert_eq!(payload, vec![0x01, 0x03, b'a', b'/', b'b']);
        assert_eq!(decode(&payload).unwrap(), Record::HandoverCarrier(record));
    }

    #[test]
    fn test_absolute_uri_without_data() {
        let record = HandoverCarrierRecord::new(CarrierType::AbsoluteUri("urn:x".into()));
        let payload = encode(record.clone()).unwrap();
        assert_eq!(payload[0], 0x02);
        assert_eq!(decode(&payload).unwrap(), Record::HandoverCarrier(record));
    }

    #[test]
    fn test_well_known_carrier_type_round_trip() {
        let nested = Record::from(TextRecord::new("bt", "en"));
        let record = HandoverCarrierRecord::new(CarrierType::WellKnown(Box::new(nested)))
            .with_carrier_data(vec![1, 2, 3]);
        let payload = encode(record.clone()).unwrap();
        assert_eq!(payload[0], 0x00);
        assert_eq!(payload[2], 0xD1);
        assert_eq!(decode(&payload).unwrap(), Record::HandoverCarrier(record));
    }

    #[test]
    fn test_external_carrier_type_round_trip() {
        let registry = RegistryBuilder::well_known()
            .external_type("example.com:bt")
            .build()
            .unwrap();
        let codec = NdefMessageCodec::new(Arc::new(registry));
        let nested = Record::from(ExternalTypeRecord::new("example.com:bt", vec![7]));
        let record = Record::from(HandoverCarrierRecord::new(CarrierType::External(Box::new(
            nested,
        ))));
        let payload = HandoverCarrierCodec.encode_payload(&record, &codec).unwrap();
        assert_eq!(payload[0], 0x03);
        assert_eq!(HandoverCarrierCodec.decode_payload(&payload, &codec).unwrap(), record);
    }

    #[test]
    fn test_mismatched_nested_tnf() {
        let nested = Record::from(UriRecord::new("tel:1"));
        let record = HandoverCarrierRecord::new(CarrierType::External(Box::new(nested)));
        assert_eq!(
            encode(record).unwrap_err(),
            CodecError::InvalidCarrierTypeFormat { value: 3 }
        );
    }

    #[test]
    fn test_carrier_type_too_large() {
        let record = HandoverCarrierRecord::new(CarrierType::Media("m".repeat(256)));
        assert_eq!(
            encode(record).unwrap_err(),
            CodecError::CarrierTypeTooLarge { length: 256 }
        );
    }

    #[test]
    fn test_reserved_format() {
        for value in 4..=7u8 {
            assert_eq!(
                decode(&[value, 0x00]).unwrap_err(),
                CodecError::InvalidCarrierTypeFormat { value }
            );
        }
    }

    #[test]
    fn test_reserved_bits_ignored() {
        let record = decode(&[0xF9, 0x01, b'x']).unwrap();
        let Record::HandoverCarrier(carrier) = record else {
            panic!("expected handover carrier");
        };
        assert_eq!(carrier.carrier_type, CarrierType::Media("x".into()));
        assert!(carrier.carrier_data.is_empty());
    }

    #[test]
    fn test_truncated_carrier_type() {
        assert!(matches!(decode(&[]), Err(CodecError::MalformedPayload { .. })));
        assert!(matches!(
            decode(&[0x01, 0x05, b'a']),
            Err(CodecError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_nested_message_with_two_records() {
        let codec = NdefMessageCodec::default();
        let nested = codec
            .encode(&[UriRecord::new("tel:1").into(), UriRecord::new("tel:2").into()])
            .unwrap();
        let mut payload = vec![0x00, nested.len() as u8];
        payload.extend_from_slice(&nested);
        assert!(matches!(decode(&payload), Err(CodecError::MalformedPayload { .. })));
    }
}
