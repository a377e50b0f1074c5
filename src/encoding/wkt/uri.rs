// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! URI record payload: one prefix index byte followed by the rest of the URI.

use super::wrong_kind;
use crate::core::{CodecError, Record, RecordKind, Result, UriRecord};
use crate::encoding::cursor::ByteCursor;
use crate::encoding::registry::{PayloadDecoder, PayloadEncoder};
use crate::encoding::writer::ByteWriter;
use crate::encoding::NdefMessageCodec;

/// URI abbreviations from the NFC Forum URI RTD, indexed by prefix byte.
pub const URI_PREFIXES: [&str; 36] = [
    "",                           // 0x00
    "http://www.",                // 0x01
    "https://www.",               // 0x02
    "http://",                    // 0x03
    "https://",                   // 0x04
    "tel:",                       // 0x05
    "mailto:",                    // 0x06
    "ftp://anonymous:anonymous@", // 0x07
    "ftp://ftp.",                 // 0x08
    "ftps://",                    // 0x09
    "sftp://",                    // 0x0A
    "smb://",                     // 0x0B
    "nfs://",                     // 0x0C
    "ftp://",                     // 0x0D
    "dav://",                     // 0x0E
    "news:",                      // 0x0F
    "telnet://",                  // 0x10
    "imap:",                      // 0x11
    "rtsp://",                    // 0x12
    "urn:",                       // 0x13
    "pop:",                       // 0x14
    "sip:",                       // 0x15
    "sips:",                      // 0x16
    "tftp:",                      // 0x17
    "btspp://",                   // 0x18
    "btl2cap://",                 // 0x19
    "btgoep://",                  // 0x1A
    "tcpobex://",                 // 0x1B
    "irdaobex://",                // 0x1C
    "file://",                    // 0x1D
    "urn:epc:id:",                // 0x1E
    "urn:epc:tag:",               // 0x1F
    "urn:epc:pat:",               // 0x20
    "urn:epc:raw:",               // 0x21
    "urn:epc:",                   // 0x22
    "urn:nfc:",                   // 0x23
];

const RECORD: &str = "Uri";

/// Find the longest table prefix of `uri`.
///
/// Returns the prefix index and the remainder. Equal lengths resolve to the
/// lower index; index 0 matches everything.
pub fn abbreviate(uri: &str) -> (u8, &str) {
    let mut best = 0usize;
    for (index, prefix) in URI_PREFIXES.iter().enumerate().skip(1) {
        if uri.starts_with(prefix) && prefix.len() > URI_PREFIXES[best].len() {
            best = index;
        }
    }
    (best as u8, &uri[URI_PREFIXES[best].len()..])
}

/// Payload codec for [`UriRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UriCodec;

impl PayloadEncoder for UriCodec {
    fn encode_payload(&self, record: &Record, _codec: &NdefMessageCodec) -> Result<Vec<u8>> {
        let Record::Uri(uri) = record else {
            return Err(wrong_kind(RecordKind::Uri, record));
        };
        let (index, rest) = abbreviate(&uri.uri);
        let mut writer = ByteWriter::with_capacity(1 + rest.len());
        writer.write_u8(index);
        writer.write_bytes(rest.as_bytes());
        Ok(writer.finish())
    }
}

impl PayloadDecoder for UriCodec {
    fn decode_payload(&self, payload: &[u8], _codec: &NdefMessageCodec) -> Result<Record> {
        let mut cursor = ByteCursor::new(payload);
        let index = cursor
            .read_u8()
            .map_err(|_| CodecError::malformed_payload(RECORD, "empty payload"))?;
        let prefix = URI_PREFIXES
            .get(index as usize)
            .ok_or_else(|| CodecError::invalid_enum_value("UriPrefix", index))?;
        let rest = std::str::from_utf8(cursor.read_rest())
            .map_err(|e| CodecError::malformed_payload(RECORD, format!("invalid UTF-8: {e}")))?;
        Ok(UriRecord::new(format!("{prefix}{rest}")).into())
    }
}
