// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Smart Poster payload: a nested NDEF message of title, URI and action.

use tracing::debug;

use super::wrong_kind;
use crate::core::{CodecError, Record, RecordKind, Result, SmartPosterRecord};
use crate::encoding::registry::{PayloadDecoder, PayloadEncoder};
use crate::encoding::NdefMessageCodec;

/// Payload codec for [`SmartPosterRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartPosterCodec;

impl PayloadEncoder for SmartPosterCodec {
    fn encode_payload(&self, record: &Record, codec: &NdefMessageCodec) -> Result<Vec<u8>> {
        let Record::SmartPoster(poster) = record else {
            return Err(wrong_kind(RecordKind::SmartPoster, record));
        };

        let mut records = Vec::with_capacity(3);
        if let Some(title) = &poster.title {
            records.push(Record::Text(title.clone()));
        }
        records.push(Record::Uri(poster.uri.clone()));
        if let Some(action) = &poster.action {
            records.push(Record::Action(action.clone()));
        }
        codec.nested()?.encode(&records)
    }
}

impl PayloadDecoder for SmartPosterCodec {
    fn decode_payload(&self, payload: &[u8], codec: &NdefMessageCodec) -> Result<Record> {
        let nested = codec.nested()?;
        // An empty payload is a poster with no sub-records.
        let records = if payload.is_empty() {
            Vec::new()
        } else {
            nested.decode(payload)?
        };

        let mut title = None;
        let mut uri = None;
        let mut action = None;
        for record in records {
            match record {
                Record::Text(text) => title = Some(text),
                Record::Uri(u) => uri = Some(u),
                Record::Action(a) => action = Some(a),
                other => debug!(kind = other.kind().as_str(), "ignoring smart poster sub-record"),
            }
        }

        let uri = uri.ok_or_else(|| CodecError::missing_field("SmartPoster", "uri"))?;
        Ok(Record::SmartPoster(SmartPosterRecord {
            title,
            uri,
            action,
            id: None,
        }))
    }
}
