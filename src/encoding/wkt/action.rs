// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Action record payload: a single action byte.

use super::wrong_kind;
use crate::core::{Action, ActionRecord, CodecError, Record, RecordKind, Result};
use crate::encoding::cursor::ByteCursor;
use crate::encoding::registry::{PayloadDecoder, PayloadEncoder};
use crate::encoding::NdefMessageCodec;

/// Payload codec for [`ActionRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionCodec;

impl PayloadEncoder for ActionCodec {
    fn encode_payload(&self, record: &Record, _codec: &NdefMessageCodec) -> Result<Vec<u8>> {
        match record {
            Record::Action(action) => Ok(vec![action.action as u8]),
            other => Err(wrong_kind(RecordKind::Action, other)),
        }
    }
}

impl PayloadDecoder for ActionCodec {
    fn decode_payload(&self, payload: &[u8], _codec: &NdefMessageCodec) -> Result<Record> {
        let mut cursor = ByteCursor::new(payload);
        let value = cursor
            .read_u8()
            .map_err(|_| CodecError::malformed_payload("Action", "empty payload"))?;
        let action = Action::try_from(value)?;
        Ok(ActionRecord::new(action).into())
    }
}
