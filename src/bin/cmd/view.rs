// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Printable views of decoded records.

use serde_json::{json, Value};

use ndefcodec::core::{CarrierType, Record};

/// JSON description of a record.
pub fn record_value(record: &Record) -> Value {
    let mut value = match record {
        Record::Text(text) => json!({
            "kind": "Text",
            "text": text.text,
            "language": text.language,
            "encoding": text.encoding.as_str(),
        }),
        Record::Uri(uri) => json!({ "kind": "Uri", "uri": uri.uri }),
        Record::SmartPoster(poster) => json!({
            "kind": "SmartPoster",
            "uri": poster.uri.uri,
            "title": poster.title.as_ref().map(|t| t.text.as_str()),
            "action": poster.action.as_ref().map(|a| a.action.as_str()),
        }),
        Record::Action(action) => json!({ "kind": "Action", "action": action.action.as_str() }),
        Record::HandoverCarrier(carrier) => json!({
            "kind": "HandoverCarrier",
            "carrier_type": carrier_type_value(&carrier.carrier_type),
            "carrier_data": (!carrier.carrier_data.is_empty())
                .then(|| hex::encode_upper(&carrier.carrier_data)),
        }),
        Record::External(external) => json!({
            "kind": "External",
            "type": external.domain_type,
            "data": hex::encode_upper(&external.data),
        }),
        Record::Mime(mime) => json!({
            "kind": "Mime",
            "content_type": mime.content_type,
            "content": hex::encode_upper(&mime.content),
        }),
        Record::AbsoluteUri(uri) => json!({ "kind": "AbsoluteUri", "uri": uri.uri }),
        Record::Empty(_) => json!({ "kind": "Empty" }),
        Record::Unknown(unknown) => json!({
            "kind": "Unknown",
            "tnf": unknown.raw.tnf.as_str(),
            "type": hex::encode_upper(&unknown.raw.record_type),
            "payload": hex::encode_upper(&unknown.raw.payload),
        }),
    };
    if let Some(id) = record.id() {
        value["id"] = json!(hex::encode_upper(id));
    }
    value
}

fn carrier_type_value(carrier_type: &CarrierType) -> Value {
    match carrier_type {
        CarrierType::WellKnown(record) | CarrierType::External(record) => record_value(record),
        CarrierType::Media(media) => json!({ "kind": "Media", "type": media }),
        CarrierType::AbsoluteUri(uri) => json!({ "kind": "AbsoluteUri", "uri": uri }),
    }
}

/// Print a record description as indented `key: value` lines.
pub fn print_record(index: usize, value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    let kind = value["kind"].as_str().unwrap_or("?");
    println!("{pad}[{index}] {kind}");
    if let Some(fields) = value.as_object() {
        for (key, field) in fields.iter().filter(|(key, _)| *key != "kind") {
            match field {
                Value::Null => {}
                Value::String(s) => println!("{pad}    {key}: {s}"),
                other => println!("{pad}    {key}: {other}"),
            }
        }
    }
}
