// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! TLV command - decode a Type 2 Tag data area.

use clap::Args;
use serde::Serialize;
use serde_json::Value;

use super::view::{print_record, record_value};
use crate::common::{build_codec, output_json_or, parse_hex, Result};
use ndefcodec::tlv::{decode_tlv_stream, MemoryTlv, Tlv};
use ndefcodec::{CodecOptions, NdefMessageCodec};

/// Decode a TLV area.
#[derive(Args, Clone, Debug)]
pub struct TlvCmd {
    /// Data area bytes as hex
    #[arg(value_name = "HEX")]
    hex: String,

    /// External type to decode instead of keeping raw (repeatable)
    #[arg(long = "external", value_name = "DOMAIN:TYPE")]
    external: Vec<String>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

impl TlvCmd {
    pub fn run(self, options: CodecOptions) -> Result<()> {
        let bytes = parse_hex(&self.hex)?;
        let codec = build_codec(options, &self.external)?;
        let blocks = decode_tlv_stream(&bytes)?
            .iter()
            .map(|tlv| block_view(tlv, &codec))
            .collect::<Result<Vec<_>>>()?;

        output_json_or(self.json, &blocks, || {
            println!("=== TLV area ({} bytes, {} blocks) ===", bytes.len(), blocks.len());
            for block in &blocks {
                print_block(block);
            }
            Ok(())
        })
    }
}

fn block_view(tlv: &Tlv, codec: &NdefMessageCodec) -> Result<BlockView> {
    let mut view = BlockView::new(tlv);
    match tlv {
        Tlv::LockControl(lock) => {
            view.area = Some(AreaView::new(lock));
            view.bytes_locked_per_lock_bit = Some(lock.bytes_locked_per_lock_bit());
            view.size_in_bytes = Some(lock.size_in_bytes());
        }
        Tlv::MemoryControl(memory) => {
            view.area = Some(AreaView::new(memory));
            view.size_in_bytes = Some(memory.size_in_bytes());
        }
        Tlv::NdefMessage(message) => {
            view.length = Some(message.len());
            // A zero-length NDEF TLV marks a formatted but empty tag.
            let records = if message.is_empty() {
                Vec::new()
            } else {
                codec.decode(message)?.iter().map(record_value).collect()
            };
            view.records = Some(records);
        }
        Tlv::Proprietary(value) => {
            view.length = Some(value.len());
            view.value = Some(hex::encode_upper(value));
        }
        Tlv::Null | Tlv::Terminator => {}
    }
    Ok(view)
}

fn print_block(block: &BlockView) {
    println!("{} (0x{:02X})", block.block, block.tag);
    if let Some(area) = &block.area {
        println!(
            "    page {} offset {} ({} bytes/page) -> position {}",
            area.page_address, area.byte_offset, area.page_size, area.position
        );
        println!("    size: {}", area.size);
    }
    if let Some(bits) = block.bytes_locked_per_lock_bit {
        println!("    bytes locked per lock bit: 2^{bits}");
    }
    if let Some(bytes) = block.size_in_bytes {
        println!("    size in bytes: {bytes}");
    }
    if let Some(value) = &block.value {
        println!("    value: {value}");
    }
    if let Some(records) = &block.records {
        for (index, record) in records.iter().enumerate() {
            print_record(index, record, 4);
        }
    }
}

// Output types

#[derive(Serialize)]
struct BlockView {
    block: &'static str,
    tag: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<AreaView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_locked_per_lock_bit: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_in_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<Value>>,
}

impl BlockView {
    fn new(tlv: &Tlv) -> Self {
        let block = match tlv {
            Tlv::Null => "Null",
            Tlv::LockControl(_) => "LockControl",
            Tlv::MemoryControl(_) => "MemoryControl",
            Tlv::NdefMessage(_) => "NdefMessage",
            Tlv::Proprietary(_) => "Proprietary",
            Tlv::Terminator => "Terminator",
        };
        Self {
            block,
            tag: tlv.tag(),
            area: None,
            bytes_locked_per_lock_bit: None,
            size_in_bytes: None,
            length: None,
            value: None,
            records: None,
        }
    }
}

#[derive(Serialize)]
struct AreaView {
    page_address: u8,
    byte_offset: u8,
    page_size: usize,
    size: u16,
    position: usize,
}

impl AreaView {
    fn new(tlv: &impl MemoryTlv) -> Self {
        let area = tlv.area();
        Self {
            page_address: area.page_address(),
            byte_offset: area.byte_offset(),
            page_size: 1usize << area.bytes_per_page(),
            size: area.size(),
            position: area.position(),
        }
    }
}
