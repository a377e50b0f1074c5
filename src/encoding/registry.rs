// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record type registry.
//!
//! Maps each [`Record`] variant to its wire identity (TNF + type bytes) and to
//! the payload codec that produces its payload. Well-Known types are bound
//! through a [`WellKnownRecordConfig`]; the Mime, External, Absolute URI,
//! Empty and Unknown families are simple pass-throughs handled in place.
//!
//! The registry is assembled once with a [`RegistryBuilder`] and is read-only
//! afterwards, so it can be shared between threads behind an `Arc`.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use ndefcodec::core::{ExternalTypeRecord, Record};
//! use ndefcodec::encoding::{NdefMessageCodec, RegistryBuilder};
//!
//! let registry = RegistryBuilder::well_known()
//!     .external_type("example.com:pos")
//!     .build()?;
//! let codec = NdefMessageCodec::new(Arc::new(registry));
//!
//! let record: Record = ExternalTypeRecord::new("example.com:pos", vec![1, 2]).into();
//! let bytes = codec.encode(std::slice::from_ref(&record))?;
//! assert_eq!(codec.decode(&bytes)?, vec![record]);
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use super::message::NdefMessageCodec;
use super::wkt::{ActionCodec, HandoverCarrierCodec, SmartPosterCodec, TextCodec, UriCodec};
use crate::core::ndef::MAX_FIELD_LENGTH;
use crate::core::{
    AbsoluteUriRecord, CodecError, EmptyRecord, ExternalTypeRecord, MimeRecord, NdefRecord,
    Record, RecordKind, Result, Tnf, UnknownRecord,
};

/// Produces the payload bytes of a Well-Known record.
pub trait PayloadEncoder: Send + Sync {
    /// Encode the payload of `record`.
    ///
    /// `codec` is the message codec currently encoding; composite payloads
    /// use [`NdefMessageCodec::nested`] on it.
    fn encode_payload(&self, record: &Record, codec: &NdefMessageCodec) -> Result<Vec<u8>>;
}

/// Rebuilds a Well-Known record from its payload bytes.
pub trait PayloadDecoder: Send + Sync {
    /// Decode `payload` into a record (without id; the registry attaches it).
    fn decode_payload(&self, payload: &[u8], codec: &NdefMessageCodec) -> Result<Record>;
}

/// Binds a Well-Known record kind to its type bytes and payload codec.
#[derive(Clone)]
pub struct WellKnownRecordConfig {
    kind: RecordKind,
    record_type: Vec<u8>,
    encoder: Arc<dyn PayloadEncoder>,
    decoder: Arc<dyn PayloadDecoder>,
}

impl WellKnownRecordConfig {
    /// Create a config whose encoder and decoder are the same codec.
    pub fn new<C>(kind: RecordKind, record_type: impl Into<Vec<u8>>, codec: C) -> Self
    where
        C: PayloadEncoder + PayloadDecoder + 'static,
    {
        let codec = Arc::new(codec);
        Self::with_parts(kind, record_type, codec.clone(), codec)
    }

    /// Create a config from a separate encoder and decoder.
    pub fn with_parts(
        kind: RecordKind,
        record_type: impl Into<Vec<u8>>,
        encoder: Arc<dyn PayloadEncoder>,
        decoder: Arc<dyn PayloadDecoder>,
    ) -> Self {
        Self {
            kind,
            record_type: record_type.into(),
            encoder,
            decoder,
        }
    }

    /// Record kind this config handles.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// NFC type bytes, e.g. `b"U"`.
    pub fn record_type(&self) -> &[u8] {
        &self.record_type
    }
}

impl std::fmt::Debug for WellKnownRecordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WellKnownRecordConfig")
            .field("kind", &self.kind)
            .field("record_type", &String::from_utf8_lossy(&self.record_type))
            .finish()
    }
}

/// The record families that need no payload codec.
const PASS_THROUGH_KINDS: [RecordKind; 5] = [
    RecordKind::External,
    RecordKind::Mime,
    RecordKind::AbsoluteUri,
    RecordKind::Empty,
    RecordKind::Unknown,
];

/// Builder for a [`RecordRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    configs: Vec<WellKnownRecordConfig>,
    pass_through: BTreeSet<RecordKind>,
    external_types: Vec<String>,
    strict: bool,
}

impl RegistryBuilder {
    /// Create an empty builder. Nothing is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the Well-Known types and every pass-through family.
    pub fn well_known() -> Self {
        let mut builder = Self::new()
            .register(WellKnownRecordConfig::new(RecordKind::Text, b"T".to_vec(), TextCodec))
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), UriCodec))
            .register(WellKnownRecordConfig::new(
                RecordKind::SmartPoster,
                b"Sp".to_vec(),
                SmartPosterCodec,
            ))
            .register(WellKnownRecordConfig::new(
                RecordKind::Action,
                b"act".to_vec(),
                ActionCodec,
            ))
            .register(WellKnownRecordConfig::new(
                RecordKind::HandoverCarrier,
                b"Hc".to_vec(),
                HandoverCarrierCodec,
            ));
        for kind in PASS_THROUGH_KINDS {
            builder = builder.pass_through(kind);
        }
        builder
    }

    /// Register a Well-Known record config.
    ///
    /// A later config for the same kind replaces the earlier one, unless the
    /// builder is [`strict`](Self::strict).
    pub fn register(mut self, config: WellKnownRecordConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Enable a pass-through family (External, Mime, AbsoluteUri, Empty, Unknown).
    ///
    /// Other kinds are ignored.
    pub fn pass_through(mut self, kind: RecordKind) -> Self {
        if PASS_THROUGH_KINDS.contains(&kind) {
            self.pass_through.insert(kind);
        } else {
            warn!(kind = kind.as_str(), "not a pass-through record kind, ignoring");
        }
        self
    }

    /// Register an external type name (`domain:type`) for decoding.
    ///
    /// External records with unregistered types decode as [`Record::Unknown`].
    pub fn external_type(mut self, domain_type: impl Into<String>) -> Self {
        self.external_types.push(domain_type.into());
        self
    }

    /// Fail [`build`](Self::build) on duplicate registrations instead of replacing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the registry.
    ///
    /// Fails with [`CodecError::DuplicateRegistration`] only in strict mode.
    pub fn build(self) -> Result<RecordRegistry> {
        let strict = self.strict;
        let (registry, duplicates) = self.assemble();
        match duplicates.into_iter().next() {
            Some(kind) if strict => Err(CodecError::DuplicateRegistration { kind }),
            _ => Ok(registry),
        }
    }

    /// Build with last-write-wins semantics, reporting what was replaced.
    fn assemble(self) -> (RecordRegistry, Vec<String>) {
        let mut duplicates = Vec::new();

        let mut well_known: HashMap<RecordKind, WellKnownRecordConfig> = HashMap::new();
        let mut last_registered: HashMap<RecordKind, usize> = HashMap::new();
        for (index, config) in self.configs.into_iter().enumerate() {
            let kind = config.kind;
            last_registered.insert(kind, index);
            if well_known.insert(kind, config).is_some() {
                warn!(kind = kind.as_str(), "replacing previously registered record config");
                duplicates.push(kind.as_str().to_string());
            }
        }

        // Type bytes shared between kinds go to the kind registered last.
        let mut live: Vec<&WellKnownRecordConfig> = well_known.values().collect();
        live.sort_by_key(|config| last_registered.get(&config.kind).copied());
        let mut by_type = HashMap::with_capacity(live.len());
        for config in live {
            if let Some(previous) = by_type.insert(config.record_type.clone(), config.kind) {
                let record_type = String::from_utf8_lossy(&config.record_type).into_owned();
                warn!(%record_type, "record type registered for more than one kind");
                duplicates.push(format!("type '{record_type}' ({previous} and {})", config.kind));
            }
        }

        let external_types = self
            .external_types
            .into_iter()
            .map(|name| name.to_ascii_lowercase().into_bytes())
            .collect();

        let registry = RecordRegistry {
            well_known,
            by_type,
            pass_through: self.pass_through.into_iter().collect(),
            external_types,
        };
        (registry, duplicates)
    }
}

/// Immutable lookup table between record variants and wire records.
pub struct RecordRegistry {
    well_known: HashMap<RecordKind, WellKnownRecordConfig>,
    by_type: HashMap<Vec<u8>, RecordKind>,
    pass_through: HashSet<RecordKind>,
    external_types: HashSet<Vec<u8>>,
}

impl std::fmt::Debug for RecordRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordRegistry")
            .field("kinds", &self.registered_kinds())
            .field("external_types", &self.external_types.len())
            .finish()
    }
}

impl RecordRegistry {
    /// Registry with the Well-Known types and all pass-through families.
    pub fn well_known() -> Self {
        RegistryBuilder::well_known().assemble().0
    }

    /// Check if `record` can be encoded.
    pub fn can_encode(&self, record: &Record) -> bool {
        self.is_registered(record.kind())
    }

    /// Check if a record kind is registered.
    pub fn is_registered(&self, kind: RecordKind) -> bool {
        self.well_known.contains_key(&kind) || self.pass_through.contains(&kind)
    }

    /// All registered record kinds, sorted.
    pub fn registered_kinds(&self) -> Vec<RecordKind> {
        let mut kinds: Vec<_> = self
            .well_known
            .keys()
            .chain(self.pass_through.iter())
            .copied()
            .collect();
        kinds.sort();
        kinds
    }

    /// Get the config bound to a Well-Known kind.
    pub fn config(&self, kind: RecordKind) -> Option<&WellKnownRecordConfig> {
        self.well_known.get(&kind)
    }

    /// Check if an external type name is registered (ASCII case-insensitive).
    pub fn has_external_type(&self, domain_type: &[u8]) -> bool {
        self.external_types.contains(&domain_type.to_ascii_lowercase())
    }

    /// Resolve the wire form of `record`.
    pub fn encode_record(&self, record: &Record, codec: &NdefMessageCodec) -> Result<NdefRecord> {
        let kind = record.kind();
        if !self.is_registered(kind) {
            return Err(CodecError::unsupported_record_type(kind.as_str()));
        }

        let id = record.id().map(<[u8]>::to_vec);
        if let Some(id) = &id {
            if id.len() > MAX_FIELD_LENGTH {
                return Err(CodecError::encoder(format!(
                    "expected record id length <= {MAX_FIELD_LENGTH} bytes, got {}",
                    id.len()
                )));
            }
        }

        if let Some(config) = self.well_known.get(&kind) {
            let payload = config.encoder.encode_payload(record, codec)?;
            return Ok(NdefRecord::new(
                Tnf::WellKnown,
                config.record_type.clone(),
                id,
                payload,
            ));
        }

        match record {
            Record::External(external) => {
                if !external.domain_type.contains(':') {
                    return Err(CodecError::encoder(format!(
                        "external type '{}' is not of the form domain:type",
                        external.domain_type
                    )));
                }
                Ok(NdefRecord::new(
                    Tnf::External,
                    external.domain_type.as_bytes().to_vec(),
                    id,
                    external.data.clone(),
                ))
            }
            Record::Mime(mime) => Ok(NdefRecord::new(
                Tnf::Mime,
                mime.content_type.as_bytes().to_vec(),
                id,
                mime.content.clone(),
            )),
            Record::AbsoluteUri(uri) => Ok(NdefRecord::new(
                Tnf::AbsoluteUri,
                uri.uri.as_bytes().to_vec(),
                id,
                Vec::new(),
            )),
            Record::Empty(_) => Ok(NdefRecord::empty()),
            Record::Unknown(unknown) => Ok(unknown.raw.clone()),
            // Well-Known kinds without a config were rejected above.
            _ => Err(CodecError::unsupported_record_type(kind.as_str())),
        }
    }

    /// Map a wire record back onto a [`Record`].
    ///
    /// Unregistered (TNF, type) combinations become [`Record::Unknown`].
    pub fn decode_record(&self, ndef: NdefRecord, codec: &NdefMessageCodec) -> Result<Record> {
        match ndef.tnf {
            Tnf::WellKnown => {
                let config = self
                    .by_type
                    .get(&ndef.record_type)
                    .and_then(|kind| self.well_known.get(kind));
                match config {
                    Some(config) => {
                        let mut record = config.decoder.decode_payload(&ndef.payload, codec)?;
                        record.set_id(ndef.id);
                        Ok(record)
                    }
                    None => Ok(self.unknown(ndef)),
                }
            }
            Tnf::External
                if self.pass_through.contains(&RecordKind::External)
                    && self.has_external_type(&ndef.record_type) =>
            {
                match String::from_utf8(ndef.record_type.clone()) {
                    Ok(domain_type) => Ok(Record::External(ExternalTypeRecord {
                        domain_type,
                        data: ndef.payload,
                        id: ndef.id,
                    })),
                    Err(_) => Ok(self.unknown(ndef)),
                }
            }
            Tnf::Mime if self.pass_through.contains(&RecordKind::Mime) => {
                match String::from_utf8(ndef.record_type.clone()) {
                    Ok(content_type) => Ok(Record::Mime(MimeRecord {
                        content_type,
                        content: ndef.payload,
                        id: ndef.id,
                    })),
                    Err(_) => Ok(self.unknown(ndef)),
                }
            }
            Tnf::AbsoluteUri
                if self.pass_through.contains(&RecordKind::AbsoluteUri)
                    && ndef.payload.is_empty() =>
            {
                match String::from_utf8(ndef.record_type.clone()) {
                    Ok(uri) => Ok(Record::AbsoluteUri(AbsoluteUriRecord { uri, id: ndef.id })),
                    Err(_) => Ok(self.unknown(ndef)),
                }
            }
            Tnf::Empty
                if self.pass_through.contains(&RecordKind::Empty)
                    && ndef.record_type.is_empty()
                    && ndef.id.is_none()
                    && ndef.payload.is_empty() =>
            {
                Ok(Record::Empty(EmptyRecord))
            }
            _ => Ok(self.unknown(ndef)),
        }
    }

    fn unknown(&self, ndef: NdefRecord) -> Record {
        debug!(
            tnf = ndef.tnf.as_str(),
            record_type = %String::from_utf8_lossy(&ndef.record_type),
            "no registered record type, keeping raw record"
        );
        Record::Unknown(UnknownRecord::new(ndef))
    }
}

/// Process-wide default registry.
///
/// Built on first use from [`RegistryBuilder::well_known`] and never mutated.
/// For custom registries, build a [`RecordRegistry`] directly.
static DEFAULT_REGISTRY: OnceLock<Arc<RecordRegistry>> = OnceLock::new();

/// Get the default registry.
pub fn default_registry() -> Arc<RecordRegistry> {
    Arc::clone(DEFAULT_REGISTRY.get_or_init(|| Arc::new(RecordRegistry::well_known())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TextRecord, UriRecord};

    struct FixedCodec(u8);

    impl PayloadEncoder for FixedCodec {
        fn encode_payload(&self, _record: &Record, _codec: &NdefMessageCodec) -> Result<Vec<u8>> {
            Ok(vec![self.0])
        }
    }

    impl PayloadDecoder for FixedCodec {
        fn decode_payload(&self, payload: &[u8], _codec: &NdefMessageCodec) -> Result<Record> {
            Ok(UriRecord::new(format!("fixed:{}", payload[0])).into())
        }
    }

    fn codec() -> NdefMessageCodec {
        NdefMessageCodec::default()
    }

    #[test]
    fn test_well_known_kinds_registered() {
        let registry = RecordRegistry::well_known();
        assert_eq!(registry.registered_kinds().len(), 10);
        assert_eq!(registry.config(RecordKind::Uri).unwrap().record_type(), b"U");
        assert_eq!(registry.config(RecordKind::Action).unwrap().record_type(), b"act");
    }

    #[test]
    fn test_can_encode() {
        let registry = RegistryBuilder::new()
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), UriCodec))
            .build()
            .unwrap();
        assert!(registry.can_encode(&UriRecord::new("tel:1").into()));
        assert!(!registry.can_encode(&TextRecord::new("hi", "en").into()));
    }

    #[test]
    fn test_encode_unregistered_kind() {
        let registry = RegistryBuilder::new().build().unwrap();
        let err = registry
            .encode_record(&UriRecord::new("tel:1").into(), &codec())
            .unwrap_err();
        assert_eq!(err, CodecError::unsupported_record_type("Uri"));
    }

    #[test]
    fn test_encode_rejects_long_id() {
        let registry = RecordRegistry::well_known();
        let record = Record::from(UriRecord::new("tel:1")).with_id(vec![0u8; 256]);
        let err = registry.encode_record(&record, &codec()).unwrap_err();
        assert!(matches!(err, CodecError::EncoderError { .. }));
    }

    #[test]
    fn test_duplicate_registration_last_write_wins() {
        let registry = RegistryBuilder::new()
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), UriCodec))
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), FixedCodec(7)))
            .build()
            .unwrap();
        let ndef = registry
            .encode_record(&UriRecord::new("tel:1").into(), &codec())
            .unwrap();
        assert_eq!(ndef.payload, vec![7]);
    }

    #[test]
    fn test_duplicate_registration_strict() {
        let result = RegistryBuilder::new()
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), UriCodec))
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), FixedCodec(7)))
            .strict(true)
            .build();
        assert!(matches!(result, Err(CodecError::DuplicateRegistration { .. })));
    }

    #[test]
    fn test_shared_record_type_resolves_to_last_registration() {
        let uri_payload = vec![0x05, b'1'];
        for _ in 0..16 {
            let text = WellKnownRecordConfig::new(RecordKind::Text, b"U".to_vec(), FixedCodec(1));
            let uri = WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), UriCodec);
            let registry = RegistryBuilder::new()
                .register(text)
                .register(uri)
                .build()
                .unwrap();
            let ndef = NdefRecord::new(Tnf::WellKnown, b"U".to_vec(), None, uri_payload.clone());
            let record = registry.decode_record(ndef, &codec()).unwrap();
            assert_eq!(record, Record::from(UriRecord::new("tel:1")));
        }
    }

    #[test]
    fn test_shared_record_type_strict() {
        let result = RegistryBuilder::new()
            .register(WellKnownRecordConfig::new(RecordKind::Text, b"U".to_vec(), TextCodec))
            .register(WellKnownRecordConfig::new(RecordKind::Uri, b"U".to_vec(), UriCodec))
            .strict(true)
            .build();
        assert!(matches!(result, Err(CodecError::DuplicateRegistration { .. })));
    }

    #[test]
    fn test_decode_unregistered_well_known_type() {
        let registry = RecordRegistry::well_known();
        let ndef = NdefRecord::new(Tnf::WellKnown, b"Xyz".to_vec(), None, vec![1, 2, 3]);
        let record = registry.decode_record(ndef.clone(), &codec()).unwrap();
        assert_eq!(record, Record::Unknown(UnknownRecord::new(ndef)));
    }

    #[test]
    fn test_decode_attaches_id() {
        let registry = RecordRegistry::well_known();
        let id = Some(b"k".to_vec());
        let ndef = NdefRecord::new(Tnf::WellKnown, b"U".to_vec(), id, vec![0x05, b'1']);
        let record = registry.decode_record(ndef, &codec()).unwrap();
        assert_eq!(record, Record::from(UriRecord::new("tel:1")).with_id(b"k".to_vec()));
    }

    #[test]
    fn test_external_type_registration_is_case_insensitive() {
        let registry = RegistryBuilder::well_known()
            .external_type("Example.com:Pos")
            .build()
            .unwrap();
        assert!(registry.has_external_type(b"example.com:pos"));
        let ndef = NdefRecord::new(Tnf::External, b"example.COM:pos".to_vec(), None, vec![9]);
        let record = registry.decode_record(ndef, &codec()).unwrap();
        assert_eq!(record.kind(), RecordKind::External);
    }

    #[test]
    fn test_external_without_separator_rejected() {
        let registry = RecordRegistry::well_known();
        let record = Record::from(ExternalTypeRecord::new("nodomain", vec![]));
        assert!(matches!(
            registry.encode_record(&record, &codec()),
            Err(CodecError::EncoderError { .. })
        ));
    }

    #[test]
    fn test_non_empty_empty_record_is_unknown() {
        let registry = RecordRegistry::well_known();
        let ndef = NdefRecord::new(Tnf::Empty, vec![], None, vec![1]);
        let record = registry.decode_record(ndef, &codec()).unwrap();
        assert_eq!(record.kind(), RecordKind::Unknown);
    }

    #[test]
    fn test_default_registry_is_shared() {
        let a = default_registry();
        let b = default_registry();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_access() {
        use std::thread;

        let registry = default_registry();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let codec = NdefMessageCodec::new(Arc::clone(&registry));
                    for _ in 0..10 {
                        let ndef = registry
                            .encode_record(&UriRecord::new("tel:1").into(), &codec)
                            .unwrap();
                        assert_eq!(ndef.record_type, b"U");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
