// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Options for message encoding and decoding.

use serde::{Deserialize, Serialize};

/// Default limit on nested messages (Smart Poster inside Handover Carrier, ...).
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 4;

/// Options shared by an [`NdefMessageCodec`](super::NdefMessageCodec) and the
/// nested codecs it hands to payload codecs.
///
/// Can be loaded from TOML:
///
/// ```
/// use ndefcodec::encoding::CodecOptions;
///
/// let options: CodecOptions = toml::from_str("reject_trailing_bytes = true").unwrap();
/// assert!(options.reject_trailing_bytes);
/// assert_eq!(options.max_nesting_depth, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Maximum depth of nested NDEF messages inside payloads
    pub max_nesting_depth: usize,

    /// Whether bytes after the Message End record fail decoding
    pub reject_trailing_bytes: bool,

    /// Language code for text records built without an explicit one
    pub default_language: String,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            reject_trailing_bytes: false,
            default_language: "en".to_string(),
        }
    }
}

impl CodecOptions {
    /// Set the maximum nesting depth.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Fail decoding when bytes follow the Message End record.
    pub fn with_reject_trailing_bytes(mut self, reject: bool) -> Self {
        self.reject_trailing_bytes = reject;
        self
    }

    /// Set the default language code.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CodecOptions::default();
        assert_eq!(options.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
        assert!(!options.reject_trailing_bytes);
        assert_eq!(options.default_language, "en");
    }

    #[test]
    fn test_builder_setters() {
        let options = CodecOptions::default()
            .with_max_nesting_depth(1)
            .with_reject_trailing_bytes(true)
            .with_default_language("de");
        assert_eq!(options.max_nesting_depth, 1);
        assert!(options.reject_trailing_bytes);
        assert_eq!(options.default_language, "de");
    }

    #[test]
    fn test_from_toml() {
        let options: CodecOptions =
            toml::from_str("max_nesting_depth = 2\ndefault_language = \"fr\"").unwrap();
        assert_eq!(options.max_nesting_depth, 2);
        assert_eq!(options.default_language, "fr");
        assert!(!options.reject_trailing_bytes);
    }
}
