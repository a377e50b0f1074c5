// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - build a one-record NDEF message and print it as hex.

use clap::Subcommand;

use crate::common::{build_codec, Result};
use ndefcodec::core::{
    Action, ActionRecord, Record, SmartPosterRecord, TextEncoding, TextRecord, UriRecord,
};
use ndefcodec::CodecOptions;

/// Encode a record.
#[derive(Subcommand, Clone, Debug)]
pub enum EncodeCmd {
    /// URI record
    Uri {
        /// The URI, prefix included
        #[arg(value_name = "URI")]
        uri: String,
    },

    /// Text record
    Text {
        /// The text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language code (defaults to the configured default language)
        #[arg(short, long)]
        lang: Option<String>,

        /// Encode as UTF-16BE instead of UTF-8
        #[arg(long)]
        utf16: bool,
    },

    /// Smart Poster record
    SmartPoster {
        /// Target URI
        #[arg(value_name = "URI")]
        uri: String,

        /// Poster title
        #[arg(short, long)]
        title: Option<String>,

        /// Title language code
        #[arg(short, long)]
        lang: Option<String>,

        /// Recommended action (default, save, edit)
        #[arg(short, long)]
        action: Option<String>,
    },
}

impl EncodeCmd {
    pub fn run(self, options: CodecOptions) -> Result<()> {
        let record = self.record(&options.default_language)?;
        let codec = build_codec(options, &[])?;
        let bytes = codec.encode_single(&record)?;
        println!("{}", hex::encode_upper(bytes));
        Ok(())
    }

    fn record(&self, default_language: &str) -> Result<Record> {
        let record = match self {
            EncodeCmd::Uri { uri } => UriRecord::new(uri.as_str()).into(),
            EncodeCmd::Text { text, lang, utf16 } => {
                let encoding = if *utf16 {
                    TextEncoding::Utf16
                } else {
                    TextEncoding::Utf8
                };
                let language = lang.as_deref().unwrap_or(default_language);
                TextRecord::with_encoding(text.as_str(), language, encoding).into()
            }
            EncodeCmd::SmartPoster {
                uri,
                title,
                lang,
                action,
            } => {
                let mut poster = SmartPosterRecord::new(UriRecord::new(uri.as_str()));
                if let Some(title) = title {
                    let language = lang.as_deref().unwrap_or(default_language);
                    poster = poster.with_title(TextRecord::new(title.as_str(), language));
                }
                if let Some(action) = action {
                    poster = poster.with_action(ActionRecord::new(action.parse::<Action>()?));
                }
                poster.into()
            }
        };
        Ok(record)
    }
}
