//! Human-readable dumps of a store's words.
//!
//! None of these are stable formats; they exist for eyeballing a bitmap
//! after a sequence of operations.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::{BitRangeStore, Word};

/// Output style for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One 16-digit hex value per word under a Hi/Lo header.
    #[default]
    Words,
    /// One line per word, bytes most-significant first.
    Bytes,
    /// JSON [`Snapshot`].
    Json,
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "words" => Ok(RenderStyle::Words),
            "bytes" => Ok(RenderStyle::Bytes),
            "json" => Ok(RenderStyle::Json),
            other => Err(format!(
                "unknown render style '{}' (expected words, bytes or json)",
                other
            )),
        }
    }
}

/// Word-per-line hex dump:
///
/// ```text
///       Hi                Lo
/// map[0]: 0000000000000000
/// ```
pub struct WordDump<'a>(pub &'a [Word]);

impl fmt::Display for WordDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      Hi                Lo")?;
        for (i, word) in self.0.iter().enumerate() {
            writeln!(f, "map[{}]: {:016x}", i, word)?;
        }
        Ok(())
    }
}

/// Byte-per-column dump, most-significant byte first:
///
/// ```text
/// map[0]: 7: 00 00 00 00 00 00 00 00 :0
/// ```
pub struct ByteDump<'a>(pub &'a [Word]);

impl fmt::Display for ByteDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            write!(f, "map[{}]: {}: ", i, Word::BITS / 8 - 1)?;
            for byte in word.to_be_bytes() {
                write!(f, "{:02x} ", byte)?;
            }
            writeln!(f, ":0")?;
        }
        Ok(())
    }
}

/// Serializable view of a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub capacity: usize,
    pub ones: usize,
    pub words: Vec<Word>,
}

impl From<&BitRangeStore> for Snapshot {
    fn from(store: &BitRangeStore) -> Self {
        Snapshot {
            capacity: store.capacity(),
            ones: store.count_ones(),
            words: store.render(),
        }
    }
}

/// Renders `store` in the requested style. Text styles end with a newline.
pub fn render(store: &BitRangeStore, style: RenderStyle) -> Result<String> {
    let out = match style {
        RenderStyle::Words => WordDump(store.words()).to_string(),
        RenderStyle::Bytes => ByteDump(store.words()).to_string(),
        RenderStyle::Json => {
            let mut json = serde_json::to_string(&Snapshot::from(store))
                .context("serialize bitmap snapshot")?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}
