//! Row-ordered, column-labelled tables for raw and featurized records.
//!
//! Two tables flow through the pipeline:
//!
//! | Table | Produced by | Columns |
//! |-------|-------------|---------|
//! | [`RawTable`] | [`parse_corpus`](crate::corpus::parse_corpus) | `timestamp`, `author`, `message` |
//! | [`FeatureTable`] | [`featurize`](crate::core::featurize) | raw columns + nine flag columns |
//!
//! Raw cells are nullable: a message node may have no extractable content,
//! and the very first message of an export may not name its author. The
//! featurizer drops such rows before deriving features.
//!
//! # Example
//!
//! ```
//! use chatsift::table::{RawRecord, RawTable};
//!
//! let mut table = RawTable::new();
//! table.push(RawRecord::new("01.01.2021 10:00:00", "Alice", "Hello"));
//! table.push(RawRecord::default().with_author("Bob"));
//!
//! assert_eq!(table.columns(), ["timestamp", "author", "message"]);
//! assert_eq!(table.len(), 2);
//! assert!(!table.rows()[1].is_complete());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the export's time labels (`31.12.2021 23:59:59`).
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Column labels of a [`RawTable`], in order.
pub const RAW_COLUMNS: [&str; 3] = ["timestamp", "author", "message"];

/// Column labels of a [`FeatureTable`], in order.
pub const FEATURE_COLUMNS: [&str; 12] = [
    "timestamp",
    "author",
    "message",
    "is_text",
    "is_image",
    "is_video",
    "is_video_msg",
    "is_sticker",
    "is_voice",
    "is_bot",
    "is_forwarded",
    "is_link",
];

/// One message as it appears in the export markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Raw time label, `dd.mm.YYYY HH:MM:SS`. Not parsed yet.
    pub timestamp: Option<String>,

    /// Display name of the sender, possibly inherited from the previous message.
    pub author: Option<String>,

    /// Plain text, forwarded text or a media link.
    pub message: Option<String>,
}

impl RawRecord {
    /// Creates a record with all three cells present.
    pub fn new(
        timestamp: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            author: Some(author.into()),
            message: Some(message.into()),
        }
    }

    /// Builder method to set the timestamp cell.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Builder method to set the author cell.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Builder method to set the message cell.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns `true` if no cell is null.
    pub fn is_complete(&self) -> bool {
        self.timestamp.is_some() && self.author.is_some() && self.message.is_some()
    }
}

/// The assembled corpus: one row per message node, in parse order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<RawRecord>,
}

impl RawTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-ordered rows.
    pub fn from_rows(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }

    /// Column labels, in order.
    pub fn columns(&self) -> [&'static str; 3] {
        RAW_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RawRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRecord> {
        self.rows.iter()
    }

    /// Appends a row at the end.
    pub fn push(&mut self, record: RawRecord) {
        self.rows.push(record);
    }

    /// Keeps only the rows for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&RawRecord) -> bool) {
        self.rows.retain(keep);
    }

    pub fn into_rows(self) -> Vec<RawRecord> {
        self.rows
    }
}

impl FromIterator<RawRecord> for RawTable {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RawTable {
    type Item = RawRecord;
    type IntoIter = std::vec::IntoIter<RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a RawTable {
    type Item = &'a RawRecord;
    type IntoIter = std::slice::Iter<'a, RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A cleaned message with derived feature flags.
///
/// Exactly one of `is_text`, `is_image`, `is_video`, `is_video_msg`,
/// `is_sticker` and `is_voice` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub timestamp: NaiveDateTime,
    pub author: String,
    pub message: String,
    pub is_text: bool,
    pub is_image: bool,
    pub is_video: bool,
    pub is_video_msg: bool,
    pub is_sticker: bool,
    pub is_voice: bool,
    pub is_bot: bool,
    pub is_forwarded: bool,
    pub is_link: bool,
}

impl FeatureRecord {
    /// Renders the record back into raw form, with the timestamp in export layout.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord::new(
            self.timestamp.format(EXPORT_TIMESTAMP_FORMAT).to_string(),
            self.author.clone(),
            self.message.clone(),
        )
    }

    /// Values of the six media-type flags, in column order.
    pub fn media_flags(&self) -> [bool; 6] {
        [
            self.is_text,
            self.is_image,
            self.is_video,
            self.is_video_msg,
            self.is_sticker,
            self.is_voice,
        ]
    }
}

/// The featurizer's output table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTable {
    rows: Vec<FeatureRecord>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<FeatureRecord>) -> Self {
        Self { rows }
    }

    /// Column labels, in order.
    pub fn columns(&self) -> [&'static str; 12] {
        FEATURE_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[FeatureRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureRecord> {
        self.rows.iter()
    }

    /// Re-renders the table in raw form so it can be featurized again.
    pub fn to_raw(&self) -> RawTable {
        self.rows.iter().map(FeatureRecord::to_raw).collect()
    }

    pub fn into_rows(self) -> Vec<FeatureRecord> {
        self.rows
    }
}

impl FromIterator<FeatureRecord> for FeatureTable {
    fn from_iter<I: IntoIterator<Item = FeatureRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FeatureTable {
    type Item = &'a FeatureRecord;
    type IntoIter = std::slice::Iter<'a, FeatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
