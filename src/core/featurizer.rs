//! Cleaning and feature derivation for the raw corpus table.
//!
//! [`featurize`] runs these steps in order:
//!
//! 1. drop rows with a null `timestamp`, `author` or `message`
//! 2. drop rows whose author contains `via @` (inline-bot relays)
//! 3. apply the optional [`NameRemap`] to authors
//! 4. parse timestamps (`dd.mm.YYYY HH:MM:SS`), failing on the first bad one
//! 5. derive the media, bot, forwarded and link flags
//!
//! # Example
//!
//! ```
//! use chatsift::core::featurize;
//! use chatsift::table::{RawRecord, RawTable};
//!
//! # fn main() -> chatsift::Result<()> {
//! let raw: RawTable = vec![
//!     RawRecord::new("01.01.2021 10:00:00", "Alice", "Hello"),
//!     RawRecord::new("01.01.2021 10:01:00", "Alice", "photos/photo1.jpg"),
//!     RawRecord::new("01.01.2021 10:02:00", "Support via @HelperBot", "hi"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let features = featurize(&raw, None)?;
//! assert_eq!(features.len(), 2);
//! assert!(features.rows()[0].is_text);
//! assert!(features.rows()[1].is_image);
//! # Ok(())
//! # }
//! ```

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

use crate::config::NameRemap;
use crate::core::media::MediaKind;
use crate::error::{ChatsiftError, Result};
use crate::table::{EXPORT_TIMESTAMP_FORMAT, FeatureRecord, FeatureTable, RawTable};

/// Author substring marking messages relayed through an inline bot.
pub const RELAY_MARKER: &str = "via @";

/// Case-sensitive author marker for reporting bots.
pub const KPI_MARKER: &str = "KPI";

// A date-time in the author column means a forwarded header was picked up
// as the sender name.
static FORWARDED_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.\d+\.\d+\W\d+:\d+:\d+").expect("forwarded author pattern is valid")
});

// chrono skips whitespace before numeric fields, so the layout is checked
// before it parses.
static EXPORT_TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}$").expect("timestamp shape pattern is valid")
});

/// Cleans `table` and derives the feature columns.
///
/// Row order is preserved, minus dropped rows. `name_remap` is applied
/// before the bot check, so renamed authors are classified by their new name.
///
/// # Errors
///
/// Returns [`ChatsiftError::TimestampParse`] for the first kept row whose
/// timestamp does not match `dd.mm.YYYY HH:MM:SS`; `row` is the index in
/// the input table.
pub fn featurize(table: &RawTable, name_remap: Option<&NameRemap>) -> Result<FeatureTable> {
    let mut rows = Vec::with_capacity(table.len());
    let mut null_rows = 0usize;
    let mut relay_rows = 0usize;

    for (row, record) in table.iter().enumerate() {
        let (Some(timestamp), Some(author), Some(message)) =
            (&record.timestamp, &record.author, &record.message)
        else {
            null_rows += 1;
            continue;
        };

        if is_relay_author(author) {
            relay_rows += 1;
            continue;
        }

        let author = match name_remap {
            Some(remap) => remap.apply(author),
            None => author.as_str(),
        };

        let timestamp = parse_export_timestamp(timestamp)
            .ok_or_else(|| ChatsiftError::timestamp_parse(row, timestamp.as_str()))?;

        rows.push(derive_features(timestamp, author, message));
    }

    debug!(
        input = table.len(),
        kept = rows.len(),
        null_rows,
        relay_rows,
        "featurized table"
    );

    Ok(FeatureTable::from_rows(rows))
}

/// Builds a feature row from already-cleaned values.
pub fn derive_features(timestamp: NaiveDateTime, author: &str, message: &str) -> FeatureRecord {
    let kind = MediaKind::classify(message);
    let is = |k: MediaKind| kind == Some(k);

    FeatureRecord {
        timestamp,
        author: author.to_string(),
        message: message.to_string(),
        is_text: kind.is_none(),
        is_image: is(MediaKind::Image),
        is_video: is(MediaKind::Video),
        is_video_msg: is(MediaKind::VideoMessage),
        is_sticker: is(MediaKind::Sticker),
        is_voice: is(MediaKind::Voice),
        is_bot: is_bot_author(author),
        is_forwarded: is_forwarded_author(author),
        is_link: is_link(message),
    }
}

/// Parses an export time label. No trimming or lenient fallbacks.
pub fn parse_export_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if !EXPORT_TIMESTAMP_SHAPE.is_match(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, EXPORT_TIMESTAMP_FORMAT).ok()
}

/// `true` for authors posting through an inline-bot relay.
pub fn is_relay_author(author: &str) -> bool {
    author.contains(RELAY_MARKER)
}

/// `true` if the author contains `bot` in any case, or `KPI`.
pub fn is_bot_author(author: &str) -> bool {
    author.to_ascii_lowercase().contains("bot") || author.contains(KPI_MARKER)
}

/// `true` if the author column holds a forwarded header with a send time.
pub fn is_forwarded_author(author: &str) -> bool {
    FORWARDED_AUTHOR.is_match(author)
}

/// `true` if the message contains an `http://` or `https://` URL.
pub fn is_link(message: &str) -> bool {
    message.contains("http://") || message.contains("https://")
}
