//! Summary counts for a featurized corpus.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::featurizer::is_relay_author;
use crate::table::{FeatureTable, RawTable};

/// Statistics about a featurizing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureStats {
    pub raw_count: usize,
    pub kept_count: usize,
    /// Rows dropped for a null timestamp, author or message.
    pub null_rows: usize,
    /// Rows dropped as inline-bot relays.
    pub relay_rows: usize,
    pub text: usize,
    pub images: usize,
    pub videos: usize,
    pub video_messages: usize,
    pub stickers: usize,
    pub voice: usize,
    pub bots: usize,
    pub forwarded: usize,
    pub links: usize,
    pub authors: usize,
}

impl FeatureStats {
    /// Counts rows and flags of `features`, the featurized form of `raw`.
    pub fn from_tables(raw: &RawTable, features: &FeatureTable) -> Self {
        let null_rows = raw.iter().filter(|r| !r.is_complete()).count();
        let relay_rows = raw
            .iter()
            .filter(|r| r.is_complete())
            .filter(|r| r.author.as_deref().is_some_and(is_relay_author))
            .count();

        let mut stats = Self {
            raw_count: raw.len(),
            kept_count: features.len(),
            null_rows,
            relay_rows,
            ..Self::default()
        };

        let mut authors = HashSet::new();
        for f in features {
            stats.text += usize::from(f.is_text);
            stats.images += usize::from(f.is_image);
            stats.videos += usize::from(f.is_video);
            stats.video_messages += usize::from(f.is_video_msg);
            stats.stickers += usize::from(f.is_sticker);
            stats.voice += usize::from(f.is_voice);
            stats.bots += usize::from(f.is_bot);
            stats.forwarded += usize::from(f.is_forwarded);
            stats.links += usize::from(f.is_link);
            authors.insert(f.author.as_str());
        }
        stats.authors = authors.len();

        stats
    }

    pub fn dropped_count(&self) -> usize {
        self.raw_count.saturating_sub(self.kept_count)
    }

    /// Share of raw rows that were dropped, in percent.
    pub fn drop_ratio(&self) -> f64 {
        if self.raw_count == 0 {
            return 0.0;
        }
        self.dropped_count() as f64 / self.raw_count as f64 * 100.0
    }
}
