//! Feature extraction over parsed message tables.
//!
//! This module contains:
//! - [`featurizer`] - Cleaning rules and flag derivation
//! - [`media`] - Media attachment classification by path prefix
//! - [`stats`] - Summary counts for a featurized corpus
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatsift::core::{MediaKind, featurize};
//! use chatsift::table::{RawRecord, RawTable};
//!
//! let raw = RawTable::from_rows(vec![
//!     RawRecord::new("01.01.2021 10:00:00", "Alice", "stickers/s.webp"),
//! ]);
//! let features = featurize(&raw, None).unwrap();
//!
//! assert!(features.rows()[0].is_sticker);
//! assert_eq!(MediaKind::classify("stickers/s.webp"), Some(MediaKind::Sticker));
//! ```

pub mod featurizer;
pub mod media;
pub mod output;
pub mod stats;

pub use featurizer::{derive_features, featurize};
pub use media::MediaKind;
pub use stats::FeatureStats;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
