//! # Chatsift
//!
//! A Rust library for turning Telegram Desktop HTML chat exports into a
//! per-message feature table.
//!
//! ## Overview
//!
//! A Telegram export directory holds `messages.html`, `messages2.html`, ...
//! `messagesN.html`. Chatsift:
//!
//! 1. orders those pages naturally ([`export::order_export_files`])
//! 2. parses them into a `timestamp, author, message` table, carrying the
//!    author of grouped messages across pages ([`corpus::parse_corpus`])
//! 3. cleans the table and derives media, bot, forwarded and link flags
//!    ([`core::featurize`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsift::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let files = order_export_files(Path::new("ChatExport_2024-06-15"))?;
//!     let (raw, chat_name) = parse_corpus(&files, &CorpusConfig::default())?;
//!     let features = featurize(&raw, None)?;
//!
//!     println!("{:?}: {} rows", chat_name, features.len());
//!     write_csv(&features, "features.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`export`] - Page discovery and natural ordering
//! - [`parsing`] - Single-page HTML extraction ([`parse_page`](parsing::parse_page))
//! - [`parser`] - [`PageParser`](parser::PageParser), stateful reader across pages
//! - [`corpus`] - Whole-export assembly
//! - [`table`] - [`RawTable`](table::RawTable) and [`FeatureTable`](table::FeatureTable)
//! - [`core`] - Featurizer, media classification, stats, output writers
//! - [`config`] - [`CorpusConfig`](config::CorpusConfig), [`NameRemap`](config::NameRemap)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`write_to_format`](format::write_to_format)
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`error`] - [`ChatsiftError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod export;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod table;

pub use error::{ChatsiftError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatsiftError, Result};

    pub use crate::config::{CorpusConfig, NameRemap};
    pub use crate::corpus::{parse_corpus, parse_export_dir};
    pub use crate::export::order_export_files;
    pub use crate::parser::PageParser;
    pub use crate::parsing::{ParsedPage, parse_page, parse_page_str};
    pub use crate::table::{FeatureRecord, FeatureTable, RawRecord, RawTable};

    pub use crate::core::{FeatureStats, MediaKind, featurize};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, write_to_format};
}
