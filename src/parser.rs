//! Stateful page parser that accumulates records across an export.
//!
//! Telegram omits the sender label for consecutive messages from the same
//! author, and a run can span a page break. [`PageParser`] therefore keeps
//! the last seen author between calls, together with every record parsed so
//! far and the chat name from the first page that carried one.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsift::parser::PageParser;
//! use std::path::Path;
//!
//! # fn main() -> chatsift::Result<()> {
//! let mut parser = PageParser::new();
//! parser.parse_file(Path::new("export/messages.html"))?;
//! parser.parse_file(Path::new("export/messages2.html"))?;
//!
//! println!("{:?}: {} messages", parser.chat_name(), parser.records().len());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use scraper::Html;
use tracing::debug;

use crate::config::CorpusConfig;
use crate::error::{ChatsiftError, Result};
use crate::parsing::{ParsedPage, parse_page};
use crate::table::{RawRecord, RawTable};

/// Parses export pages one at a time, threading author continuity between them.
#[derive(Debug, Clone)]
pub struct PageParser {
    encoding: &'static Encoding,
    previous_author: Option<String>,
    chat_name: Option<String>,
    records: Vec<RawRecord>,
}

impl PageParser {
    /// Creates a UTF-8 parser with empty state.
    pub fn new() -> Self {
        Self::with_encoding(encoding_rs::UTF_8)
    }

    /// Creates a parser that decodes page files with `encoding`.
    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            previous_author: None,
            chat_name: None,
            records: Vec::new(),
        }
    }

    /// Creates a parser from a [`CorpusConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::UnknownEncoding`] for an unrecognised label.
    pub fn with_config(config: &CorpusConfig) -> Result<Self> {
        Ok(Self::with_encoding(config.resolve_encoding()?))
    }

    /// Reads, decodes and parses one page file.
    ///
    /// Returns the number of records the page contributed.
    pub fn parse_file(&mut self, path: &Path) -> Result<usize> {
        let html = {
            let bytes = fs::read(path).map_err(|e| ChatsiftError::read_file(path, e))?;
            decode(&bytes, self.encoding, path)?
        };

        let added = self.parse_str(&html).map_err(|e| e.with_path(path))?;
        debug!(path = %path.display(), records = added, "parsed export page");
        Ok(added)
    }

    /// Parses one page held in memory.
    ///
    /// Returns the number of records the page contributed. On error the
    /// parser state is left as it was before the call.
    pub fn parse_str(&mut self, html: &str) -> Result<usize> {
        let document = Html::parse_document(html);
        let page = parse_page(&document, self.previous_author.clone())?;
        Ok(self.absorb(page))
    }

    fn absorb(&mut self, page: ParsedPage) -> usize {
        let added = page.records.len();
        self.records.extend(page.records);
        self.previous_author = page.last_author;

        if self.chat_name.is_none() {
            self.chat_name = page.chat_name;
        }

        added
    }

    /// Every record parsed so far, in parse order.
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// The chat's display name, once a page has provided it.
    pub fn chat_name(&self) -> Option<&str> {
        self.chat_name.as_deref()
    }

    /// The continuity token: author of the most recent record.
    pub fn last_author(&self) -> Option<&str> {
        self.previous_author.as_deref()
    }

    /// Consumes the parser, returning the records as a table and the chat name.
    pub fn into_table(self) -> (RawTable, Option<String>) {
        (RawTable::from_rows(self.records), self.chat_name)
    }
}

impl Default for PageParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes page bytes, honouring a byte-order mark over the configured encoding.
fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) => (bom_encoding, &bytes[bom_len..]),
        None => (encoding, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(Cow::into_owned)
        .ok_or_else(|| ChatsiftError::encoding(path, encoding.name()))
}
