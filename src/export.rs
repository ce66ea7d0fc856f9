//! Discovery and ordering of export pages.
//!
//! An export directory holds `messages.html` plus continuation pages
//! `messages2.html`, `messages3.html`, ... Lexical order would put
//! `messages10.html` before `messages2.html`, so continuation pages are
//! sorted by a natural key that compares digit runs numerically. The base
//! page always comes first.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsift::export::order_export_files;
//! use std::path::Path;
//!
//! # fn main() -> chatsift::Result<()> {
//! for path in order_export_files(Path::new("ChatExport_2021-01-01"))? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ChatsiftError, Result};

/// File name of the base page.
pub const BASE_FILE_NAME: &str = "messages.html";

static PAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^messages\d*\.html$").expect("page name pattern is valid"));

/// One page of an export, with its position in the assembled corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// 0 for the base page, 1..N for continuation pages in order.
    pub index: usize,
    pub path: PathBuf,
}

/// A run of a file name: either text or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameChunk {
    Text(String),
    Number(String),
}

impl NameChunk {
    fn digits(s: &str) -> &str {
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}

impl Ord for NameChunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NameChunk::Number(a), NameChunk::Number(b)) => {
                let (a, b) = (Self::digits(a), Self::digits(b));
                // Longer digit strings are larger numbers, no overflow.
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (NameChunk::Text(a), NameChunk::Text(b)) => a.cmp(b),
            (NameChunk::Number(_), NameChunk::Text(_)) => Ordering::Less,
            (NameChunk::Text(_), NameChunk::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NameChunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits a file name into alternating text and digit runs.
///
/// ```
/// use chatsift::export::{natural_key, NameChunk};
///
/// assert_eq!(
///     natural_key("messages10.html"),
///     vec![
///         NameChunk::Text("messages".into()),
///         NameChunk::Number("10".into()),
///         NameChunk::Text(".html".into()),
///     ]
/// );
/// assert!(natural_key("messages2.html") < natural_key("messages10.html"));
/// ```
pub fn natural_key(name: &str) -> Vec<NameChunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for c in name.chars() {
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != in_digits {
            chunks.push(make_chunk(std::mem::take(&mut current), in_digits));
        }
        in_digits = is_digit;
        current.push(c);
    }
    if !current.is_empty() {
        chunks.push(make_chunk(current, in_digits));
    }

    chunks
}

fn make_chunk(run: String, digits: bool) -> NameChunk {
    if digits {
        NameChunk::Number(run)
    } else {
        NameChunk::Text(run)
    }
}

/// Returns `true` if `name` looks like an export page (`messages<N>.html`).
pub fn is_page_name(name: &str) -> bool {
    PAGE_NAME.is_match(name)
}

/// Orders page file names: base page first, the rest by natural key.
///
/// # Errors
///
/// [`ChatsiftError::EmptyExport`] if `names` has no page names,
/// [`ChatsiftError::MissingBaseFile`] if pages exist but the base page does not.
pub fn order_page_names<S: AsRef<str>>(directory: &Path, names: &[S]) -> Result<Vec<String>> {
    let mut pages: Vec<&str> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| is_page_name(name))
        .collect();

    if pages.is_empty() {
        return Err(ChatsiftError::empty_export(directory));
    }

    let base_count = pages.len();
    pages.retain(|name| *name != BASE_FILE_NAME);
    if pages.len() == base_count {
        return Err(ChatsiftError::missing_base_file(directory));
    }

    pages.sort_by_cached_key(|name| natural_key(name));

    let mut ordered = Vec::with_capacity(pages.len() + 1);
    ordered.push(BASE_FILE_NAME.to_string());
    ordered.extend(pages.into_iter().map(ToString::to_string));
    Ok(ordered)
}

/// Lists `directory` and returns its export pages in corpus order.
///
/// # Errors
///
/// - [`ChatsiftError::ReadFile`] if the directory cannot be listed
/// - [`ChatsiftError::EmptyExport`] if it contains no `messages*.html`
/// - [`ChatsiftError::MissingBaseFile`] if `messages.html` is absent
pub fn order_export_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut names = Vec::new();
    let read_error = |e: std::io::Error| ChatsiftError::read_file(directory, e);
    for entry in fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        // Follows symlinks, so linked page files count.
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    let ordered = order_page_names(directory, &names)?;
    debug!(
        directory = %directory.display(),
        pages = ordered.len(),
        "ordered export pages"
    );

    Ok(ordered
        .into_iter()
        .map(|name| directory.join(name))
        .collect())
}

/// Same ordering as [`order_export_files`], with sequence indices attached.
pub fn export_files(directory: &Path) -> Result<Vec<ExportFile>> {
    Ok(order_export_files(directory)?
        .into_iter()
        .enumerate()
        .map(|(index, path)| ExportFile { index, path })
        .collect())
}
