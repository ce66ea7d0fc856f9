//! Assembly of a whole export into one raw table.
//!
//! Pages must be parsed in export order: a single [`PageParser`] is driven
//! over every file so that author continuity carries across page breaks.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::CorpusConfig;
use crate::error::Result;
use crate::export::order_export_files;
use crate::parser::PageParser;
use crate::table::RawTable;

/// Parses the given pages in order into a `timestamp, author, message` table.
///
/// Returns the table and the chat name, if any page carried one.
///
/// # Errors
///
/// Stops at the first page that cannot be read, decoded or parsed; the
/// error names that page.
///
/// # Example
///
/// ```rust,no_run
/// use chatsift::config::CorpusConfig;
/// use chatsift::corpus::parse_corpus;
/// use chatsift::export::order_export_files;
/// use std::path::Path;
///
/// # fn main() -> chatsift::Result<()> {
/// let files = order_export_files(Path::new("ChatExport"))?;
/// let (table, chat_name) = parse_corpus(&files, &CorpusConfig::default())?;
/// println!("{:?}: {} rows", chat_name, table.len());
/// # Ok(())
/// # }
/// ```
pub fn parse_corpus<P: AsRef<Path>>(
    files: &[P],
    config: &CorpusConfig,
) -> Result<(RawTable, Option<String>)> {
    let mut parser = PageParser::with_config(config)?;

    for file in files {
        parser.parse_file(file.as_ref())?;
    }

    let (table, chat_name) = parser.into_table();
    if chat_name.is_none() && !files.is_empty() {
        warn!(pages = files.len(), "no page carried a chat name");
    }
    info!(
        pages = files.len(),
        records = table.len(),
        chat = chat_name.as_deref().unwrap_or("<unknown>"),
        "assembled corpus"
    );

    Ok((table, chat_name))
}

/// Orders the pages in `directory` and parses them.
pub fn parse_export_dir(
    directory: &Path,
    config: &CorpusConfig,
) -> Result<(RawTable, Option<String>)> {
    let files: Vec<PathBuf> = order_export_files(directory)?;
    parse_corpus(&files, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_page(dir: &Path, name: &str, title: &str, body: &str) {
        let html = format!(
            r#"<html><body><div class="page_header"><div class="text bold">{title}</div></div>
<div class="history">{body}</div></body></html>"#
        );
        fs::write(dir.join(name), html).unwrap();
    }

    fn message(id: u32, from: Option<&str>, text: &str) -> String {
        let from = from
            .map(|f| format!(r#"<div class="from_name">{f}</div>"#))
            .unwrap_or_default();
        format!(
            r#"<div class="message default clearfix" id="message{id}"><div class="body">
<div class="pull_right date details" title="01.01.2021 10:{id:02}:00">10:00</div>{from}
<div class="text">{text}</div></div></div>"#
        )
    }

    #[test]
    fn test_parse_export_dir_in_natural_order() {
        let tmp = tempfile::tempdir().unwrap();
        write_page(tmp.path(), "messages.html", "Chat", &message(1, Some("Alice"), "p1"));
        write_page(tmp.path(), "messages2.html", "Chat", &message(2, None, "p2"));
        write_page(tmp.path(), "messages10.html", "Chat", &message(10, Some("Bob"), "p10"));
        write_page(tmp.path(), "messages3.html", "Chat", &message(3, None, "p3"));

        let (table, name) = parse_export_dir(tmp.path(), &CorpusConfig::default()).unwrap();
        assert_eq!(name.as_deref(), Some("Chat"));

        let rows: Vec<_> = table
            .iter()
            .map(|r| {
                (
                    r.author.as_deref().unwrap(),
                    r.message.as_deref().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            rows,
            [
                ("Alice", "p1"),
                ("Alice", "p2"),
                ("Alice", "p3"),
                ("Bob", "p10")
            ]
        );
    }

    #[test]
    fn test_parse_corpus_unknown_encoding() {
        let files: [&Path; 0] = [];
        let err = parse_corpus(&files, &CorpusConfig::new().with_encoding("nope")).unwrap_err();
        assert!(err.is_encoding());
    }

    #[test]
    fn test_parse_corpus_empty_file_list() {
        let files: [&Path; 0] = [];
        let (table, name) = parse_corpus(&files, &CorpusConfig::default()).unwrap();
        assert!(table.is_empty());
        assert!(name.is_none());
    }

    #[test]
    fn test_parse_corpus_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let files = [tmp.path().join("messages.html")];
        let err = parse_corpus(&files, &CorpusConfig::default()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_corpus_names_unreadable_page() {
        let tmp = tempfile::tempdir().unwrap();
        write_page(tmp.path(), "messages.html", "Chat", &message(1, Some("Alice"), "p1"));
        let files = [tmp.path().join("messages.html"), tmp.path().join("messages2.html")];

        let err = parse_corpus(&files, &CorpusConfig::default()).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("messages2.html"));
    }
}
