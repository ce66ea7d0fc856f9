//! Extraction of message records from one export page.
//!
//! Telegram's HTML export lays out each message roughly as:
//!
//! ```html
//! <div class="message default clearfix" id="message42">
//!   <div class="body">
//!     <div class="pull_right date details" title="01.01.2021 10:00:00">10:00</div>
//!     <div class="from_name">Alice</div>              <!-- omitted for follow-ups -->
//!     <div class="text">Hello</div>                    <!-- or -->
//!     <div class="media_wrap clearfix"><a href="photos/photo_1.jpg">...</a></div>
//!     <div class="forwarded body">...</div>            <!-- forwarded content -->
//!   </div>
//! </div>
//! ```
//!
//! [`parse_page`] is a pure function: the author continuity token goes in as
//! `previous_author` and comes back out as [`ParsedPage::last_author`], so
//! callers decide how state flows between pages.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ChatsiftError, Result};
use crate::table::RawRecord;

struct PageSelectors {
    message: Selector,
    time_label: Selector,
    from_name: Selector,
    text: Selector,
    media_link: Selector,
    forwarded: Selector,
    chat_name: Selector,
}

static SELECTORS: LazyLock<PageSelectors> = LazyLock::new(|| PageSelectors {
    message: selector(r#"div[id*="message"][class^="message default clearfix"]"#),
    time_label: selector("div.body div.pull_right"),
    from_name: selector("div.from_name"),
    text: selector("div.text"),
    media_link: selector("div.media_wrap a"),
    forwarded: selector("div.forwarded"),
    chat_name: selector("div.text.bold"),
});

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Output of parsing one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// One record per message node, in document order.
    pub records: Vec<RawRecord>,

    /// The page title, if the page has one.
    pub chat_name: Option<String>,

    /// Author of the last record, or the incoming token if the page had no messages.
    pub last_author: Option<String>,
}

/// Parses a page's markup into records.
///
/// `previous_author` is the author of the last message seen before this
/// page; messages without a `from_name` inherit it.
///
/// # Errors
///
/// Returns [`ChatsiftError::MalformedMessage`] if a message node has no time
/// label. The error carries no path; callers reading from disk attach one
/// with [`ChatsiftError::with_path`].
pub fn parse_page(document: &Html, previous_author: Option<String>) -> Result<ParsedPage> {
    let sel = &*SELECTORS;
    let mut author = previous_author;
    let mut records = Vec::new();

    for (position, node) in document.select(&sel.message).enumerate() {
        let timestamp = parse_timestamp(node, position)?;
        author = parse_author(node).or(author);
        let message = parse_content(node);

        records.push(RawRecord {
            timestamp,
            author: author.clone(),
            message,
        });
    }

    Ok(ParsedPage {
        records,
        chat_name: parse_chat_name(document),
        last_author: author,
    })
}

/// Convenience wrapper over [`parse_page`] for markup held in a string.
pub fn parse_page_str(html: &str, previous_author: Option<String>) -> Result<ParsedPage> {
    parse_page(&Html::parse_document(html), previous_author)
}

/// Reads the raw `title` of the message's time label.
///
/// A missing label is an error; a label without a `title` yields `None`.
fn parse_timestamp(node: ElementRef<'_>, position: usize) -> Result<Option<String>> {
    let label = node.select(&SELECTORS.time_label).next().ok_or_else(|| {
        let id = node.value().id().unwrap_or("?");
        ChatsiftError::malformed_message(
            None,
            position,
            format!("node '{id}' has no time label (div.body div.pull_right)"),
        )
    })?;

    Ok(label.value().attr("title").map(ToString::to_string))
}

/// Reads the sender name, if the node carries one.
///
/// This takes the first `from_name` anywhere in the node. For follow-up
/// messages that only hold a forwarded body, that is the forwarded header,
/// whose text ends with the original send time.
fn parse_author(node: ElementRef<'_>) -> Option<String> {
    node.select(&SELECTORS.from_name)
        .next()
        .and_then(trimmed_text)
}

/// Own content first, forwarded content second.
fn parse_content(node: ElementRef<'_>) -> Option<String> {
    normal_content(node).or_else(|| forwarded_content(node))
}

fn normal_content(node: ElementRef<'_>) -> Option<String> {
    let sel = &*SELECTORS;
    let text = node
        .select(&sel.text)
        .filter(|el| !inside_forwarded(*el, node))
        .find_map(trimmed_text);

    text.or_else(|| {
        node.select(&sel.media_link)
            .filter(|el| !inside_forwarded(*el, node))
            .find_map(href)
    })
}

fn forwarded_content(node: ElementRef<'_>) -> Option<String> {
    let sel = &*SELECTORS;
    let wrapper = node.select(&sel.forwarded).next()?;

    wrapper
        .select(&sel.text)
        .find_map(trimmed_text)
        .or_else(|| wrapper.select(&sel.media_link).find_map(href))
}

fn parse_chat_name(document: &Html) -> Option<String> {
    document
        .select(&SELECTORS.chat_name)
        .next()
        .and_then(trimmed_text)
}

/// `true` if `el` sits below a `div.forwarded` that is itself below `root`.
fn inside_forwarded(el: ElementRef<'_>, root: ElementRef<'_>) -> bool {
    el.ancestors()
        .take_while(|n| n.id() != root.id())
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == "div" && a.value().classes().any(|c| c == "forwarded"))
}

fn trimmed_text(el: ElementRef<'_>) -> Option<String> {
    let text = el.text().collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn href(el: ElementRef<'_>) -> Option<String> {
    el.value()
        .attr("href")
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(ToString::to_string)
}
