//! Markup-level parsing utilities.
//!
//! This module holds the pure, state-free extraction code used by the
//! stateful [`PageParser`](crate::parser::PageParser).

pub mod page;

pub use page::{ParsedPage, parse_page, parse_page_str};
