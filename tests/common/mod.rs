//! Shared fixture builders for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Wraps message blocks in a full export page.
pub fn page(chat_name: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"/><title>Exported Data</title></head>
<body><div class="page_wrap">
<div class="page_header"><div class="content"><div class="text bold">{chat_name}</div></div></div>
<div class="page_body chat_page"><div class="history">
{body}
</div></div></div></body></html>"#
    )
}

/// A message block. `from` is `None` for a joined follow-up.
pub fn message(id: u32, title: &str, from: Option<&str>, inner: &str) -> String {
    let (class, from) = match from {
        Some(name) => (
            "message default clearfix",
            format!(r#"<div class="from_name">{name}</div>"#),
        ),
        None => ("message default clearfix joined", String::new()),
    };
    format!(
        r#"<div class="{class}" id="message{id}"><div class="body">
<div class="pull_right date details" title="{title}">10:00</div>
{from}
{inner}
</div></div>"#
    )
}

pub fn text(body: &str) -> String {
    format!(r#"<div class="text">{body}</div>"#)
}

pub fn media(href: &str) -> String {
    format!(
        r#"<div class="media_wrap clearfix"><a class="photo_wrap clearfix pull_left" href="{href}"><img class="photo" src="{href}_thumb.jpg"/></a></div>"#
    )
}

pub fn forwarded(origin: &str, inner: &str) -> String {
    format!(
        r#"<div class="forwarded body"><div class="from_name">{origin}<span class="date details"> 01.01.2021 09:00:00</span></div>{inner}</div>"#
    )
}

/// A service block (date separator); it must not be picked up as a message.
pub fn service(id: i64, label: &str) -> String {
    format!(
        r#"<div class="message service" id="message{id}"><div class="body details">{label}</div></div>"#
    )
}

pub fn write_page(dir: &Path, name: &str, chat_name: &str, body: &str) {
    fs::write(dir.join(name), page(chat_name, body)).unwrap();
}
