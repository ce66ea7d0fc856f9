//! Integration tests over on-disk export directories.

mod common;

use chatsift::prelude::*;
use chrono::NaiveDate;
use common::{forwarded, media, message, service, text, write_page};
use std::fs;
use tempfile::tempdir;

fn ts(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn test_two_message_scenario() {
    let dir = tempdir().unwrap();
    let body = [
        message(1, "01.01.2021 10:00:00", Some("Alice"), &text("Hello")),
        message(2, "01.01.2021 10:01:00", None, &media("photos/p.jpg")),
    ]
    .concat();
    write_page(dir.path(), "messages.html", "Friends", &body);

    let files = order_export_files(dir.path()).unwrap();
    let (raw, chat_name) = parse_corpus(&files, &CorpusConfig::default()).unwrap();
    assert_eq!(chat_name.as_deref(), Some("Friends"));
    assert_eq!(
        raw.rows(),
        [
            RawRecord::new("01.01.2021 10:00:00", "Alice", "Hello"),
            RawRecord::new("01.01.2021 10:01:00", "Alice", "photos/p.jpg"),
        ]
    );

    let features = featurize(&raw, None).unwrap();
    assert_eq!(features.len(), 2);

    let first = &features.rows()[0];
    assert_eq!(first.timestamp, ts(10, 0, 0));
    assert!(first.is_text);
    assert!(!first.is_image);

    let second = &features.rows()[1];
    assert_eq!(second.author, "Alice");
    assert!(second.is_image);
    assert!(!second.is_text);
}

#[test]
fn test_author_continuity_across_files() {
    let dir = tempdir().unwrap();
    write_page(
        dir.path(),
        "messages.html",
        "Chat",
        &message(1, "01.01.2021 10:00:00", Some("Bob"), &text("first")),
    );
    write_page(
        dir.path(),
        "messages2.html",
        "Chat",
        &message(2, "01.01.2021 10:00:01", None, &text("continued")),
    );

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    assert_eq!(raw.rows()[1].author.as_deref(), Some("Bob"));
}

#[test]
fn test_pages_parsed_in_natural_order() {
    let dir = tempdir().unwrap();
    for (i, name) in ["messages.html", "messages2.html", "messages3.html", "messages10.html"]
        .iter()
        .enumerate()
    {
        let id = u32::try_from(i).unwrap() + 1;
        write_page(
            dir.path(),
            name,
            "Chat",
            &message(id, &format!("01.01.2021 10:00:{id:02}"), Some("A"), &text(name)),
        );
    }

    let files = order_export_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["messages.html", "messages2.html", "messages3.html", "messages10.html"]
    );

    let (raw, _) = parse_corpus(&files, &CorpusConfig::default()).unwrap();
    let messages: Vec<_> = raw.iter().map(|r| r.message.as_deref().unwrap()).collect();
    assert_eq!(messages, names);
}

#[test]
fn test_relay_author_dropped() {
    let dir = tempdir().unwrap();
    let body = [
        message(1, "01.01.2021 10:00:00", Some("Alice"), &text("question")),
        message(2, "01.01.2021 10:00:05", Some("Support via @HelperBot"), &text("answer")),
        message(3, "01.01.2021 10:00:09", Some("Alice"), &text("thanks")),
    ]
    .concat();
    write_page(dir.path(), "messages.html", "Chat", &body);

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    assert_eq!(raw.len(), 3);

    let features = featurize(&raw, None).unwrap();
    let authors: Vec<_> = features.iter().map(|f| f.author.as_str()).collect();
    assert_eq!(authors, ["Alice", "Alice"]);

    let stats = FeatureStats::from_tables(&raw, &features);
    assert_eq!(stats.relay_rows, 1);
}

#[test]
fn test_forwarded_fallback_and_flag() {
    let dir = tempdir().unwrap();
    let body = [
        message(1, "01.01.2021 10:00:00", Some("Alice"), &text("look")),
        message(
            2,
            "01.01.2021 10:00:30",
            None,
            &forwarded("Channel", &text("breaking news")),
        ),
    ]
    .concat();
    write_page(dir.path(), "messages.html", "Chat", &body);

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    let second = &raw.rows()[1];
    assert_eq!(second.message.as_deref(), Some("breaking news"));
    assert_eq!(
        second.author.as_deref(),
        Some("Channel 01.01.2021 09:00:00")
    );

    let features = featurize(&raw, None).unwrap();
    assert!(features.rows()[1].is_forwarded);
    assert!(!features.rows()[0].is_forwarded);
}

#[test]
fn test_service_blocks_ignored() {
    let dir = tempdir().unwrap();
    let body = [
        service(-1, "1 January 2021"),
        message(1, "01.01.2021 10:00:00", Some("Alice"), &text("hi")),
    ]
    .concat();
    write_page(dir.path(), "messages.html", "Chat", &body);

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    assert_eq!(raw.len(), 1);
}

#[test]
fn test_all_media_kinds_end_to_end() {
    let dir = tempdir().unwrap();
    let hrefs = [
        "photos/a.jpg",
        "video_files/b.mp4",
        "round_video_messages/c.mp4",
        "stickers/d.webp",
        "voice_messages/e.ogg",
        "files/f.pdf",
    ];
    let body: String = hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| {
            let id = u32::try_from(i).unwrap();
            message(id, &format!("01.01.2021 10:00:{id:02}"), Some("Al"), &media(href))
        })
        .collect();
    write_page(dir.path(), "messages.html", "Chat", &body);

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    let features = featurize(&raw, None).unwrap();
    let stats = FeatureStats::from_tables(&raw, &features);

    assert_eq!(stats.images, 1);
    assert_eq!(stats.videos, 1);
    assert_eq!(stats.video_messages, 1);
    assert_eq!(stats.stickers, 1);
    assert_eq!(stats.voice, 1);
    // Unknown attachment kinds count as text.
    assert_eq!(stats.text, 1);
    assert!(features.rows()[5].is_text);
}

#[test]
fn test_name_remap_from_file() {
    let dir = tempdir().unwrap();
    write_page(
        dir.path(),
        "messages.html",
        "Chat",
        &message(1, "01.01.2021 10:00:00", Some("Ivan P."), &text("hi")),
    );
    let remap_path = dir.path().join("names.json");
    fs::write(&remap_path, r#"{"Ivan P.": "Ivan"}"#).unwrap();

    let remap = NameRemap::from_json_file(&remap_path).unwrap();
    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    let features = featurize(&raw, Some(&remap)).unwrap();
    assert_eq!(features.rows()[0].author, "Ivan");
}

#[test]
fn test_timestamp_with_zone_suffix_fails() {
    let dir = tempdir().unwrap();
    write_page(
        dir.path(),
        "messages.html",
        "Chat",
        &message(1, "01.01.2021 10:00:00 UTC+03:00", Some("A"), &text("hi")),
    );

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    let err = featurize(&raw, None).unwrap_err();
    assert!(err.is_timestamp_parse());
}

#[test]
fn test_missing_base_file() {
    let dir = tempdir().unwrap();
    write_page(
        dir.path(),
        "messages2.html",
        "Chat",
        &message(1, "01.01.2021 10:00:00", Some("A"), &text("hi")),
    );

    let err = order_export_files(dir.path()).unwrap_err();
    assert!(err.is_missing_base_file());
}

#[test]
fn test_csv_output_round_trip_through_reader() {
    let dir = tempdir().unwrap();
    let body = [
        message(1, "01.01.2021 10:00:00", Some("Alice"), &text("a;b \"quoted\"")),
        message(2, "01.01.2021 10:00:01", Some("NewsBot"), &text("https://t.me/x")),
    ]
    .concat();
    write_page(dir.path(), "messages.html", "Chat", &body);

    let (raw, _) = parse_export_dir(dir.path(), &CorpusConfig::default()).unwrap();
    let features = featurize(&raw, None).unwrap();

    let out = dir.path().join("features.csv");
    write_to_format(&features, out.to_str().unwrap(), OutputFormat::Csv).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&out)
        .unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 12);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "a;b \"quoted\"");
    assert_eq!(&rows[1][9], "true"); // is_bot
    assert_eq!(&rows[1][11], "true"); // is_link
}
