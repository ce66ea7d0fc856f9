//! Synthetic Telegram HTML export generator for stress testing chatsift.
//!
//! Usage: cargo run --features gen-test --bin gen_export -- [messages] [output_dir] [per_page] [malformed_every]
//! Example: cargo run --features gen-test --bin gen_export -- 100000 heavy_export 1000
//!
//! With `malformed_every = N` (N > 0), every Nth message gets a time label
//! with a zone suffix, which the featurizer rejects. Off by default.

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "NewsBot",
    "Team KPI",
    "Support via @HelperBot",
    "User;With;Semicolons",
    "User &amp; Co",
    "🔥FireUser🔥",
];

const TEXTS: &[&str] = &[
    "Hello",
    "See https://example.com/page?id=1",
    "Привет, как дела?",
    "Line one<br>line two",
    "&lt;not a tag&gt;",
    "Emoji 😀🤖🌈",
    "     ",
];

const MEDIA: &[&str] = &[
    "photos/photo_1@01-01-2021_10-00-00.jpg",
    "video_files/clip.mp4",
    "round_video_messages/round.mp4",
    "stickers/sticker.webp",
    "voice_messages/audio_1.ogg",
    "files/report.pdf",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_export");
    let per_page: usize = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1000);
    let malformed_every: Option<usize> = args
        .get(4)
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0);

    println!("🧪 Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Per page: {}", per_page);
    if let Some(n) = malformed_every {
        println!("   Malformed timestamp every {} messages", n);
    }
    println!();

    if let Err(e) = generate(count, Path::new(output), per_page, malformed_every) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(
    count: usize,
    dir: &Path,
    per_page: usize,
    malformed_every: Option<usize>,
) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;
    let pages = count.div_ceil(per_page).max(1);

    for page in 0..pages {
        let name = if page == 0 {
            "messages.html".to_string()
        } else {
            format!("messages{}.html", page + 1)
        };
        let file = File::create(dir.join(&name))?;
        let mut writer = BufWriter::with_capacity(1024 * 1024, file);

        let header = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"/></head><body>\n\
            <div class=\"page_header\"><div class=\"content\"><div class=\"text bold\">Synthetic Chat</div></div></div>\n\
            <div class=\"history\">\n";
        writer.write_all(header.as_bytes())?;
        bytes_written += header.len();

        let first = page * per_page;
        let last = (first + per_page).min(count);
        for i in first..last {
            let block = generate_message(&mut rng, i, malformed_every);
            bytes_written += block.len();
            writer.write_all(block.as_bytes())?;
        }

        writer.write_all(b"</div></body></html>\n")?;
        writer.flush()?;

        eprint!(
            "\r   Wrote {} ({}/{} pages, {:.1} MB)",
            name,
            page + 1,
            pages,
            bytes_written as f64 / 1_000_000.0
        );
    }

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

/// One message block; roughly a third are joined (no author) and a tenth
/// are forwarded.
fn generate_message(rng: &mut impl Rng, i: usize, malformed_every: Option<usize>) -> String {
    let seconds = i % 60;
    let minutes = (i / 60) % 60;
    let hours = (i / 3600) % 24;
    let day = (i / 86_400) % 28 + 1;
    let mut title = format!("{:02}.01.2021 {:02}:{:02}:{:02}", day, hours, minutes, seconds);
    if malformed_every.is_some_and(|n| i % n == n - 1) {
        title.push_str(" UTC+03:00");
    }

    let joined = i > 0 && rng.gen_bool(0.35);
    let class = if joined {
        "message default clearfix joined"
    } else {
        "message default clearfix"
    };
    let from = if joined {
        String::new()
    } else {
        let author = AUTHORS.choose(rng).copied().unwrap_or("Alice");
        format!("<div class=\"from_name\">{}</div>\n", author)
    };

    let content = match rng.gen_range(0..10) {
        0..=5 => {
            let text = TEXTS.choose(rng).copied().unwrap_or("Hello");
            format!("<div class=\"text\">{}</div>\n", text)
        }
        6..=8 => {
            let href = MEDIA.choose(rng).copied().unwrap_or("photos/p.jpg");
            format!(
                "<div class=\"media_wrap clearfix\"><a class=\"media clearfix\" href=\"{}\"></a></div>\n",
                href
            )
        }
        _ => format!(
            "<div class=\"forwarded body\"><div class=\"from_name\">Origin {:02}.01.2021 10:00:00</div>\n\
             <div class=\"text\">forwarded {}</div></div>\n",
            day, i
        ),
    };

    format!(
        "<div class=\"{class}\" id=\"message{id}\"><div class=\"body\">\n\
         <div class=\"pull_right date details\" title=\"{title}\">{hours:02}:{minutes:02}</div>\n\
         {from}{content}</div></div>\n",
        class = class,
        id = i + 1,
        title = title,
        hours = hours,
        minutes = minutes,
        from = from,
        content = content,
    )
}
