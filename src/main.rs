//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatsift::ChatsiftError;
use chatsift::cli::Args;
use chatsift::config::{CorpusConfig, NameRemap};
use chatsift::core::{FeatureStats, featurize};
use chatsift::corpus::parse_corpus;
use chatsift::export::order_export_files;
use chatsift::format::{OutputFormat, write_to_format};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    println!("📦 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input.display());
    println!("💾 Output:   {output_path}");
    println!("📄 Format:   {format}");
    println!("🔤 Encoding: {}", args.encoding);

    let name_remap = match &args.rename {
        Some(path) => {
            let remap = NameRemap::from_json_file(path)?;
            println!("🏷️  Renames:  {} names from {}", remap.len(), path.display());
            Some(remap)
        }
        None => None,
    };
    println!();

    // Step 1: Order pages
    let files = order_export_files(&args.input)?;
    println!("⏳ Parsing {} page(s)...", files.len());

    // Step 2: Parse with author continuity across pages
    let parse_start = Instant::now();
    let config = CorpusConfig::new().with_encoding(args.encoding.clone());
    let (raw, chat_name) = parse_corpus(&files, &config)?;
    println!(
        "   Found {} messages ({:.2}s)",
        raw.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if let Some(name) = &chat_name {
        println!("   Chat: {name}");
    }

    // Step 3: Clean and derive features
    println!("🧮 Featurizing...");
    let features = featurize(&raw, name_remap.as_ref())?;
    let stats = FeatureStats::from_tables(&raw, &features);
    println!(
        "   Kept {} rows ({:.1}% dropped)",
        stats.kept_count,
        stats.drop_ratio()
    );

    // Step 4: Write
    println!("💾 Writing {format}...");
    write_to_format(&features, &output_path, format)?;

    println!();
    println!("✅ Done! Output saved to {output_path}");

    println!();
    println!("📊 Summary:");
    println!("   Raw:        {} rows", stats.raw_count);
    println!("   Null rows:  {}", stats.null_rows);
    println!("   Relay rows: {}", stats.relay_rows);
    println!("   Kept:       {} rows from {} authors", stats.kept_count, stats.authors);
    println!(
        "   Media:      {} text, {} images, {} videos, {} video messages, {} stickers, {} voice",
        stats.text, stats.images, stats.videos, stats.video_messages, stats.stickers, stats.voice
    );
    println!(
        "   Flags:      {} bot, {} forwarded, {} with links",
        stats.bots, stats.forwarded, stats.links
    );

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
