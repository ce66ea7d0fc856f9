//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options, convertible to [`crate::format::OutputFormat`]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default output file stem; the extension follows the chosen format.
pub const DEFAULT_OUTPUT: &str = "features.csv";

/// Turn a Telegram HTML chat export into a per-message feature table.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift ./ChatExport_2024-06-15
    chatsift ./export -o features.jsonl -f jsonl
    chatsift ./export --encoding windows-1251 --rename names.json
    RUST_LOG=chatsift=debug chatsift ./export")]
pub struct Args {
    /// Export directory containing messages.html, messages2.html, ...
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Character encoding of the page files
    #[arg(long, value_name = "LABEL", default_value = "utf-8")]
    pub encoding: String,

    /// JSON object mapping display names to canonical names
    #[arg(long, value_name = "FILE")]
    pub rename: Option<PathBuf>,

    /// Log per-page progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Output path, with the extension swapped to match `--format` when
    /// the default output name is in use.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("features.{}", format.extension())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines, one row per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
