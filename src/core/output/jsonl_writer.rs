//! JSON Lines (JSONL) output writer.
//!
//! One row object per line, convenient for dataframe loaders that read
//! NDJSON in chunks.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::table::FeatureTable;

/// Writes a feature table to JSONL, one row per line.
///
/// ```jsonl
/// {"timestamp":"2021-01-01T10:00:00","author":"Alice","message":"Hello","is_text":true,...}
/// ```
pub fn write_jsonl(table: &FeatureTable, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts a feature table to a JSONL string.
pub fn to_jsonl(table: &FeatureTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(table: &FeatureTable, writer: &mut W) -> Result<()> {
    for row in table {
        let line = serde_json::to_string(row)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
