//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::table::{FEATURE_COLUMNS, FeatureRecord, FeatureTable};

/// Timestamp layout in CSV output.
const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes a feature table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `timestamp;author;message;is_text;...;is_link`
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`
/// - Flags: `true` / `false`
pub fn write_csv(table: &FeatureTable, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(table, file)
}

/// Converts a feature table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(table: &FeatureTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(table: &FeatureTable, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(FEATURE_COLUMNS)?;
    for row in table {
        writer.write_record(build_record(row))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(row: &FeatureRecord) -> Vec<String> {
    let flags = [
        row.is_text,
        row.is_image,
        row.is_video,
        row.is_video_msg,
        row.is_sticker,
        row.is_voice,
        row.is_bot,
        row.is_forwarded,
        row.is_link,
    ];

    let mut record = Vec::with_capacity(FEATURE_COLUMNS.len());
    record.push(row.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string());
    record.push(row.author.clone());
    record.push(row.message.clone());
    record.extend(flags.iter().map(ToString::to_string));
    record
}
