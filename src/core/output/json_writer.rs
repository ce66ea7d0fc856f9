//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::table::FeatureTable;

/// Writes a feature table to a JSON file as an array of row objects.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2021-01-01T10:00:00", "author": "Alice", "message": "Hello", "is_text": true, ...}
/// ]
/// ```
pub fn write_json(table: &FeatureTable, output_path: &str) -> Result<()> {
    let json = to_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a feature table to a pretty-printed JSON array.
pub fn to_json(table: &FeatureTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table.rows())?)
}
