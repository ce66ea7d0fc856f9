//! Output format selection for feature tables.
//!
//! Library-side format type, independent of the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatsift::Result<()> {
//! use chatsift::format::{OutputFormat, write_to_format};
//! use chatsift::core::featurize;
//! use chatsift::table::{RawRecord, RawTable};
//!
//! let raw = RawTable::from_rows(vec![RawRecord::new("01.01.2021 10:00:00", "Alice", "Hello")]);
//! let features = featurize(&raw, None)?;
//!
//! write_to_format(&features, "features.csv", OutputFormat::Csv)?;
//!
//! let format = OutputFormat::from_path("features.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatsiftError;
use crate::table::FeatureTable;

/// Output format for feature tables.
///
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited, loads straight into a dataframe
/// - [`Json`](OutputFormat::Json) - array of row objects
/// - [`Jsonl`](OutputFormat::Jsonl) - one row object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects the format from a file extension.
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.ndjson").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("out.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatsiftError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatsiftError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a feature table to `path` in the given format.
///
/// # Errors
///
/// Returns an error if the writer for `format` is not compiled in, or the
/// file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    table: &FeatureTable,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatsiftError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(table, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatsiftError::invalid_format(
            "output",
            format!(
                "Output format {format} requires the '{}' feature to be enabled",
                format.required_feature()
            ),
        )),
    }
}

/// Renders a feature table to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(table: &FeatureTable, format: OutputFormat) -> Result<String, ChatsiftError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(table),
        #[allow(unreachable_patterns)]
        _ => Err(ChatsiftError::invalid_format(
            "output",
            format!(
                "Output format {format} requires the '{}' feature to be enabled",
                format.required_feature()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("parquet").is_err());
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
        assert_eq!(OutputFormat::all().len(), 3);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("/data/features.JSON").unwrap(),
            OutputFormat::Json
        );
        let err = OutputFormat::from_path("features.txt").unwrap_err();
        assert!(err.to_string().contains(".txt"));
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        use crate::core::featurize;
        use crate::table::{RawRecord, RawTable};

        let raw = RawTable::from_rows(vec![RawRecord::new("01.01.2021 10:00:00", "Alice", "Hello")]);
        let table = featurize(&raw, None).unwrap();

        let csv = to_format_string(&table, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("timestamp;author;message"));

        let jsonl = to_format_string(&table, OutputFormat::Jsonl).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
    }
}
