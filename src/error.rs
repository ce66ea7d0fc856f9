//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Structural problems** (missing base page, a message node without a
//!   time label, a malformed timestamp) abort the run and name the offending
//!   file or row.
//! - **Routine data-quality issues** (messages with no extractable content,
//!   relay-bot authors) are not errors at all; the featurizer filters them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::table::RawTable;
///
/// fn my_function() -> Result<RawTable> {
///     Ok(RawTable::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred while listing the export directory or reading a page.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A page, remap file or export directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The export directory has continuation pages but no `messages.html`.
    ///
    /// Ordering cannot proceed without the base page because it always
    /// comes first in the assembled corpus.
    #[error("Missing base file 'messages.html' in {}", directory.display())]
    MissingBaseFile {
        /// The directory that was scanned
        directory: PathBuf,
    },

    /// The export directory contains no `messages*.html` pages at all.
    #[error("No export pages (messages*.html) found in {}", directory.display())]
    EmptyExport {
        /// The directory that was scanned
        directory: PathBuf,
    },

    /// A message node lacks a required element.
    ///
    /// Every real message node carries a time label, so its absence means
    /// the page is not a well-formed export page.
    #[error("Malformed message #{position}{}: {reason}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    MalformedMessage {
        /// The page file, if the markup came from disk
        path: Option<PathBuf>,
        /// Zero-based position of the message node within its page
        position: usize,
        /// What was missing
        reason: String,
    },

    /// A timestamp string does not match `dd.mm.YYYY HH:MM:SS`.
    #[error("Invalid timestamp '{input}' at row {row}. Expected format: {expected}")]
    TimestampParse {
        /// Zero-based row index in the raw table
        row: usize,
        /// The offending timestamp string
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A page could not be decoded with the configured encoding.
    #[error("Failed to decode {} as {encoding}", path.display())]
    Encoding {
        /// The page file
        path: PathBuf,
        /// The encoding that was tried
        encoding: &'static str,
    },

    /// The configured encoding label is not recognised.
    #[error("Unknown encoding label '{label}'")]
    UnknownEncoding {
        /// The label that was supplied
        label: String,
    },

    /// A name remap file could not be understood.
    #[error("Invalid name remap{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidNameRemap {
        /// The remap file, if loaded from disk
        path: Option<PathBuf>,
        /// Description of what's wrong
        message: String,
    },

    /// An output setting does not name a supported format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being configured (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while converting output buffers.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates a read error naming the path that failed.
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatsiftError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Creates a missing base file error.
    pub fn missing_base_file(directory: impl Into<PathBuf>) -> Self {
        ChatsiftError::MissingBaseFile {
            directory: directory.into(),
        }
    }

    /// Creates an empty export error.
    pub fn empty_export(directory: impl Into<PathBuf>) -> Self {
        ChatsiftError::EmptyExport {
            directory: directory.into(),
        }
    }

    /// Creates a malformed message error.
    pub fn malformed_message(
        path: Option<PathBuf>,
        position: usize,
        reason: impl Into<String>,
    ) -> Self {
        ChatsiftError::MalformedMessage {
            path,
            position,
            reason: reason.into(),
        }
    }

    /// Creates a timestamp parse error.
    pub fn timestamp_parse(row: usize, input: impl Into<String>) -> Self {
        ChatsiftError::TimestampParse {
            row,
            input: input.into(),
            expected: "DD.MM.YYYY HH:MM:SS",
        }
    }

    /// Creates an encoding error.
    pub fn encoding(path: impl Into<PathBuf>, encoding: &'static str) -> Self {
        ChatsiftError::Encoding {
            path: path.into(),
            encoding,
        }
    }

    /// Creates an unknown encoding error.
    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        ChatsiftError::UnknownEncoding {
            label: label.into(),
        }
    }

    /// Creates an invalid name remap error.
    pub fn invalid_name_remap(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidNameRemap {
            path,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Attaches a file path to a malformed message error that was raised
    /// while parsing markup from memory. Other errors pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatsiftError::MalformedMessage {
                path: None,
                position,
                reason,
            } => ChatsiftError::MalformedMessage {
                path: Some(file.into()),
                position,
                reason,
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error, with or without a path.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_) | ChatsiftError::ReadFile { .. })
    }

    /// Returns `true` if ordering failed because the base page is missing.
    pub fn is_missing_base_file(&self) -> bool {
        matches!(self, ChatsiftError::MissingBaseFile { .. })
    }

    /// Returns `true` if the export directory had no pages.
    pub fn is_empty_export(&self) -> bool {
        matches!(self, ChatsiftError::EmptyExport { .. })
    }

    /// Returns `true` if a message node was malformed.
    pub fn is_malformed_message(&self) -> bool {
        matches!(self, ChatsiftError::MalformedMessage { .. })
    }

    /// Returns `true` if a timestamp could not be parsed.
    pub fn is_timestamp_parse(&self) -> bool {
        matches!(self, ChatsiftError::TimestampParse { .. })
    }

    /// Returns `true` if this is a decoding error (bad bytes or unknown label).
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            ChatsiftError::Encoding { .. } | ChatsiftError::UnknownEncoding { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
