//! Configuration types for corpus parsing and featurizing.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`CorpusConfig`] - how export pages are read (text encoding)
//! - [`NameRemap`] - optional author renames applied by the featurizer
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::{CorpusConfig, NameRemap};
//!
//! let config = CorpusConfig::new().with_encoding("windows-1251");
//! assert_eq!(config.encoding, "windows-1251");
//!
//! let remap: NameRemap = [("Ivan P.", "Ivan")].into_iter().collect();
//! assert_eq!(remap.apply("Ivan P."), "Ivan");
//! assert_eq!(remap.apply("Alice"), "Alice");
//! ```

use std::collections::HashMap;
#[cfg(feature = "json-output")]
use std::path::Path;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::{ChatsiftError, Result};

/// Configuration for reading an export corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// WHATWG encoding label of the page files (default: `utf-8`)
    pub encoding: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
        }
    }
}

impl CorpusConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the encoding label.
    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Resolves the encoding label.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::UnknownEncoding`] if the label is not a
    /// recognised WHATWG label.
    pub fn resolve_encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.trim().as_bytes())
            .ok_or_else(|| ChatsiftError::unknown_encoding(&self.encoding))
    }
}

/// Author renames: `old name -> new name`.
///
/// Names that are not keys map to themselves. Serialized as a flat JSON
/// object, e.g. `{"Ivan P.": "Ivan"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRemap {
    names: HashMap<String, String>,
}

impl NameRemap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a rename.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.names.insert(from.into(), to.into());
    }

    /// Returns the new name for `name`, if one is configured.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Returns the mapped name, or `name` itself when it is not a key.
    pub fn apply<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parses a remap from a JSON object of string to string.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ChatsiftError::invalid_name_remap(None, e.to_string()))
    }

    /// Loads a remap from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ChatsiftError::read_file(path, e))?;
        serde_json::from_str(&content).map_err(|e| {
            ChatsiftError::invalid_name_remap(Some(path.to_path_buf()), e.to_string())
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameRemap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
