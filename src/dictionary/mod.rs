//! Word to canonical-link lookup.
//!
//! The ranker asks for a link with the exact, case-sensitive word text. Words
//! without a mapping link to themselves.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub trait WordLinkLookup {
    /// Canonical link for `word`. `None` or an empty string means no mapping.
    fn word_link(&self, word: &str) -> Option<&str>;
}

impl<T: WordLinkLookup + ?Sized> WordLinkLookup for &T {
    fn word_link(&self, word: &str) -> Option<&str> {
        (**self).word_link(word)
    }
}

/// Lookup that knows no links.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWordLinks;

impl WordLinkLookup for NoWordLinks {
    fn word_link(&self, _word: &str) -> Option<&str> {
        None
    }
}

#[derive(Debug, Error)]
pub enum WordLinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid word link table: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory word link table, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordLinkTable {
    entries: BTreeMap<String, String>,
}

impl WordLinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, WordLinkError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, WordLinkError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, WordLinkError> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn insert(&mut self, word: impl Into<String>, link: impl Into<String>) {
        self.entries.insert(word.into(), link.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordLinkLookup for WordLinkTable {
    fn word_link(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for WordLinkTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
