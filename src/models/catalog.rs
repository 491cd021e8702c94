//! Catalog model: one XML document's worth of named book entries

use std::path::PathBuf;

/// A single `<book>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub title: String,
    /// Raw author text, "First Last[ ...]"
    pub author: String,
    /// Kept as text, never parsed
    pub year: String,
}

/// A parsed catalog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Sent as the `entity` parameter of every submission
    pub name: String,
    /// Book entries in document order
    pub entries: Vec<BookEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A catalog file to process, as named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    /// The argument as given, echoed to the operator
    pub arg: String,
    /// Where the file is read from
    pub path: PathBuf,
}
