//! Book entry to submission fields

use crate::{
    error::AppResult,
    models::{AuthorName, BookEntry, ExtractedEntry},
};

/// Flatten a book entry into the fields of an "Add" submission
pub fn extract_entry(entry: &BookEntry) -> AppResult<ExtractedEntry> {
    let AuthorName { firstname, lastname } = AuthorName::parse(&entry.author)?;

    Ok(ExtractedEntry {
        lastname,
        firstname,
        title: entry.title.clone(),
        year: entry.year.clone(),
    })
}
