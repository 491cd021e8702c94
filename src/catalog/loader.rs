//! XML catalog loader
//!
//! Reads the first `<name>` element and every `<book>` element, at any
//! depth, in document order. A catalog is either loaded whole or not at all.

use std::path::Path;

use roxmltree::{Document, Node};

use crate::{
    error::{AppError, AppResult},
    models::{BookEntry, Catalog},
};

/// Load a catalog from a file on disk
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    tracing::debug!("Reading catalog file {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_catalog(&text)
}

/// Parse a catalog from an XML string
pub fn parse_catalog(xml: &str) -> AppResult<Catalog> {
    let doc = Document::parse(xml)?;

    let name_node = doc
        .descendants()
        .find(|n| n.has_tag_name("name"))
        .ok_or_else(|| AppError::MissingElement {
            element: "name",
            context: "catalog".to_string(),
        })?;

    let name = first_text(name_node)
        .filter(|text| !text.trim().is_empty())
        .ok_or(AppError::EmptyCatalogName)?
        .to_string();

    let entries = doc
        .descendants()
        .filter(|n| n.has_tag_name("book"))
        .enumerate()
        .map(|(idx, book)| parse_book(book, idx))
        .collect::<AppResult<Vec<_>>>()?;

    tracing::debug!("Parsed catalog '{}' with {} books", name, entries.len());

    Ok(Catalog { name, entries })
}

fn parse_book(book: Node, idx: usize) -> AppResult<BookEntry> {
    Ok(BookEntry {
        title: child_text(book, "title", idx)?,
        author: child_text(book, "author", idx)?,
        year: child_text(book, "year", idx)?,
    })
}

/// Text of the first `tag` element below `book`
fn child_text(book: Node, tag: &'static str, idx: usize) -> AppResult<String> {
    let missing = || AppError::MissingElement {
        element: tag,
        context: format!("book {}", idx + 1),
    };

    let node = book
        .descendants()
        .find(|n| n.has_tag_name(tag))
        .ok_or_else(missing)?;

    first_text(node).map(String::from).ok_or_else(missing)
}

/// Data of the element's first child, when that child is text
fn first_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.first_child().filter(|c| c.is_text()).and_then(|c| c.text())
}
