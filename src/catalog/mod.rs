//! Catalog document loading and entry extraction
//!
//! Catalogs are small XML documents:
//!
//! ```xml
//! <catalog>
//!   <name>TechBooks</name>
//!   <book>
//!     <title>Python in a Nutshell</title>
//!     <author>Alex Martelli</author>
//!     <year>2003</year>
//!   </book>
//! </catalog>
//! ```

pub mod extractor;
pub mod loader;

pub use extractor::extract_entry;
pub use loader::{load_catalog, parse_catalog};
