//! Data models for the catalog seeder

pub mod author;
pub mod catalog;
pub mod seed_report;
pub mod submission;

// Re-export commonly used types
pub use author::AuthorName;
pub use catalog::{BookEntry, Catalog, CatalogFile};
pub use seed_report::{EntryFailure, FileFailure, RunSummary, SeedReport};
pub use submission::{ExtractedEntry, SubmissionOutcome, SubmissionRequest};
