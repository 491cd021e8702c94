//! Per-file seeding report

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::error::{AppError, ErrorCode};

/// An entry that could not be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailure {
    /// Zero-based position of the `<book>` in the document
    pub index: usize,
    pub title: String,
    pub message: String,
}

/// Summary of one catalog file's run through the pipeline
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub file: PathBuf,
    pub catalog: String,
    pub entries: usize,
    pub submitted: usize,
    pub failures: Vec<EntryFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl SeedReport {
    pub fn new(file: PathBuf, catalog: &str, entries: usize) -> Self {
        Self {
            file,
            catalog: catalog.to_string(),
            entries,
            submitted: 0,
            failures: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Wall time spent on the file, once finished
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds())
    }
}

/// A catalog file that failed to load; nothing from it was submitted
#[derive(Debug)]
pub struct FileFailure {
    pub file: PathBuf,
    pub error: AppError,
}

/// Outcome of a whole run across all catalog files
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<SeedReport>,
    pub failed_files: Vec<FileFailure>,
}

impl RunSummary {
    /// Number of submissions issued across all files
    pub fn submitted(&self) -> usize {
        self.reports.iter().map(|r| r.submitted).sum()
    }

    pub fn failed_entries(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }

    /// Process exit status: failure when a file or an entry could not be
    /// processed. Submission outcomes never count.
    pub fn exit_status(&self) -> u8 {
        if self.failed_files.is_empty() && self.failed_entries() == 0 {
            ErrorCode::Success as u8
        } else {
            ErrorCode::Failure as u8
        }
    }
}
