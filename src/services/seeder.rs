//! Catalog seeding pipeline
//!
//! Load → extract → submit, one file at a time and one entry at a time.

use std::path::Path;

use super::FormSubmitter;
use crate::{
    catalog::{extract_entry, load_catalog},
    error::AppResult,
    models::{Catalog, CatalogFile, EntryFailure, FileFailure, RunSummary, SeedReport, SubmissionRequest},
};

pub struct CatalogSeeder {
    submitter: Box<dyn FormSubmitter>,
    target_uri: String,
}

impl CatalogSeeder {
    pub fn new(submitter: Box<dyn FormSubmitter>, target_uri: impl Into<String>) -> Self {
        Self {
            submitter,
            target_uri: target_uri.into(),
        }
    }

    /// Seed every file in order. A file that fails to load is recorded and
    /// skipped; the run carries on with the next one.
    pub async fn seed_files(&self, files: &[CatalogFile]) -> RunSummary {
        let mut summary = RunSummary::default();

        for file in files {
            println!("{}", file.arg);

            match self.seed_file(&file.path).await {
                Ok(report) => {
                    tracing::info!(
                        "Seeded '{}' from {}: {}/{} submitted, {} entry failure(s), {} ms",
                        report.catalog,
                        report.file.display(),
                        report.submitted,
                        report.entries,
                        report.failures.len(),
                        report.elapsed_ms().unwrap_or_default()
                    );
                    summary.reports.push(report);
                }
                Err(e) => {
                    tracing::error!(
                        code = e.code() as u32,
                        "Catalog {} not seeded: {}",
                        file.path.display(),
                        e
                    );
                    summary.failed_files.push(FileFailure {
                        file: file.path.clone(),
                        error: e,
                    });
                }
            }
        }

        tracing::info!(
            "Seeding finished: {} submission(s), {} entry failure(s), {} failed file(s)",
            summary.submitted(),
            summary.failed_entries(),
            summary.failed_files.len()
        );

        summary
    }

    /// Load one catalog file and submit all of its entries.
    ///
    /// The whole document is validated before the first submission, so a
    /// structural error means nothing from this file reaches the service.
    pub async fn seed_file(&self, file: &Path) -> AppResult<SeedReport> {
        let catalog = load_catalog(file)?;
        tracing::info!(
            "Loaded catalog '{}' from {} ({} books)",
            catalog.name,
            file.display(),
            catalog.len()
        );
        Ok(self.seed_catalog(file, &catalog).await)
    }

    /// Submit every entry of an already loaded catalog
    pub async fn seed_catalog(&self, file: &Path, catalog: &Catalog) -> SeedReport {
        let mut report = SeedReport::new(file.to_path_buf(), &catalog.name, catalog.len());

        for (index, entry) in catalog.entries.iter().enumerate() {
            let extracted = match extract_entry(entry) {
                Ok(extracted) => extracted,
                Err(e) => {
                    tracing::error!(
                        code = e.code() as u32,
                        "Skipping book {} '{}' of {}: {}",
                        index + 1,
                        entry.title,
                        catalog.name,
                        e
                    );
                    report.failures.push(EntryFailure {
                        index,
                        title: entry.title.clone(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let request = SubmissionRequest::new(&self.target_uri, &catalog.name, extracted);
            match self.submitter.submit(&request).await {
                Ok(outcome) if outcome.is_success() => {
                    tracing::debug!("Submitted '{}': {}", request.title, outcome);
                }
                Ok(outcome) => {
                    tracing::warn!("Submission of '{}' returned {}", request.title, outcome);
                }
                Err(e) => {
                    tracing::warn!("Submission of '{}' not sent: {}", request.title, e);
                }
            }
            report.submitted += 1;
        }

        report.finish()
    }
}
