//! Submission services
//!
//! [`FormSubmitter`] is the only seam between the pipeline and the network:
//! the default implementation shells out to a command-line downloader, an
//! in-process client is available, and tests substitute fakes.

pub mod http;
pub mod seeder;
pub mod wget;

use async_trait::async_trait;

use crate::{
    config::{ClientKind, SubmitterConfig},
    error::AppResult,
    models::{SubmissionOutcome, SubmissionRequest},
};

pub use http::HttpSubmitter;
pub use seeder::CatalogSeeder;
pub use wget::WgetSubmitter;

/// Sends one form POST to the library service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// POST the request's form body to its target URI.
    ///
    /// An `Err` means the request could not be issued at all. Whatever the
    /// service answers is reported through the outcome and never inspected.
    async fn submit(&self, request: &SubmissionRequest) -> AppResult<SubmissionOutcome>;
}

/// Build the submitter selected by `client`
pub fn build_submitter(
    client: ClientKind,
    config: &SubmitterConfig,
) -> AppResult<Box<dyn FormSubmitter>> {
    tracing::debug!("Using {:?} submitter", client);
    Ok(match client {
        ClientKind::Wget => Box::new(WgetSubmitter::new(&config.program)),
        ClientKind::Http => Box::new(HttpSubmitter::new()?),
    })
}
