//! In-process HTTP submitter

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};

use super::FormSubmitter;
use crate::{
    error::{AppError, AppResult},
    models::{SubmissionOutcome, SubmissionRequest},
};

#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
}

impl HttpSubmitter {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("catalog-seeder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Submission(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FormSubmitter for HttpSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> AppResult<SubmissionOutcome> {
        let body = request.form_body();
        println!("POST {} {}", request.target_uri, body);

        let response = self
            .client
            .post(&request.target_uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Submission(format!("POST to {} failed: {}", request.target_uri, e)))?;

        let status = response.status().as_u16();
        // Drain and drop the body
        let _ = response.bytes().await;

        Ok(SubmissionOutcome::Status(status))
    }
}
