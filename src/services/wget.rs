//! Command-line downloader submitter
//!
//! Runs `<program> -O /dev/null --post-data "<body>" <uri>` once per request
//! and waits for it to exit. The response body goes to /dev/null.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use super::FormSubmitter;
use crate::{
    error::{AppError, AppResult},
    models::{SubmissionOutcome, SubmissionRequest},
};

#[derive(Debug, Clone)]
pub struct WgetSubmitter {
    program: String,
}

impl WgetSubmitter {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Arguments passed to the downloader, body and URI last
    pub fn args(&self, request: &SubmissionRequest) -> Vec<String> {
        vec![
            "-O".to_string(),
            "/dev/null".to_string(),
            "--post-data".to_string(),
            request.form_body(),
            request.target_uri.clone(),
        ]
    }

    /// Printable form of the command, as echoed to the operator
    pub fn command_line(&self, request: &SubmissionRequest) -> String {
        format!(
            "{} -O /dev/null --post-data \"{}\" {}",
            self.program,
            request.form_body(),
            request.target_uri
        )
    }
}

#[async_trait]
impl FormSubmitter for WgetSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> AppResult<SubmissionOutcome> {
        println!("{}", self.command_line(request));

        let status = Command::new(&self.program)
            .args(self.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|e| AppError::Submission(format!("Failed to run {}: {}", self.program, e)))?;

        Ok(SubmissionOutcome::Exited(status.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedEntry;

    fn request() -> SubmissionRequest {
        SubmissionRequest::new(
            "http://localhost:8080/library",
            "TechBooks",
            ExtractedEntry {
                lastname: "Martelli".to_string(),
                firstname: "Alex".to_string(),
                title: "Python in a Nutshell".to_string(),
                year: "2003".to_string(),
            },
        )
    }

    #[test]
    fn test_command_line() {
        let submitter = WgetSubmitter::new("wget");
        assert_eq!(
            submitter.command_line(&request()),
            "wget -O /dev/null --post-data \"lastname=Martelli&firstname=Alex&title=Python in a Nutshell&year=2003&action_type=Add&entity=TechBooks\" http://localhost:8080/library"
        );
    }

    #[test]
    fn test_args_keep_body_as_single_argument() {
        let args = WgetSubmitter::new("wget").args(&request());
        assert_eq!(args.len(), 5);
        assert_eq!(&args[..3], &["-O", "/dev/null", "--post-data"]);
        assert!(args[3].starts_with("lastname=Martelli&"));
        assert_eq!(args[4], "http://localhost:8080/library");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_submit_reports_exit_code() {
        let outcome = WgetSubmitter::new("true").submit(&request()).await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::Exited(Some(0)));

        let outcome = WgetSubmitter::new("false").submit(&request()).await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::Exited(Some(1)));
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_submit_missing_program() {
        let err = WgetSubmitter::new("definitely-not-a-downloader-xyz")
            .submit(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Submission(_)));
    }
}
