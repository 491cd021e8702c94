//! Submission request model

use std::fmt;

/// Fields pulled out of one book entry, ready to be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub lastname: String,
    pub firstname: String,
    pub title: String,
    pub year: String,
}

/// One "Add" action against the library service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub lastname: String,
    pub firstname: String,
    pub title: String,
    pub year: String,
    pub entityname: String,
    pub target_uri: String,
}

impl SubmissionRequest {
    pub fn new(target_uri: &str, entityname: &str, entry: ExtractedEntry) -> Self {
        Self {
            lastname: entry.lastname,
            firstname: entry.firstname,
            title: entry.title,
            year: entry.year,
            entityname: entityname.to_string(),
            target_uri: target_uri.to_string(),
        }
    }

    /// Form body sent to the service.
    ///
    /// Values are written as-is, without percent-encoding: the library
    /// service is fed exactly what the catalog contains.
    pub fn form_body(&self) -> String {
        format!(
            "lastname={}&firstname={}&title={}&year={}&action_type=Add&entity={}",
            self.lastname, self.firstname, self.title, self.year, self.entityname
        )
    }
}

/// What the HTTP capability observed. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Downloader process exit code (`None` when killed by a signal)
    Exited(Option<i32>),
    /// HTTP status returned by the service
    Status(u16),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            SubmissionOutcome::Exited(code) => *code == Some(0),
            SubmissionOutcome::Status(status) => (200..300).contains(status),
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Exited(Some(code)) => write!(f, "exit code {}", code),
            SubmissionOutcome::Exited(None) => write!(f, "terminated by signal"),
            SubmissionOutcome::Status(status) => write!(f, "HTTP {}", status),
        }
    }
}
