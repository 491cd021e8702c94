//! Author name model

use crate::error::{AppError, AppResult};

/// First and last name split out of a raw author string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName {
    pub firstname: String,
    pub lastname: String,
}

impl AuthorName {
    /// Split on runs of whitespace into at most three pieces.
    ///
    /// The first piece is the first name and the second the last name. The
    /// third piece holds whatever follows (middle names, suffixes) and is
    /// dropped, so "Bill Kennedy Jr" yields Bill / Kennedy.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut pieces = raw.split_whitespace();
        match (pieces.next(), pieces.next()) {
            (Some(firstname), Some(lastname)) => Ok(Self {
                firstname: firstname.to_string(),
                lastname: lastname.to_string(),
            }),
            _ => Err(AppError::MalformedAuthor(raw.to_string())),
        }
    }
}
