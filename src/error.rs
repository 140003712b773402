// src/error.rs
//! Error taxonomy for the export pipeline.
//!
//! Every failure between the form and the CSV file ends up as one `RmsError`.
//! The shells catch it once at the top and show it to the user verbatim.

use std::{error::Error as StdError, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RmsError {
    /// Network failure or a non-2xx HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body was not the JSON envelope we expect
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Envelope `status` was `fail`; carries the `data` field
    #[error("Report failed. Reason: {0}")]
    ReportFailed(String),

    /// Envelope `status` was `error`; carries the `message` field
    #[error("We experienced an error. Reason: {0}")]
    Server(String),

    /// Envelope `status` was missing or unrecognised
    #[error("Unknown error occurred (status: {0})")]
    UnknownStatus(String),

    /// A row's columns differ from the header under the strict column policy
    #[error("Column mismatch in row {row}: {detail}")]
    SchemaMismatch { row: usize, detail: String },

    /// Reading or writing a local file failed
    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV file that could be read but not parsed
    #[error("Invalid CSV in {}: {detail}", .path.display())]
    Csv { path: PathBuf, detail: String },

    /// Missing or unusable user input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl RmsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Flatten an error and its sources into one line, outermost first.
pub fn chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        let msg = e.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        cur = e.source();
    }
    out
}

// The request URL carries the API key in its query; never keep it.
impl From<reqwest::Error> for RmsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(chain(&err.without_url()))
    }
}

impl From<serde_json::Error> for RmsError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

pub type RmsResult<T> = Result<T, RmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_failed_carries_reason() {
        let err = RmsError::ReportFailed("reason X".into());
        assert_eq!(err.to_string(), "Report failed. Reason: reason X");
    }

    #[test]
    fn io_error_names_path() {
        let src = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RmsError::io("/nope/out.csv", src);
        assert_eq!(err.to_string(), "I/O error at /nope/out.csv: denied");
        assert!(!err.is_transport());
    }

    #[test]
    fn chain_skips_repeated_messages() {
        let src = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = RmsError::io("a.csv", src);
        assert_eq!(chain(&err), "I/O error at a.csv: disk full");
    }

    #[test]
    fn csv_error_names_path_and_detail() {
        let err = RmsError::Csv { path: "bad.csv".into(), detail: "found record with 1 field".into() };
        assert_eq!(err.to_string(), "Invalid CSV in bad.csv: found record with 1 field");
    }

    #[test]
    fn json_errors_become_malformed_response() {
        let err: RmsError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, RmsError::MalformedResponse(_)));
    }
}
