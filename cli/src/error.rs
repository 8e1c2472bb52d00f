//! Error types for the `proconvert` command-line client.

use std::path::PathBuf;

use proconverter::{PreconditionError, SubmissionError, ToolError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The server URL could not be used as a base for requests.
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    /// A relative URL from the server could not be resolved.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Downloading the converted file failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown tool identifier.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// `convert` was called without inputs.
    #[error("No input files given")]
    NoFiles,

    /// An input path does not point at a readable file.
    #[error("Input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The server suggested a filename with no usable final component.
    #[error("Unusable download filename: {0:?}")]
    InvalidFilename(String),

    /// The submission was refused before sending.
    #[error("Submission refused: {0}")]
    Precondition(#[from] PreconditionError),

    /// The conversion exchange failed.
    #[error("{}", .0.notice())]
    Conversion(#[from] SubmissionError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_shows_notice() {
        let err: CliError = SubmissionError::Rejected { message: Some("bad format".into()) }.into();
        assert_eq!(err.to_string(), "bad format");

        let err: CliError = SubmissionError::Transport("refused".into()).into();
        assert_eq!(err.to_string(), "An error occurred");
    }

    #[test]
    fn test_missing_file_message() {
        let err = CliError::MissingFile(PathBuf::from("docs/report.pdf"));
        assert!(err.to_string().contains("docs/report.pdf"));
    }
}
