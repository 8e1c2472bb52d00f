//! Wire types for the `/convert` exchange.
//!
//! Request: `POST /convert`, multipart with one `files` part per input file
//! and a single `tool` text field. Response: a JSON result descriptor.

use serde::{Deserialize, Serialize};

use crate::error::{SubmissionError, SubmissionResult};
use crate::tools::Tool;

/// Path of the conversion endpoint, relative to the server root.
pub const CONVERT_PATH: &str = "/convert";

/// Multipart field carrying each input file.
pub const FILES_FIELD: &str = "files";

/// Multipart field carrying the tool identifier.
pub const TOOL_FIELD: &str = "tool";

/// One submission: the selected tool plus the files, in order.
///
/// `F` is whatever the transport can stream (a browser `File`, a path on
/// disk, raw bytes in tests).
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest<F> {
    pub tool: Tool,
    pub files: Vec<F>,
}

/// JSON body returned by the conversion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Where to fetch the converted file and what to call it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub url: String,
    pub filename: String,
}

impl ConvertResponse {
    pub fn converted(download_url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            success: true,
            download_url: Some(download_url.into()),
            filename: Some(filename.into()),
            error: None,
        }
    }

    pub fn failed(error: Option<&str>) -> Self {
        Self {
            success: false,
            error: error.map(str::to_string),
            ..Self::default()
        }
    }

    /// Parse a response body.
    pub fn from_json(body: &str) -> SubmissionResult<Self> {
        serde_json::from_str(body).map_err(|e| SubmissionError::MalformedResponse(e.to_string()))
    }

    /// Interpret the descriptor as a download or a failure.
    pub fn into_download(self) -> SubmissionResult<Download> {
        if !self.success {
            return Err(SubmissionError::Rejected { message: self.error });
        }
        match (self.download_url, self.filename) {
            (Some(url), Some(filename)) => Ok(Download { url, filename }),
            (None, _) => Err(SubmissionError::MalformedResponse(
                "success without download_url".to_string(),
            )),
            (_, None) => Err(SubmissionError::MalformedResponse(
                "success without filename".to_string(),
            )),
        }
    }
}
