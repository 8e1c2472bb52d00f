//! HTTP transport for the `/convert` exchange.
//!
//! Files are read from disk and sent as one multipart request: a `files`
//! part per input (carrying the original filename) and a `tool` text field.

use std::path::{Path, PathBuf};

use proconverter::{
    ConversionClient, ConvertRequest, ConvertResponse, SubmissionError, SubmissionResult, Tool,
    CONVERT_PATH, FILES_FIELD, TOOL_FIELD,
};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::error::CliResult;

/// Conversion client backed by `reqwest`.
///
/// No request timeout is configured; a conversion runs until the server
/// answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of the conversion endpoint under the base URL.
    pub fn endpoint(&self) -> CliResult<Url> {
        Ok(self.base.join(CONVERT_PATH.trim_start_matches('/'))?)
    }
}

/// Build the multipart body for a submission.
pub async fn build_form(tool: Tool, files: &[PathBuf]) -> SubmissionResult<Form> {
    let mut form = Form::new();
    for path in files {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            SubmissionError::Transport(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let part = Part::bytes(bytes).file_name(upload_name(path));
        form = form.part(FILES_FIELD, part);
    }
    Ok(form.text(TOOL_FIELD, tool.id()))
}

fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}

impl ConversionClient for HttpClient {
    type File = PathBuf;

    async fn convert(&self, request: ConvertRequest<PathBuf>) -> SubmissionResult<ConvertResponse> {
        let url = self
            .endpoint()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        let form = build_form(request.tool, &request.files).await?;

        log::debug!("POST {} ({} file(s), tool '{}')", url, request.files.len(), request.tool);

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(format!("Failed to read response: {}", e)))?;

        ConvertResponse::from_json(&body).map_err(|e| {
            log::debug!("Undecodable response ({}): {}", status, body);
            match e {
                SubmissionError::MalformedResponse(msg) => {
                    SubmissionError::MalformedResponse(format!("{} (HTTP {})", msg, status))
                }
                other => other,
            }
        })
    }
}
