//! HTTP service posting files to the conversion endpoint.

use gloo_net::http::Request;
use proconverter::{
    ConversionClient, ConvertRequest, ConvertResponse, SubmissionError, SubmissionResult,
    CONVERT_PATH, FILES_FIELD, TOOL_FIELD,
};
use web_sys::{File, FileList, FormData};

/// Browser transport for `POST /convert`.
#[derive(Debug, Clone)]
pub struct GlooClient {
    backend_url: String,
}

impl GlooClient {
    /// `backend_url` is prefixed to `/convert`; empty means same origin.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self { backend_url: backend_url.into() }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), CONVERT_PATH)
    }
}

/// Build the multipart body: one `files` part per file, then the tool.
fn build_form_data(request: &ConvertRequest<File>) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;

    for file in &request.files {
        form_data
            .append_with_blob_and_filename(FILES_FIELD, file, &file.name())
            .map_err(|e| format!("Failed to append file: {:?}", e))?;
    }

    form_data
        .append_with_str(TOOL_FIELD, request.tool.id())
        .map_err(|e| format!("Failed to append tool: {:?}", e))?;

    Ok(form_data)
}

impl ConversionClient for GlooClient {
    type File = File;

    async fn convert(&self, request: ConvertRequest<File>) -> SubmissionResult<ConvertResponse> {
        let form_data = build_form_data(&request).map_err(SubmissionError::Transport)?;

        let response = Request::post(&self.endpoint())
            .body(form_data)
            .map_err(|e| SubmissionError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(format!("HTTP request failed: {}", e)))?;

        // the body is decoded whatever the status; the server reports
        // conversion failures in JSON
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(format!("Failed to read response: {}", e)))?;

        ConvertResponse::from_json(&body).map_err(|e| {
            log::error!("Undecodable /convert response ({}): {}", status, e);
            e
        })
    }
}

/// Collect a `FileList` into an ordered vector.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_same_origin() {
        assert_eq!(GlooClient::new("").endpoint(), "/convert");
    }

    #[test]
    fn test_endpoint_with_backend() {
        assert_eq!(
            GlooClient::new("http://localhost:5000/").endpoint(),
            "http://localhost:5000/convert"
        );
    }
}
