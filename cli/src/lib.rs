//! # proconvert - ProConverter from the terminal
//!
//! Drives the shared [`UploadController`] with native seams: `reqwest` for
//! the multipart upload, tokio timers for the progress tick, and an
//! `indicatif` bar for display. A successful conversion is then fetched and
//! saved locally.
//!
//! ## Modules
//!
//! - [`client`] - `/convert` transport
//! - [`download`] - fetching the converted file
//! - [`scheduler`] - tokio timers
//! - [`view`] - terminal rendering
//! - [`config`] - server URL and run options
//! - [`error`] - CLI errors

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod scheduler;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use proconverter::{is_allowed_file, Download, SubmitOutcome, Tool, UploadController, UploadSettings};
use serde::Serialize;

pub use client::HttpClient;
pub use config::{parse_server_url, ConvertOptions, DEFAULT_SERVER_URL};
pub use download::{fetch_download, local_filename};
pub use error::{CliError, CliResult};
pub use scheduler::TokioScheduler;
pub use view::TerminalView;

/// Controller wired with the native seams.
pub type TerminalController = UploadController<HttpClient, TerminalView, TokioScheduler>;

/// Result of a successful `convert` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReport {
    pub download: Download,
    /// Where the file was saved, when downloading was requested.
    pub saved_to: Option<PathBuf>,
}

/// Catalogue entry as printed by `proconvert tools --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub extensions: Vec<&'static str>,
    pub multiple_files: bool,
}

impl From<Tool> for ToolInfo {
    fn from(tool: Tool) -> Self {
        Self {
            id: tool.id(),
            label: tool.label(),
            category: tool.category().title(),
            extensions: tool.accepted_extensions().to_vec(),
            multiple_files: tool.takes_multiple_files(),
        }
    }
}

pub fn tool_catalogue() -> Vec<ToolInfo> {
    Tool::ALL.into_iter().map(ToolInfo::from).collect()
}

/// Convert `files` with `tool` and, unless disabled, save the result.
///
/// Must run inside a [`tokio::task::LocalSet`]; the progress timer is a
/// local task.
pub async fn convert_files(tool: Tool, files: Vec<PathBuf>, options: &ConvertOptions) -> CliResult<ConvertReport> {
    if files.is_empty() {
        return Err(CliError::NoFiles);
    }
    for file in &files {
        if !file.is_file() {
            return Err(CliError::MissingFile(file.clone()));
        }
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if !is_allowed_file(&name) {
            log::warn!("⚠️  {} has an extension the server does not accept", file.display());
        } else if !tool.accepted_extensions().iter().any(|ext| name.ends_with(&format!(".{}", ext))) {
            log::warn!("⚠️  {} is not a typical input for '{}'", file.display(), tool);
        }
    }

    let client = HttpClient::new(options.server.clone());
    let http = client.http().clone();
    let controller: TerminalController = UploadController::with_settings(
        client,
        TerminalView::new(options.quiet),
        TokioScheduler,
        UploadSettings::immediate(),
    );
    controller.select_tool(tool);

    let download = match controller.submit(files).await {
        SubmitOutcome::Converted(download) => download,
        SubmitOutcome::Failed(err) => return Err(err.into()),
        SubmitOutcome::Rejected(reason) => return Err(reason.into()),
        SubmitOutcome::Ignored => return Err(CliError::NoFiles),
    };

    let saved_to = if options.download {
        Some(fetch_download(&http, &options.server, &download, &options.output_dir).await?)
    } else {
        None
    };

    Ok(ConvertReport { download, saved_to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_stub, spawn_stub_with_downloads, StubReply};
    use proconverter::SubmissionError;

    fn options(server: url::Url, out: &std::path::Path) -> ConvertOptions {
        ConvertOptions {
            output_dir: out.to_path_buf(),
            quiet: true,
            ..ConvertOptions::new(server)
        }
    }

    #[test]
    fn test_catalogue_lists_every_tool() {
        let catalogue = tool_catalogue();
        assert_eq!(catalogue.len(), Tool::ALL.len());
        let merge = catalogue.iter().find(|t| t.id == "merge").unwrap();
        assert!(merge.multiple_files);
        assert_eq!(merge.extensions, vec!["pdf"]);

        let json = serde_json::to_value(&catalogue[0]).unwrap();
        assert_eq!(json["id"], "merge");
    }

    #[tokio::test]
    async fn test_convert_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.png");
        std::fs::write(&input, b"png bytes").unwrap();
        let out = dir.path().join("out");

        let stub = spawn_stub_with_downloads(
            StubReply::json(r#"{"success": true, "download_url": "/download/scan.pdf", "filename": "scan.pdf"}"#),
            vec![("scan.pdf".to_string(), b"%PDF-scan".to_vec())],
        )
        .await;
        let opts = options(stub.base.clone(), &out);

        let report = tokio::task::LocalSet::new()
            .run_until(convert_files(Tool::ImageToPdf, vec![input], &opts))
            .await
            .unwrap();

        assert_eq!(report.download.filename, "scan.pdf");
        assert_eq!(report.saved_to, Some(out.join("scan.pdf")));
        assert_eq!(std::fs::read(out.join("scan.pdf")).unwrap(), b"%PDF-scan");
        assert_eq!(stub.received().tool.as_deref(), Some("image-to-pdf"));
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.pdf");
        std::fs::write(&input, b"pdf").unwrap();

        let stub = spawn_stub(StubReply::json(r#"{"success": false, "error": "Please select at least 2 PDF files to merge"}"#)).await;
        let opts = options(stub.base.clone(), dir.path());

        let err = tokio::task::LocalSet::new()
            .run_until(convert_files(Tool::Merge, vec![input], &opts))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Conversion(SubmissionError::Rejected { .. })));
        assert_eq!(err.to_string(), "Please select at least 2 PDF files to merge");
    }

    #[tokio::test]
    async fn test_missing_input_never_contacts_server() {
        let dir = tempfile::tempdir().unwrap();
        let stub = spawn_stub(StubReply::json(r#"{"success": true}"#)).await;
        let opts = options(stub.base.clone(), dir.path());

        let err = tokio::task::LocalSet::new()
            .run_until(convert_files(Tool::SplitPdf, vec![dir.path().join("nope.pdf")], &opts))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::MissingFile(_)));
        assert_eq!(stub.received().requests, 0);
    }

    #[tokio::test]
    async fn test_no_download_flag_skips_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.pdf");
        std::fs::write(&input, b"pdf").unwrap();

        let stub = spawn_stub(StubReply::json(r#"{"success": true, "download_url": "/download/x.pdf", "filename": "x.pdf"}"#)).await;
        let opts = ConvertOptions { download: false, ..options(stub.base.clone(), dir.path()) };

        let report = tokio::task::LocalSet::new()
            .run_until(convert_files(Tool::CompressPdf, vec![input], &opts))
            .await
            .unwrap();

        assert_eq!(report.saved_to, None);
        assert!(!dir.path().join("x.pdf").exists());
    }
}
