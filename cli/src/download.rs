//! Fetching and saving converted files.

use std::path::{Path, PathBuf};

use proconverter::Download;
use url::Url;

use crate::error::{CliError, CliResult};

/// Reduce a server-suggested filename to its final path component.
///
/// The name is only a suggestion from the server; anything that would
/// escape the output directory is stripped.
pub fn local_filename(suggested: &str) -> CliResult<String> {
    let normalized = suggested.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidFilename(suggested.to_string()))
}

/// Resolve the download location against the server base URL.
pub fn resolve_download_url(base: &Url, download: &Download) -> CliResult<Url> {
    Ok(base.join(&download.url)?)
}

/// Download the converted file into `output_dir`, returning the saved path.
pub async fn fetch_download(
    http: &reqwest::Client,
    base: &Url,
    download: &Download,
    output_dir: &Path,
) -> CliResult<PathBuf> {
    let url = resolve_download_url(base, download)?;
    let name = local_filename(&download.filename)?;

    log::debug!("GET {}", url);
    let bytes = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(name);
    tokio::fs::write(&path, &bytes).await?;

    log::info!("💾 Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_stub_with_downloads, StubReply};

    #[test]
    fn test_local_filename_strips_directories() {
        assert_eq!(local_filename("out.pdf").unwrap(), "out.pdf");
        assert_eq!(local_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(local_filename("C:\\temp\\out.docx").unwrap(), "out.docx");
        assert!(local_filename("..").is_err());
        assert!(local_filename("").is_err());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = Url::parse("http://localhost:5000/").unwrap();
        let rel = Download { url: "/download/ab.pdf".into(), filename: "ab.pdf".into() };
        assert_eq!(
            resolve_download_url(&base, &rel).unwrap().as_str(),
            "http://localhost:5000/download/ab.pdf"
        );

        let abs = Download { url: "https://cdn.example.com/x.pdf".into(), filename: "x.pdf".into() };
        assert_eq!(resolve_download_url(&base, &abs).unwrap().host_str(), Some("cdn.example.com"));
    }

    #[tokio::test]
    async fn test_fetch_saves_file() {
        let stub = spawn_stub_with_downloads(
            StubReply::json("{}"),
            vec![("merged.pdf".to_string(), b"%PDF-merged".to_vec())],
        )
        .await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("converted");

        let download = Download { url: "/download/merged.pdf".into(), filename: "merged.pdf".into() };
        let path = fetch_download(&reqwest::Client::new(), &stub.base, &download, &out)
            .await
            .unwrap();

        assert_eq!(path, out.join("merged.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-merged");
    }

    #[tokio::test]
    async fn test_missing_download_is_http_error() {
        let stub = spawn_stub_with_downloads(StubReply::json("{}"), Vec::new()).await;
        let dir = tempfile::tempdir().unwrap();

        let download = Download { url: "/download/gone.pdf".into(), filename: "gone.pdf".into() };
        let err = fetch_download(&reqwest::Client::new(), &stub.base, &download, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Http(_)));
        assert!(!dir.path().join("gone.pdf").exists());
    }
}
