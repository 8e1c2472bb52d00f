//! CLI configuration.
//!
//! Values come from flags, falling back to environment variables (a `.env`
//! file is loaded first), falling back to the defaults below.

use std::path::PathBuf;

use url::Url;

use crate::error::{CliError, CliResult};

/// Conversion server used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Environment variable holding the server URL.
pub const SERVER_URL_ENV: &str = "PROCONVERTER_URL";

/// Environment variable holding the download directory.
pub const OUTPUT_DIR_ENV: &str = "PROCONVERTER_OUTPUT";

/// Parse a server base URL.
///
/// Only `http` and `https` are accepted. A missing trailing slash is added
/// so relative download paths resolve under the same prefix.
pub fn parse_server_url(raw: &str) -> CliResult<Url> {
    let invalid = |reason: String| CliError::InvalidServerUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Settings for one `convert` run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub server: Url,
    pub output_dir: PathBuf,
    /// Fetch the converted file after a successful conversion.
    pub download: bool,
    /// Hide the progress bar.
    pub quiet: bool,
}

impl ConvertOptions {
    pub fn new(server: Url) -> Self {
        Self {
            server,
            output_dir: PathBuf::from("."),
            download: true,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_parses() {
        let url = parse_server_url(DEFAULT_SERVER_URL).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_trailing_slash_added() {
        let url = parse_server_url("https://convert.example.com/app").unwrap();
        assert_eq!(url.path(), "/app/");
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = parse_server_url("ftp://files.example.com").unwrap_err();
        assert!(matches!(err, CliError::InvalidServerUrl { .. }));
        assert!(parse_server_url("not a url").is_err());
    }
}
