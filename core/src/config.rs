//! File server configuration.
//!
//! A single base URL (`FILE_SERVER_API`) serves the upload, search and
//! download endpoints. The base is normalised once so endpoint paths can be
//! appended without producing `//api/...`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::{ConfigError, ConfigResult};

/// Same-origin default used when `FILE_SERVER_API` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "/";

/// Characters escaped in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Endpoints of the remote file server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL without a trailing slash (`""` means same-origin root).
    base: String,
}

impl ServerConfig {
    /// Build a configuration from a raw `FILE_SERVER_API` value.
    ///
    /// Accepts an empty value (same-origin), an absolute path or an
    /// `http://` / `https://` URL.
    pub fn new(base_url: &str) -> ConfigResult<Self> {
        let trimmed = base_url.trim();
        let raw = if trimmed.is_empty() { DEFAULT_BASE_URL } else { trimmed };

        let valid = match raw.strip_prefix("http://").or_else(|| raw.strip_prefix("https://")) {
            Some(rest) => has_authority(rest),
            None => raw.starts_with('/') && !raw.starts_with("//"),
        };
        if !valid {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL as configured, `/` for same-origin.
    pub fn base_url(&self) -> &str {
        if self.base.is_empty() {
            DEFAULT_BASE_URL
        } else {
            &self.base
        }
    }

    /// `POST` target for multipart uploads.
    pub fn upload_url(&self) -> String {
        self.endpoint("/api/upload")
    }

    /// `POST` target for file searches.
    pub fn search_url(&self) -> String {
        self.endpoint("/api/search")
    }

    /// `GET` target for a stored file.
    pub fn download_url(&self, stored_name: &str) -> String {
        let segment = utf8_percent_encode(stored_name, PATH_SEGMENT);
        self.endpoint(&format!("/api/download/{}", segment))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Whatever follows the scheme must start with a non-empty host.
fn has_authority(rest: &str) -> bool {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !authority.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url(), "/");
        assert_eq!(config.upload_url(), "/api/upload");
        assert_eq!(config, ServerConfig::new("").unwrap());
        assert_eq!(config, ServerConfig::new("/").unwrap());
    }

    #[test]
    fn test_absolute_base_with_trailing_slash() {
        let config = ServerConfig::new("http://localhost:8080/").unwrap();
        assert_eq!(config.upload_url(), "http://localhost:8080/api/upload");
        assert_eq!(config.search_url(), "http://localhost:8080/api/search");
    }

    #[test]
    fn test_path_prefix() {
        let config = ServerConfig::new("/files").unwrap();
        assert_eq!(config.upload_url(), "/files/api/upload");
        assert_eq!(config.base_url(), "/files");
    }

    #[test]
    fn test_invalid_base() {
        assert!(ServerConfig::new("localhost:8080").is_err());
        assert!(ServerConfig::new("ftp://host").is_err());
        assert!(ServerConfig::new("//cdn.example.com").is_err());
    }

    #[test]
    fn test_hostless_url_rejected() {
        for base in ["http://", "https://", "http:///", "https:///files", "http://?x", " https:// "] {
            assert!(ServerConfig::new(base).is_err(), "{:?} accepted", base);
        }
        assert_eq!(
            ServerConfig::new("https://files.example.com:8443/").unwrap().upload_url(),
            "https://files.example.com:8443/api/upload"
        );
    }

    #[test]
    fn test_download_url_encodes_segment() {
        let config = ServerConfig::new("https://files.example.com").unwrap();
        assert_eq!(
            config.download_url("1718000000-my report#1.pdf"),
            "https://files.example.com/api/download/1718000000-my%20report%231.pdf"
        );
        assert_eq!(config.download_url("a/b"), "https://files.example.com/api/download/a%2Fb");
    }
}
