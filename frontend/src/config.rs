//! Application configuration.
//!
//! `FILE_SERVER_API` is fixed at build time by `build.rs`; everything else is
//! a compile-time constant.

use file_sharing::{KeyMode, ServerConfig};

/// File server base URL baked in at build time.
pub const FILE_SERVER_API: &str = env!("FILE_SERVER_API");

/// How uploads are keyed in the progress store.
///
/// `KeyMode::FileName` reproduces the old behaviour where same-named files
/// share one progress bar.
pub const KEY_MODE: KeyMode = KeyMode::TaskId;

/// Records requested per page on the file list.
pub const LIST_PAGE_SIZE: usize = 100;

/// Endpoints of the configured file server.
///
/// Falls back to same-origin when the baked value is invalid.
pub fn server_config() -> ServerConfig {
    resolve_server_config(FILE_SERVER_API)
}

fn resolve_server_config(base_url: &str) -> ServerConfig {
    ServerConfig::new(base_url).unwrap_or_else(|e| {
        log::warn!("{}, using same-origin file server", e);
        ServerConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_falls_back_to_same_origin() {
        let config = resolve_server_config("not a url");
        assert_eq!(config.upload_url(), "/api/upload");
    }

    #[test]
    fn test_hostless_base_falls_back_to_same_origin() {
        for base in ["http://", "https://", "http:///"] {
            assert_eq!(resolve_server_config(base).upload_url(), "/api/upload");
        }
    }

    #[test]
    fn test_valid_base_is_kept() {
        let config = resolve_server_config("http://localhost:8080");
        assert_eq!(config.search_url(), "http://localhost:8080/api/search");
    }
}
