//! Stored file records as reported by the file server.
//!
//! The server saves uploads as `<unix-timestamp>-<original name>` and answers
//! searches with a JSON array of [`RemoteFileRecord`], newest first.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Page size the server applies when none is given.
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

// =============================================================================
// Wire Types
// =============================================================================

/// Metadata of one stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileRecord {
    /// Name on the server, including the timestamp prefix.
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// RFC 3339 creation time.
    pub created_at: String,
}

impl RemoteFileRecord {
    /// The name the file was uploaded with.
    pub fn display_name(&self) -> &str {
        match self.filename.split_once('-') {
            Some((prefix, rest))
                if !prefix.is_empty()
                    && !rest.is_empty()
                    && prefix.bytes().all(|b| b.is_ascii_digit()) =>
            {
                rest
            }
            _ => &self.filename,
        }
    }

    pub fn uploaded_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

/// Body of the search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Filename pattern; empty matches every file.
    pub filename: String,
    /// Restrict to these extensions.
    pub extensions: Option<Vec<String>>,
    /// Zero-based page.
    pub page: usize,
    pub limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            filename: String::new(),
            extensions: None,
            page: 0,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchQuery {
    /// First page of everything, `limit` entries per page.
    pub fn all(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Same query with a new filename pattern, back on the first page.
    pub fn with_filename(&self, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            page: 0,
            ..self.clone()
        }
    }

    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    pub fn previous_page(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Whether a response of `count` records may have a following page.
    pub fn has_more(&self, count: usize) -> bool {
        self.limit > 0 && count >= self.limit
    }
}

// =============================================================================
// List Rows
// =============================================================================

/// One rendered row of the file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub display_name: String,
    pub stored_name: String,
    pub size_label: String,
    pub uploaded_label: String,
    pub download_url: String,
}

impl ListEntry {
    pub fn from_record(record: &RemoteFileRecord, config: &ServerConfig) -> Self {
        let uploaded_label = record
            .uploaded_at()
            .map(|t| t.naive_utc().format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| record.created_at.clone());

        Self {
            display_name: record.display_name().to_string(),
            stored_name: record.filename.clone(),
            size_label: format_size(record.size),
            uploaded_label,
            download_url: config.download_url(&record.filename),
        }
    }
}

/// One row per record, in server order.
pub fn build_listing(records: &[RemoteFileRecord], config: &ServerConfig) -> Vec<ListEntry> {
    records
        .iter()
        .map(|record| ListEntry::from_record(record, config))
        .collect()
}

/// Human-readable byte count, base 1024.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
