//! # File Sharing - upload tracking and file server contracts
//!
//! Platform-independent half of the file sharing UI. Everything here runs
//! natively so the upload state machine can be tested without a browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Selection  │────▶│  Dispatch   │────▶│  Transport  │────▶│ ProgressSink│
//! │ (N files)   │     │ (1 per file)│     │ (XHR, mock) │     │  (store)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Client and configuration errors
//! - [`config`] - File server base URL and endpoint construction
//! - [`task`] - Per-file upload state machine
//! - [`store`] - Progress/status store keyed by task identity
//! - [`dispatch`] - One upload per selected file
//! - [`records`] - Stored file records, search queries, list rows

// Core modules
pub mod error;
pub mod config;

// Upload tracking
pub mod task;
pub mod store;
pub mod dispatch;

// File listing
pub mod records;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ServerConfig, DEFAULT_BASE_URL};
pub use dispatch::{dispatch, progress_event, ProgressSink, SelectedFile, UploadTransport};
pub use error::{ClientError, ClientResult, ConfigError, ConfigResult};
pub use records::{build_listing, format_size, ListEntry, RemoteFileRecord, SearchQuery};
pub use store::{KeyMode, ProgressStore, StoreSummary};
pub use task::{FailureReason, TaskId, TaskKey, UploadEvent, UploadState, UploadTask};
