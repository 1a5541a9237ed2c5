//! File server communication.
//!
//! # Services
//!
//! - [`upload`] - Multipart uploads over `XMLHttpRequest` with progress events
//! - [`files`] - Stored file search for the list page

pub mod upload;
pub mod files;

pub use upload::*;
pub use files::*;
