//! UI Components for the file sharing application.
//!
//! # Layout Components
//! - [`Hero`] - Page heading and document title
//! - [`Footer`] - Navigation link to the other page
//!
//! # Feature Components
//! - [`UploadSection`] - Drag & drop / file picker uploader
//! - [`ProgressSection`] - Per-file progress bars and status
//! - [`FileList`] - Stored files with search and paging

mod hero;
mod footer;
mod upload;
mod progress;
mod file_list;

pub use hero::*;
pub use footer::*;
pub use upload::*;
pub use progress::*;
pub use file_list::*;
