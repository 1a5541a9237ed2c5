//! File Sharing UI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading files to a file server and
//! browsing what has been stored there.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  /  UploadPage               │  /file-list  FileListPage    │
//! │  ├── Hero                    │  ├── Hero                    │
//! │  ├── UploadSection           │  ├── FileList                │
//! │  ├── ProgressSection         │  │   (search, entries, pager)│
//! │  └── Footer ──▶ /file-list   │  └── Footer ──▶ /            │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time file server configuration
//! - [`components`] - UI components (Upload, Progress, FileList, etc.)
//! - [`services`] - File server communication (upload, search)

use file_sharing::ProgressStore;
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/file-list" view=FileListPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    // Lives as long as the page; leaving the route drops all tracked uploads.
    let store = create_rw_signal(ProgressStore::new(KEY_MODE));

    view! {
        <div class="container">
            <Hero title="File Sharing UI"/>
            <UploadSection store=store/>
            <ProgressSection store=store/>
        </div>
        <Footer href="/file-list" label="View Uploaded Files"/>
    }
}

#[component]
fn FileListPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero title="All Uploaded Files" subtitle="Newest uploads first"/>
            <FileList/>
        </div>
        <Footer href="/" label="Upload More Files"/>
    }
}
