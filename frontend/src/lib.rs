//! Resume Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a resume (PDF, DOC, DOCX) to the
//! analysis backend and showing the text it extracted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, backend status)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadSection  (owns UploadWidget)                          │
//! │  ├── ErrorAlert                                              │
//! │  ├── drop area + hidden file picker                          │
//! │  ├── FileInfo (when a file is selected)                      │
//! │  ├── actions (upload, reset)                                 │
//! │  └── ResultsPanel (after a successful upload)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL and fixed settings
//! - [`types`] - Common types (SelectedFile, AnalysisResult, AppError, etc.)
//! - [`widget`] - Upload widget state machine
//! - [`format`] - Display helpers
//! - [`components`] - UI components
//! - [`services`] - Backend communication (upload, health)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod format;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Widget
    SelectedFile, UploadState, AnalysisResult,
    // API
    AnalysisResponse, ErrorResponse, HealthStatus, RawResponse,
    // Errors
    AppError, AppResult,
};

// State machine
pub use widget::{is_supported, UploadTicket, UploadWidget};

// Formatting
pub use format::format_file_size;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
///
/// Called from the binary's `main`, which trunk builds.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Resume Analyzer - backend at {}", api_base_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Resume Analyzer"/>
        <Router>
            <main class="app">
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <div class="card">
                <Hero/>
                <UploadSection/>
            </div>
        </div>
    }
}
