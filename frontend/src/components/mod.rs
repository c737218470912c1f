//! UI Components for the Resume Analyzer application.
//!
//! # Layout Components
//! - [`Hero`] - Title, description and backend status
//! - [`BackendStatus`] - Backend liveness badge
//!
//! # Feature Components
//! - [`UploadSection`] - Resume intake with drag & drop, upload and reset
//! - [`FileInfo`] - Selected file summary
//! - [`ResultsPanel`] - Extracted text and metadata
//! - [`ErrorAlert`] - Inline error message

mod alert;
mod file_info;
mod hero;
mod results;
mod status;
mod upload;

pub use alert::*;
pub use file_info::*;
pub use hero::*;
pub use results::*;
pub use status::*;
pub use upload::*;
