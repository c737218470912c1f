//! Application configuration.
//!
//! Centralized configuration for the Resume Analyzer frontend.
//! The backend address is baked in at build time from `API_BASE_URL`,
//! everything else is fixed.

/// Default backend base URL, used when `API_BASE_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Multipart field name the backend reads the resume from.
pub const UPLOAD_FIELD: &str = "resume";

/// MIME types accepted at intake.
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// File extensions accepted at intake (compared lowercase).
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Value of the picker's `accept` attribute.
pub const ACCEPT_ATTR: &str = ".pdf,.doc,.docx";

/// Shown when intake rejects a file.
pub const MSG_UNSUPPORTED_FILE: &str = "Please upload a PDF, DOC, or DOCX file.";

/// Shown when upload is triggered with nothing selected.
pub const MSG_NO_FILE: &str = "Please select a file first.";

/// Fallback for a non-2xx response without an `error` field.
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";

/// Fallback for transport failures that carry no message.
pub const MSG_UPLOAD_ERROR: &str = "An error occurred while uploading the file.";

/// Placeholder for results without extracted text.
pub const MSG_NO_TEXT: &str = "No text could be extracted from this file type.";

/// Backend API base URL.
///
/// Read once from the build environment, trailing slashes trimmed so
/// paths can be appended directly.
pub fn api_base_url() -> &'static str {
    base_url_or_default(option_env!("API_BASE_URL"))
}

fn base_url_or_default(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Join a path onto a base URL.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
