//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Widget Types** - selected file, upload state, analysis result
//! - **API Types** - backend request/response structures
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::config::{
    MSG_NO_FILE, MSG_UNSUPPORTED_FILE, MSG_UPLOAD_ERROR, MSG_UPLOAD_FAILED,
};

// =============================================================================
// Widget Types
// =============================================================================

/// The file currently chosen for upload.
///
/// `H` is the handle to the file contents: a browser `File` in the app,
/// any clonable payload in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H> {
    /// Original filename
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Browser-reported MIME type, possibly empty
    pub mime_type: String,
    /// File contents handle
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            handle,
        }
    }
}

impl SelectedFile<web_sys::File> {
    /// Wrap a browser file, reading its metadata.
    pub fn from_browser(file: web_sys::File) -> Self {
        let size_bytes = file.size().max(0.0) as u64;
        Self::new(file.name(), size_bytes, file.type_(), file)
    }
}

/// Whether a request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
}

/// What the backend extracted from the last successful upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    pub message: String,
    pub file_type: String,
    /// Length of the extracted text, in characters
    pub text_length: u64,
    pub extracted_text: Option<String>,
}

impl From<AnalysisResponse> for AnalysisResult {
    fn from(response: AnalysisResponse) -> Self {
        Self {
            message: response.message,
            file_type: response.file_type,
            text_length: response.file_size,
            extracted_text: response.text,
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Success body of `POST /upload`.
///
/// Missing fields render blank rather than failing the upload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_type: String,
    /// Named `file_size` on the wire but holds the extracted text length
    #[serde(default, deserialize_with = "any_number_as_length")]
    pub file_size: u64,
    #[serde(default)]
    pub text: Option<String>,
}

/// Accept any JSON number (or null), truncated to a non-negative length.
fn any_number_as_length<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number
        .map(|n| n.as_u64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0).max(0.0) as u64))
        .unwrap_or(0))
}

/// Error body the backend returns with non-2xx statuses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Status code and body text as received, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// `Display` renders exactly what the error alert shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Unsupported file type at intake.
    Validation,
    /// Upload triggered with no file selected.
    NoFileSelected,
    /// Intake attempted while a request is in flight.
    Busy,
    /// Non-2xx response, carrying the server's `error` field if any.
    Server(Option<String>),
    /// Request never produced a response.
    Network(String),
    /// Response body could not be decoded.
    Parse(String),
}

impl AppError {
    /// Build a server error from a decoded error body.
    pub fn from_error_body(body: ErrorResponse) -> Self {
        AppError::Server(body.error.filter(|e| !e.is_empty()))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation => f.write_str(MSG_UNSUPPORTED_FILE),
            AppError::NoFileSelected => f.write_str(MSG_NO_FILE),
            AppError::Busy => f.write_str("An upload is already in progress."),
            AppError::Server(Some(msg)) => f.write_str(msg),
            AppError::Server(None) => f.write_str(MSG_UPLOAD_FAILED),
            AppError::Network(msg) | AppError::Parse(msg) if msg.is_empty() => {
                f.write_str(MSG_UPLOAD_ERROR)
            }
            AppError::Network(msg) | AppError::Parse(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Validation.to_string(),
            "Please upload a PDF, DOC, or DOCX file."
        );
        assert_eq!(AppError::NoFileSelected.to_string(), "Please select a file first.");
        assert_eq!(AppError::Server(Some("parse failed".into())).to_string(), "parse failed");
        assert_eq!(AppError::Server(None).to_string(), "Upload failed");
        assert_eq!(
            AppError::Network(String::new()).to_string(),
            "An error occurred while uploading the file."
        );
        assert_eq!(AppError::Network("Failed to fetch".into()).to_string(), "Failed to fetch");
    }

    #[test]
    fn test_empty_error_field_falls_back() {
        let err = AppError::from_error_body(ErrorResponse {
            error: Some(String::new()),
        });
        assert_eq!(err.to_string(), "Upload failed");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "message": "File resume.pdf uploaded successfully!",
            "text": "Jane Doe\nSoftware Engineer",
            "file_size": 26,
            "file_type": ".pdf"
        }"#;

        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        let result = AnalysisResult::from(response);
        assert_eq!(result.file_type, ".pdf");
        assert_eq!(result.text_length, 26);
        assert_eq!(result.extracted_text.as_deref(), Some("Jane Doe\nSoftware Engineer"));
    }

    #[test]
    fn test_response_without_text() {
        let json = r#"{"message": "OK", "file_type": "docx", "file_size": 0}"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert!(response.text.is_none());
    }

    #[test]
    fn test_response_file_size_any_number() {
        let parse = |json: &str| serde_json::from_str::<AnalysisResponse>(json).unwrap().file_size;
        assert_eq!(parse(r#"{"file_size": 120.0}"#), 120);
        assert_eq!(parse(r#"{"file_size": 7.9}"#), 7);
        assert_eq!(parse(r#"{"file_size": -3}"#), 0);
        assert_eq!(parse(r#"{"file_size": null}"#), 0);
        assert_eq!(parse(r#"{}"#), 0);
    }

    #[test]
    fn test_raw_response_ok_range() {
        assert!(RawResponse::new(200, "").ok());
        assert!(RawResponse::new(204, "").ok());
        assert!(!RawResponse::new(199, "").ok());
        assert!(!RawResponse::new(400, "").ok());
        assert!(!RawResponse::new(500, "").ok());
    }

    #[test]
    fn test_health_status() {
        let status: HealthStatus = serde_json::from_str(
            r#"{"message": "Resume Analyzer Backend is running!", "status": "healthy"}"#,
        )
        .unwrap();
        assert!(status.is_healthy());
        assert!(!HealthStatus { message: String::new(), status: "degraded".into() }.is_healthy());
    }
}
