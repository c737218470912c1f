//! Upload widget state machine.
//!
//! All client state lives in one [`UploadWidget`] value, owned by the
//! upload component through a signal. Every event (file selected,
//! drag, upload click, upload completion, reset) is one method call
//! performing a synchronous transition. The network call itself sits
//! between [`UploadWidget::begin_upload`] and [`UploadWidget::finish_upload`].

use crate::config::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES};
use crate::types::{AnalysisResult, AppError, AppResult, SelectedFile, UploadState};

/// Identifies one dispatched upload.
///
/// Completions carrying a ticket from before the last reset are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// Whether a file passes intake.
///
/// Permissive OR: a known MIME type or a known extension is enough.
pub fn is_supported(name: &str, mime_type: &str) -> bool {
    let ext = extension(name);
    ALLOWED_MIME_TYPES.iter().any(|m| *m == mime_type)
        || ALLOWED_EXTENSIONS.iter().any(|e| *e == ext)
}

/// Last dot-segment of a filename, lowercased.
///
/// A name without a dot yields the whole name.
fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

#[derive(Clone, Debug)]
pub struct UploadWidget<H> {
    file: Option<SelectedFile<H>>,
    state: UploadState,
    result: Option<AnalysisResult>,
    error: Option<String>,
    drag_active: bool,
    generation: u64,
}

impl<H> Default for UploadWidget<H> {
    fn default() -> Self {
        Self {
            file: None,
            state: UploadState::Idle,
            result: None,
            error: None,
            drag_active: false,
            generation: 0,
        }
    }
}

impl<H: Clone> UploadWidget<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile<H>> {
        self.file.as_ref()
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_uploading(&self) -> bool {
        self.state == UploadState::Uploading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// The upload button is usable.
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.is_uploading()
    }

    // -------------------------------------------------------------------------
    // Intake
    // -------------------------------------------------------------------------

    /// Validate a candidate and make it the current selection.
    ///
    /// Rejection sets the error message and keeps the previous file.
    /// While an upload is in flight nothing changes and `Busy` is returned.
    pub fn select_file(&mut self, candidate: SelectedFile<H>) -> AppResult<()> {
        if self.is_uploading() {
            log::warn!("Ignoring {} while an upload is in flight", candidate.name);
            return Err(AppError::Busy);
        }

        if !is_supported(&candidate.name, &candidate.mime_type) {
            log::warn!(
                "Rejected {} (type: {:?})",
                candidate.name,
                candidate.mime_type
            );
            self.error = Some(AppError::Validation.to_string());
            return Err(AppError::Validation);
        }

        log::info!("Selected {} ({} bytes)", candidate.name, candidate.size_bytes);
        self.file = Some(candidate);
        self.error = None;
        self.result = None;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Drag tracking
    // -------------------------------------------------------------------------

    /// Highlight the drop area, unless a drop would be refused.
    pub fn drag_enter(&mut self) {
        self.drag_active = !self.is_uploading();
    }

    pub fn drag_over(&mut self) {
        self.drag_active = !self.is_uploading();
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Clear the hover flag and run intake on the first dropped file, if any.
    pub fn drop_file(&mut self, candidate: Option<SelectedFile<H>>) -> AppResult<()> {
        self.drag_active = false;
        match candidate {
            Some(file) => self.select_file(file),
            None => Ok(()),
        }
    }

    // -------------------------------------------------------------------------
    // Upload
    // -------------------------------------------------------------------------

    /// Enter `Uploading` and return what to send.
    ///
    /// With no file selected, sets the precondition error and returns it;
    /// no request must be made in that case.
    pub fn begin_upload(&mut self) -> AppResult<(UploadTicket, SelectedFile<H>)> {
        if self.is_uploading() {
            return Err(AppError::Busy);
        }

        let Some(file) = self.file.clone() else {
            self.error = Some(AppError::NoFileSelected.to_string());
            return Err(AppError::NoFileSelected);
        };

        self.state = UploadState::Uploading;
        self.error = None;
        log::info!("Uploading {}", file.name);
        Ok((UploadTicket(self.generation), file))
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Always leaves the widget `Idle` unless the ticket is stale, in
    /// which case the outcome is dropped. Returns whether it was applied.
    pub fn finish_upload(&mut self, ticket: UploadTicket, outcome: AppResult<AnalysisResult>) -> bool {
        if ticket != UploadTicket(self.generation) || !self.is_uploading() {
            log::warn!("Dropping stale upload completion");
            return false;
        }

        match outcome {
            Ok(result) => {
                log::info!("Upload succeeded: {}", result.message);
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                log::error!("Upload failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
        self.state = UploadState::Idle;
        true
    }

    // -------------------------------------------------------------------------
    // Reset
    // -------------------------------------------------------------------------

    /// Back to the initial state. Any in-flight upload becomes stale.
    pub fn reset(&mut self) {
        self.file = None;
        self.result = None;
        self.error = None;
        self.drag_active = false;
        self.state = UploadState::Idle;
        self.generation += 1;
    }
}
