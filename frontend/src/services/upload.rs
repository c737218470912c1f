//! Resume upload to the analysis backend.
//!
//! `POST {base}/upload` with a multipart body holding one `resume` part.
//! The body is parsed as JSON whatever the status; non-2xx responses
//! carry an optional `error` field.

use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

use crate::config::{endpoint, UPLOAD_FIELD};
use crate::types::{
    AnalysisResponse, AnalysisResult, AppError, AppResult, ErrorResponse, RawResponse, SelectedFile,
};

/// Sends the multipart request and hands back the raw response.
#[allow(async_fn_in_trait)]
pub trait ResumeTransport {
    /// File contents handle this transport knows how to send.
    type Handle: Clone;

    async fn post_resume(&self, url: &str, file: &SelectedFile<Self::Handle>) -> AppResult<RawResponse>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl ResumeTransport for BrowserTransport {
    type Handle = File;

    async fn post_resume(&self, url: &str, file: &SelectedFile<File>) -> AppResult<RawResponse> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file.handle, &file.name)
            .map_err(js_error)?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(http_error)?;

        let response = request
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

/// Upload a selected file and interpret the backend's answer.
pub async fn upload_resume<T: ResumeTransport>(
    transport: &T,
    base_url: &str,
    file: &SelectedFile<T::Handle>,
) -> AppResult<AnalysisResult> {
    let url = endpoint(base_url, "/upload");
    log::debug!("POST {} ({})", url, file.name);

    let raw = transport.post_resume(&url, file).await?;
    interpret_response(&raw)
}

/// Map a raw response to a result or an error.
pub fn interpret_response(raw: &RawResponse) -> AppResult<AnalysisResult> {
    let value: serde_json::Value =
        serde_json::from_str(&raw.body).map_err(|e| AppError::Parse(e.to_string()))?;

    if !raw.ok() {
        log::warn!("Backend answered {}", raw.status);
        let body: ErrorResponse = serde_json::from_value(value).unwrap_or_default();
        return Err(AppError::from_error_body(body));
    }

    if !value.is_object() {
        return Err(AppError::Parse("Expected a JSON object in the response".to_string()));
    }

    serde_json::from_value::<AnalysisResponse>(value)
        .map(AnalysisResult::from)
        .map_err(|e| AppError::Parse(e.to_string()))
}

/// Map a `gloo-net` failure, keeping only the message of JS exceptions.
pub(crate) fn http_error(error: gloo_net::Error) -> AppError {
    match error {
        gloo_net::Error::JsError(js) => AppError::Network(js.message),
        gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
        gloo_net::Error::GlooError(msg) => AppError::Network(msg),
    }
}

/// Message of a thrown JS value, empty if it has none.
pub(crate) fn js_error(value: JsValue) -> AppError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default();
    AppError::Network(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UploadState;
    use crate::widget::UploadWidget;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Replays a canned response and records what was sent.
    struct MockTransport {
        reply: AppResult<RawResponse>,
        sent: RefCell<Vec<(String, String)>>,
    }

    impl MockTransport {
        fn replying(reply: AppResult<RawResponse>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ResumeTransport for MockTransport {
        type Handle = Vec<u8>;

        async fn post_resume(&self, url: &str, file: &SelectedFile<Vec<u8>>) -> AppResult<RawResponse> {
            self.sent.borrow_mut().push((url.to_string(), file.name.clone()));
            self.reply.clone()
        }
    }

    fn resume_pdf() -> SelectedFile<Vec<u8>> {
        SelectedFile::new("resume.pdf", 2048, "application/pdf", vec![b'%'; 2048])
    }

    /// Click upload, await the request, apply the completion.
    fn click_upload(widget: &mut UploadWidget<Vec<u8>>, transport: &MockTransport) {
        let Ok((ticket, file)) = widget.begin_upload() else {
            return;
        };
        let outcome = block_on(upload_resume(transport, "http://127.0.0.1:5000", &file));
        widget.finish_upload(ticket, outcome);
    }

    #[test]
    fn test_successful_upload() {
        let transport = MockTransport::replying(Ok(RawResponse::new(
            200,
            r#"{"message":"OK","file_type":"pdf","file_size":120,"text":"Hello"}"#,
        )));
        let mut widget = UploadWidget::new();
        widget.select_file(resume_pdf()).unwrap();
        click_upload(&mut widget, &transport);

        let result = widget.result().unwrap();
        assert_eq!(result.message, "OK");
        assert_eq!(result.file_type, "pdf");
        assert_eq!(result.text_length, 120);
        assert_eq!(result.extracted_text.as_deref(), Some("Hello"));
        assert!(widget.error().is_none());
        assert_eq!(widget.state(), UploadState::Idle);

        let sent = transport.sent.borrow();
        assert_eq!(
            sent.as_slice(),
            &[("http://127.0.0.1:5000/upload".to_string(), "resume.pdf".to_string())]
        );
    }

    #[test]
    fn test_server_error_is_surfaced() {
        let transport =
            MockTransport::replying(Ok(RawResponse::new(500, r#"{"error":"parse failed"}"#)));
        let mut widget = UploadWidget::new();
        widget.select_file(resume_pdf()).unwrap();
        click_upload(&mut widget, &transport);

        assert_eq!(widget.error(), Some("parse failed"));
        assert!(widget.result().is_none());
        assert_eq!(widget.state(), UploadState::Idle);
    }

    #[test]
    fn test_server_error_without_error_field() {
        let transport = MockTransport::replying(Ok(RawResponse::new(400, r#"{"detail":"nope"}"#)));
        let mut widget = UploadWidget::new();
        widget.select_file(resume_pdf()).unwrap();
        click_upload(&mut widget, &transport);

        assert_eq!(widget.error(), Some("Upload failed"));
        assert_eq!(widget.state(), UploadState::Idle);
    }

    #[test]
    fn test_transport_failure() {
        let transport = MockTransport::replying(Err(AppError::Network("Failed to fetch".into())));
        let mut widget = UploadWidget::new();
        widget.select_file(resume_pdf()).unwrap();
        click_upload(&mut widget, &transport);

        assert_eq!(widget.error(), Some("Failed to fetch"));
        assert_eq!(widget.state(), UploadState::Idle);
    }

    #[test]
    fn test_transport_failure_without_message() {
        let transport = MockTransport::replying(Err(AppError::Network(String::new())));
        let mut widget = UploadWidget::new();
        widget.select_file(resume_pdf()).unwrap();
        click_upload(&mut widget, &transport);

        assert_eq!(widget.error(), Some("An error occurred while uploading the file."));
        assert_eq!(widget.state(), UploadState::Idle);
    }

    #[test]
    fn test_malformed_body() {
        let transport = MockTransport::replying(Ok(RawResponse::new(502, "<html>Bad Gateway</html>")));
        let mut widget = UploadWidget::new();
        widget.select_file(resume_pdf()).unwrap();
        click_upload(&mut widget, &transport);

        assert!(widget.error().is_some());
        assert!(widget.result().is_none());
        assert_eq!(widget.state(), UploadState::Idle);
    }

    #[test]
    fn test_no_file_means_no_request() {
        let transport = MockTransport::replying(Ok(RawResponse::new(200, "{}")));
        let mut widget = UploadWidget::new();
        click_upload(&mut widget, &transport);

        assert!(transport.sent.borrow().is_empty());
        assert_eq!(widget.error(), Some("Please select a file first."));
    }

    #[test]
    fn test_interpret_success_missing_fields() {
        let result = interpret_response(&RawResponse::new(200, r#"{"message":"OK"}"#)).unwrap();
        assert_eq!(result.message, "OK");
        assert_eq!(result.file_type, "");
        assert_eq!(result.text_length, 0);
        assert!(result.extracted_text.is_none());
    }

    #[test]
    fn test_interpret_success_float_file_size() {
        let raw = RawResponse::new(
            200,
            r#"{"message":"OK","file_type":"pdf","file_size":120.0,"text":"Hello"}"#,
        );
        let result = interpret_response(&raw).unwrap();
        assert_eq!(result.text_length, 120);
        assert_eq!(result.extracted_text.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_interpret_success_requires_object() {
        for body in ["[1, 2]", "\"done\"", "null"] {
            let err = interpret_response(&RawResponse::new(200, body)).unwrap_err();
            assert!(matches!(err, AppError::Parse(_)), "{body}");
        }
    }

    #[test]
    fn test_http_error_keeps_message_only() {
        assert_eq!(
            http_error(gloo_net::Error::GlooError("Failed to fetch".into())),
            AppError::Network("Failed to fetch".into())
        );
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            http_error(gloo_net::Error::SerdeError(serde_err)),
            AppError::Parse(_)
        ));
    }

    #[test]
    fn test_interpret_error_with_non_string_field() {
        let err = interpret_response(&RawResponse::new(500, r#"{"error": 42}"#)).unwrap_err();
        assert_eq!(err, AppError::Server(None));
    }
}
