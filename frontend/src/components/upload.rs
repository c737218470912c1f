//! Resume upload component with drag & drop support.
//!
//! Owns the [`UploadWidget`] signal and binds every DOM event to one
//! widget transition. The upload itself runs in `spawn_local`; its
//! completion is applied back to the widget as another event.

use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::components::{ErrorAlert, FileInfo, ResultsPanel};
use crate::config::{api_base_url, ACCEPT_ATTR};
use crate::services::{upload_resume, BrowserTransport};
use crate::types::SelectedFile;
use crate::widget::UploadWidget;

/// First file of a list, wrapped with its metadata.
fn first_file(files: Option<web_sys::FileList>) -> Option<SelectedFile<File>> {
    files
        .and_then(|list| list.get(0))
        .map(SelectedFile::<File>::from_browser)
}

#[component]
pub fn UploadSection() -> impl IntoView {
    let widget = create_rw_signal(UploadWidget::<File>::new());
    let file_input = create_node_ref::<html::Input>();

    let is_uploading = move || widget.with(|w| w.is_uploading());
    let has_file = move || widget.with(|w| w.file().is_some());

    // File picker
    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            widget.update(|w| {
                let _ = w.select_file(file);
            });
        }
    };

    // Drag & drop
    let on_drag_enter = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        widget.update(|w| w.drag_enter());
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        widget.update(|w| w.drag_over());
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        widget.update(|w| w.drag_leave());
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let dropped = first_file(ev.data_transfer().and_then(|dt| dt.files()));
        widget.update(|w| {
            let _ = w.drop_file(dropped);
        });
    };

    // Clicking the drop area opens the hidden picker
    let open_picker = move |_| {
        if is_uploading() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_upload = move |_| {
        let Some(Ok((ticket, file))) = widget.try_update(|w| w.begin_upload()) else {
            return;
        };

        spawn_local(async move {
            let outcome = upload_resume(&BrowserTransport, api_base_url(), &file).await;
            widget.update(|w| {
                w.finish_upload(ticket, outcome);
            });
        });
    };

    let on_reset = move |_| {
        widget.update(|w| w.reset());
        // Let the same filename fire `change` again
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
        log::info!("Widget reset");
    };

    view! {
        <Show when=move || widget.with(|w| w.error().is_some())>
            <ErrorAlert message=Signal::derive(move || {
                widget.with(|w| w.error().unwrap_or_default().to_string())
            })/>
        </Show>

        <div class="upload-section">
            <div
                class="upload-area"
                class:dragover=move || widget.with(|w| w.drag_active())
                class:disabled=is_uploading
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"📁"</div>
                <h3>"Drop your resume here or click to browse"</h3>
                <p>"Supports PDF, DOC, and DOCX files"</p>
                <input
                    type="file"
                    accept=ACCEPT_ATTR
                    style="display:none"
                    node_ref=file_input
                    disabled=is_uploading
                    on:change=on_file_change
                />
            </div>

            {move || widget.with(|w| w.file().map(|f| view! {
                <FileInfo name=f.name.clone() size_bytes=f.size_bytes mime_type=f.mime_type.clone()/>
            }))}

            <div class="actions">
                <button
                    class="btn btn-primary"
                    on:click=on_upload
                    disabled=move || !widget.with(|w| w.can_upload())
                >
                    {move || if is_uploading() {
                        view! { <div class="spinner"></div>"Analyzing..." }.into_view()
                    } else {
                        "📤 Upload & Analyze".into_view()
                    }}
                </button>

                <Show when=has_file>
                    <button
                        class="btn btn-secondary"
                        on:click=on_reset
                        disabled=is_uploading
                    >
                        "🔄 Reset"
                    </button>
                </Show>
            </div>
        </div>

        {move || widget.with(|w| w.result().cloned()).map(|result| view! {
            <ResultsPanel result=result/>
        })}
    }
}
