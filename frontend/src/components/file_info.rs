//! Summary of the selected file.

use leptos::*;

use crate::format::{display_mime_type, format_file_size};

#[component]
pub fn FileInfo(name: String, size_bytes: u64, mime_type: String) -> impl IntoView {
    let size = format_file_size(size_bytes);
    let mime = display_mime_type(&mime_type).to_string();

    view! {
        <div class="file-info">
            <InfoItem label="File Name" value=name/>
            <InfoItem label="File Size" value=size/>
            <InfoItem label="File Type" value=mime/>
        </div>
    }
}

/// One label/value row of an info panel.
#[component]
pub fn InfoItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="file-info-item">
            <span class="file-info-label">{label}</span>
            <span class="file-info-value">{value}</span>
        </div>
    }
}
