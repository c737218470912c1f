//! Analysis results panel.

use leptos::*;

use crate::components::InfoItem;
use crate::format::{display_text, display_text_length};
use crate::types::AnalysisResult;

#[component]
pub fn ResultsPanel(result: AnalysisResult) -> impl IntoView {
    let text = display_text(result.extracted_text.as_deref()).to_string();

    view! {
        <div class="results-container">
            <h2>"Analysis Results"</h2>

            <div class="alert alert-success">
                <strong>"Success!"</strong> " " {result.message}
            </div>

            <div class="file-info">
                <InfoItem label="File Type" value=result.file_type/>
                <InfoItem label="Text Length" value=display_text_length(result.text_length)/>
            </div>

            <h3>"Extracted Text Preview"</h3>
            <div class="text-preview">{text}</div>
        </div>
    }
}
