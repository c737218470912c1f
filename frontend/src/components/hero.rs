//! Card header: title, description and backend status badge

use leptos::*;

use crate::components::BackendStatus;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="card-header">
            <h1>"📄 Resume Analyzer"</h1>
            <p>"Upload your resume file to extract and analyze its content"</p>
            <BackendStatus/>
        </div>
    }
}
