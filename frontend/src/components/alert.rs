//! Inline error alert

use leptos::*;

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="alert alert-error">
            <strong>"Error:"</strong> " " {message}
        </div>
    }
}
