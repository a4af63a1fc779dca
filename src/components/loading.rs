//! Neutral full-screen loading indicator.

use leptos::prelude::*;

/// Spinner shown while the session is being resolved.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
        </div>
    }
}
