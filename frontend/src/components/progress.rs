//! Conversion progress: inline bar and full-page overlay.

use leptos::*;
use proconverter::css_width;

use crate::types::SharedController;

#[component]
pub fn ProgressSection() -> impl IntoView {
    let state = *expect_context::<SharedController>().view();

    view! {
        <div class="progress-container" id="progressContainer" class:show=move || state.busy.get()>
            <div class="progress-bar" id="progressBar" style:width=move || css_width(state.progress.get())></div>
        </div>
    }
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = *expect_context::<SharedController>().view();

    view! {
        <div class="loading-overlay" id="loadingOverlay" class:show=move || state.busy.get()>
            <div class="spinner"></div>
            <p>"Converting your files..."</p>
        </div>
    }
}
