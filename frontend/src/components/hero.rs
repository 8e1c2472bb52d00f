//! Hero section component

use leptos::ev::MouseEvent;
use leptos::*;

use crate::services::smooth_scroll_to_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1>"Convert your documents in seconds"</h1>
            <p class="subtitle">
                "PDF, Word, Excel, PowerPoint and images. "
                "Pick a tool, drop your files and download the result."
            </p>
            <a href="#tools" class="cta-btn" on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                smooth_scroll_to_anchor("#tools");
            }>
                "Choose a tool"
            </a>
        </section>
    }
}
