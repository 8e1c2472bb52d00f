//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2>"About " {APP_NAME}</h2>
            <p>
                "Files are converted on our server and offered back as a download. "
                "Uploads and converted files are deleted automatically within about an hour."
            </p>
        </section>
        <footer>
            <div>"Copyright © 2025 " {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="#tools" class="footer-link">"Tools"</a>
                <a href="#upload" class="footer-link">"Convert"</a>
            </div>
        </footer>
    }
}
