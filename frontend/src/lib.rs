//! ProConverter - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for picking a conversion tool, uploading files to
//! the conversion server and downloading the result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, hamburger, auth links)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero                                                    │
//! │  ├── ToolsSection (tool cards)                               │
//! │  ├── UploadSection (drop zone + progress bar)                │
//! │  ├── LoadingOverlay / NotificationToast                      │
//! │  └── AuthModals                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - View state and the browser-wired controller
//! - [`components`] - UI components (Header, Tools, Upload, etc.)
//! - [`services`] - Conversion client and browser glue

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use proconverter::{AuthModal, UploadController, UploadSettings};

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{BrowserController, SharedController, Toast, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs the panic hook and logger, then mounts [`App`] on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let settings = UploadSettings::default();
    let state = UploadState::with_notification_ttl(settings.notification_ttl);
    let controller: SharedController = Rc::new(UploadController::with_settings(
        GlooClient::new(BACKEND_URL),
        state,
        BrowserScheduler,
        settings,
    ));
    provide_context(controller);

    let modal = create_rw_signal(AuthModal::Closed);
    let upload_area = create_node_ref::<html::Div>();

    view! {
        <Header modal=modal/>

        <div class="container">
            <Hero/>
            <ToolsSection upload_area=upload_area/>
            <UploadSection area_ref=upload_area/>
        </div>

        <LoadingOverlay/>
        <NotificationToast/>
        <AuthModals modal=modal/>

        <Footer/>
    }
}
