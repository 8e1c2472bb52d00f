//! Shared frontend types.
//!
//! - **View state** - signals the upload controller renders into
//! - **Controller** - the controller wired with browser seams

use std::rc::Rc;
use std::time::Duration;

use leptos::*;
use proconverter::{Download, Notification, Tool, UploadController, UploadSettings, UploadView};

use crate::services::{trigger_download, BrowserScheduler, GlooClient};

// =============================================================================
// View State
// =============================================================================

/// A toast on screen. `seq` lets a stale dismissal timer recognise that a
/// newer toast replaced the one it was started for.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub seq: u64,
    pub notification: Notification,
}

/// Reactive view-model for the upload flow.
///
/// Every field is a `Copy` signal, so the view is cheap to hand to the
/// controller and to the progress timer.
#[derive(Clone, Copy)]
pub struct UploadState {
    pub selected_tool: RwSignal<Option<Tool>>,
    pub busy: RwSignal<bool>,
    pub progress: RwSignal<f64>,
    pub toast: RwSignal<Option<Toast>>,
    toast_seq: StoredValue<u64>,
    notification_ttl: Duration,
}

impl UploadState {
    pub fn new() -> Self {
        Self::with_notification_ttl(UploadSettings::default().notification_ttl)
    }

    /// State whose toasts dismiss themselves after `notification_ttl`.
    pub fn with_notification_ttl(notification_ttl: Duration) -> Self {
        Self {
            selected_tool: create_rw_signal(None),
            busy: create_rw_signal(false),
            progress: create_rw_signal(0.0),
            toast: create_rw_signal(None),
            toast_seq: store_value(0),
            notification_ttl,
        }
    }

    /// Heading of the upload area.
    pub fn upload_heading(&self) -> String {
        match self.selected_tool.get() {
            Some(tool) => format!("Upload files to {}", tool.label()),
            None => "Select a tool, then drop your files here".to_string(),
        }
    }

    fn show_toast(&self, notification: Notification) {
        let seq = self.toast_seq.get_value() + 1;
        self.toast_seq.set_value(seq);
        self.toast.set(Some(Toast { seq, notification }));

        let toast = self.toast;
        set_timeout(
            move || {
                toast.update(|current| {
                    if current.as_ref().is_some_and(|t| t.seq == seq) {
                        *current = None;
                    }
                });
            },
            self.notification_ttl,
        );
    }
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadView for UploadState {
    fn show_tool(&self, tool: Tool) {
        self.selected_tool.set(Some(tool));
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn set_progress(&self, percent: f64) {
        self.progress.set(percent);
    }

    fn notify(&self, notification: Notification) {
        log::info!("🔔 {}", notification.message);
        self.show_toast(notification);
    }

    fn download(&self, download: &Download) {
        if let Err(e) = trigger_download(download) {
            log::error!("Failed to trigger download of {}: {:?}", download.filename, e);
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// The upload controller wired with browser seams.
pub type BrowserController = UploadController<GlooClient, UploadState, BrowserScheduler>;

/// Handle passed through Leptos context.
pub type SharedController = Rc<BrowserController>;
