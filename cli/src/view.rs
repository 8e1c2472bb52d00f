//! Terminal rendering of the upload flow.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use proconverter::{Download, Notification, NotificationKind, Tool, UploadView};

/// Progress bar plus stderr toasts.
///
/// Notifications are also kept so the caller can report them after the
/// bar is gone.
#[derive(Clone)]
pub struct TerminalView {
    bar: ProgressBar,
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl TerminalView {
    /// A view drawing to stderr, or drawing nothing when `quiet`.
    pub fn new(quiet: bool) -> Self {
        let bar = ProgressBar::new(100);
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        Self {
            bar,
            notifications: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn hidden() -> Self {
        Self::new(true)
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }
}

impl UploadView for TerminalView {
    fn show_tool(&self, tool: Tool) {
        self.bar.set_message(format!("Upload files to {}", tool.label()));
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            self.bar.reset();
            self.bar.enable_steady_tick(Duration::from_millis(100));
        } else {
            self.bar.disable_steady_tick();
            self.bar.finish_and_clear();
        }
    }

    fn set_progress(&self, percent: f64) {
        self.bar.set_position(percent.clamp(0.0, 100.0).round() as u64);
    }

    fn notify(&self, notification: Notification) {
        let icon = match notification.kind {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        };
        if !self.bar.is_hidden() {
            self.bar.suspend(|| eprintln!("{} {}", icon, notification.message));
        }
        self.notifications.borrow_mut().push(notification);
    }

    fn download(&self, download: &Download) {
        log::info!("📥 Download ready: {} ({})", download.filename, download.url);
    }
}
