//! The upload controller: tool selection, submission, progress and result
//! handling.
//!
//! The controller owns the selected tool and the in-flight flag. Everything
//! it touches outside itself goes through three seams so the same logic
//! drives the browser page and the terminal client:
//!
//! - [`ConversionClient`] - sends the multipart request
//! - [`UploadView`] - renders selection, progress, toasts and downloads
//! - [`Scheduler`] - repeating progress timer and the post-response pause
//!
//! All state lives in `Cell`s so the controller can be shared behind an
//! `Rc` and driven from a single-threaded event loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::config::UploadSettings;
use crate::error::{PreconditionError, SubmissionError, SubmissionResult};
use crate::notification::{Notification, SUCCESS_NOTICE};
use crate::progress::{ProgressMeter, PROGRESS_MIN};
use crate::protocol::{ConvertRequest, ConvertResponse, Download};
use crate::tools::Tool;

// =============================================================================
// Seams
// =============================================================================

/// Transport for the `/convert` exchange.
#[allow(async_fn_in_trait)]
pub trait ConversionClient {
    /// File handle the transport knows how to upload.
    type File;

    /// Send one submission and decode the response body.
    ///
    /// Network and decoding failures are returned as
    /// [`SubmissionError::Transport`] or [`SubmissionError::MalformedResponse`];
    /// an application-level failure comes back as an `Ok` response with
    /// `success: false`.
    async fn convert(&self, request: ConvertRequest<Self::File>) -> SubmissionResult<ConvertResponse>;
}

/// Typed view-model the controller renders into.
pub trait UploadView: Clone + 'static {
    /// Mark `tool` as the selected card and retitle the upload area.
    fn show_tool(&self, tool: Tool);
    /// Show or hide the loading overlay and progress container.
    fn set_busy(&self, busy: bool);
    fn set_progress(&self, percent: f64);
    fn notify(&self, notification: Notification);
    /// Hand the converted file to the user.
    fn download(&self, download: &Download);
}

/// Timers used while a submission is outstanding.
#[allow(async_fn_in_trait)]
pub trait Scheduler {
    /// Handle of a repeating timer. Dropping it stops the timer.
    type Interval;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Interval;

    async fn sleep(&self, duration: Duration);
}

// =============================================================================
// Outcome
// =============================================================================

/// What a call to [`UploadController::submit`] ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing to send.
    Ignored,
    /// Refused before any request was issued.
    Rejected(PreconditionError),
    /// The server converted the files.
    Converted(Download),
    /// The exchange failed.
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, SubmitOutcome::Converted(_))
    }
}

/// Clears the in-flight flag however `submit` exits, including when its
/// future is dropped mid-request.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

// =============================================================================
// Controller
// =============================================================================

pub struct UploadController<C, V, S> {
    client: C,
    view: V,
    scheduler: S,
    settings: UploadSettings,
    selected: Cell<Option<Tool>>,
    in_flight: Cell<bool>,
}

impl<C, V, S> UploadController<C, V, S>
where
    C: ConversionClient,
    V: UploadView,
    S: Scheduler,
{
    pub fn new(client: C, view: V, scheduler: S) -> Self {
        Self::with_settings(client, view, scheduler, UploadSettings::default())
    }

    pub fn with_settings(client: C, view: V, scheduler: S, settings: UploadSettings) -> Self {
        Self {
            client,
            view,
            scheduler,
            settings,
            selected: Cell::new(None),
            in_flight: Cell::new(false),
        }
    }

    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn selected_tool(&self) -> Option<Tool> {
        self.selected.get()
    }

    /// Whether a submission is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Record `tool` as the active selection, replacing any previous one.
    pub fn select_tool(&self, tool: Tool) {
        log::debug!("Tool selected: {}", tool);
        self.selected.set(Some(tool));
        self.view.show_tool(tool);
    }

    /// Submit `files` with the selected tool.
    ///
    /// Refuses without a network call when no tool is selected or another
    /// submission is outstanding; does nothing for an empty selection.
    /// Every exit path stops the progress timer and leaves the view ready
    /// for the next attempt.
    pub async fn submit(&self, files: Vec<C::File>) -> SubmitOutcome {
        let Some(tool) = self.selected.get() else {
            return self.reject(PreconditionError::NoToolSelected);
        };
        if files.is_empty() {
            log::debug!("Empty file selection, nothing to submit");
            return SubmitOutcome::Ignored;
        }
        if self.in_flight.get() {
            return self.reject(PreconditionError::SubmissionInFlight);
        }
        let _guard = InFlightGuard::acquire(&self.in_flight);

        log::info!("📤 Submitting {} file(s) to '{}'", files.len(), tool);

        self.view.set_busy(true);
        self.view.set_progress(PROGRESS_MIN);
        let meter = Rc::new(RefCell::new(ProgressMeter::new(self.settings.cap)));
        let ticker = self.start_ticker(Rc::clone(&meter));

        let response = self.client.convert(ConvertRequest { tool, files }).await;
        drop(ticker);

        let result = match response {
            Ok(response) => {
                let full = meter.borrow_mut().complete();
                self.view.set_progress(full);
                if !self.settings.result_delay.is_zero() {
                    self.scheduler.sleep(self.settings.result_delay).await;
                }
                response.into_download()
            }
            Err(err) => Err(err),
        };

        let empty = meter.borrow_mut().reset();
        self.view.set_progress(empty);
        self.view.set_busy(false);

        match result {
            Ok(download) => {
                log::info!("✅ Converted with '{}': {}", tool, download.filename);
                self.view.notify(Notification::success(SUCCESS_NOTICE));
                self.view.download(&download);
                SubmitOutcome::Converted(download)
            }
            Err(err) => {
                log::warn!("❌ Conversion with '{}' failed: {}", tool, err);
                self.view.notify(Notification::error(err.notice()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn reject(&self, reason: PreconditionError) -> SubmitOutcome {
        log::info!("Submission refused: {}", reason);
        self.view.notify(Notification::error(reason.notice()));
        SubmitOutcome::Rejected(reason)
    }

    fn start_ticker(&self, meter: Rc<RefCell<ProgressMeter>>) -> S::Interval {
        let view = self.view.clone();
        let max_step = self.settings.max_step;
        self.scheduler.every(
            self.settings.tick,
            Box::new(move || {
                let value = meter.borrow_mut().advance_random(max_step);
                view.set_progress(value);
            }),
        )
    }
}
