//! # ProConverter - shared upload logic
//!
//! Everything the ProConverter clients need to talk to the conversion
//! server, minus the platform glue:
//!
//! ```text
//! ┌────────────┐   select_tool    ┌──────────────────┐   POST /convert   ┌────────────┐
//! │ Tool cards │ ───────────────▶ │ UploadController │ ────────────────▶ │   server   │
//! │ Drop zone  │ ───────────────▶ │ (progress, toast)│ ◀──────────────── │            │
//! └────────────┘   submit(files)  └──────────────────┘   JSON result     └────────────┘
//! ```
//!
//! The browser frontend and the `proconvert` CLI each implement the
//! controller's seams ([`ConversionClient`], [`UploadView`], [`Scheduler`])
//! for their platform.
//!
//! ## Modules
//!
//! - [`error`] - Precondition and submission errors
//! - [`tools`] - The fixed tool catalogue
//! - [`protocol`] - `/convert` request and response types
//! - [`controller`] - The upload controller and its seams
//! - [`progress`] - Cosmetic progress meter
//! - [`notification`] - Toast messages
//! - [`nav`] - Header scroll and menu state
//! - [`modal`] - Auth modal state
//! - [`config`] - Timing settings

pub mod config;
pub mod controller;
pub mod error;
pub mod modal;
pub mod nav;
pub mod notification;
pub mod progress;
pub mod protocol;
pub mod tools;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::UploadSettings;

pub use controller::{ConversionClient, Scheduler, SubmitOutcome, UploadController, UploadView};

pub use error::{PreconditionError, SubmissionError, SubmissionResult, ToolError};

pub use modal::{AuthModal, AUTH_MODE_FIELD, AUTH_PATH, EMAIL_FIELD, PASSWORD_FIELD, USERNAME_FIELD};

pub use nav::{active_section, is_header_scrolled, link_targets, MenuState, SectionBounds};

pub use notification::{Notification, NotificationKind};

pub use progress::{css_width, ProgressMeter};

pub use protocol::{ConvertRequest, ConvertResponse, Download, CONVERT_PATH, FILES_FIELD, TOOL_FIELD};

pub use tools::{is_allowed_file, Tool, ToolCategory, ALLOWED_EXTENSIONS};
