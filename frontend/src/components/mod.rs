//! UI Components for the ProConverter page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar, hamburger menu and auth links
//! - [`Hero`] - Title and call to action
//! - [`Footer`] - About blurb and links
//!
//! # Feature Components
//! - [`ToolsSection`] - Tool cards grouped by category
//! - [`UploadSection`] - Drag & drop upload area
//! - [`ProgressSection`] / [`LoadingOverlay`] - Conversion progress
//! - [`NotificationToast`] - Success and error toasts
//! - [`AuthModals`] - Signup and login modals

mod footer;
mod header;
mod hero;
mod modals;
mod notification;
mod progress;
mod tools;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use modals::*;
pub use notification::*;
pub use progress::*;
pub use tools::*;
pub use upload::*;
