//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - `POST /convert` via `gloo-net`
//! - [`browser`] - timers, downloads and scrolling via `web-sys`

pub mod browser;
pub mod upload;

pub use browser::*;
pub use upload::*;
