//! Application configuration.
//!
//! The page is served by the conversion server itself, so requests go to
//! the same origin by default.

/// Prefix for the conversion endpoint. Empty means same origin.
pub const BACKEND_URL: &str = "";

/// Brand shown in the header and page title.
pub const APP_NAME: &str = "ProConverter";

/// Anchors shown in the header navigation, as `(href, label)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#tools", "Tools"),
    ("#upload", "Convert"),
    ("#about", "About"),
];
