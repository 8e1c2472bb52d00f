//! Header navigation state: scroll styling, active section, mobile menu.

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// A section counts as reached this many pixels before its top edge.
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;

pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Position of an anchored page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Id of the section the viewport is currently in.
///
/// Sections are expected in document order; the last one whose activation
/// point has been scrolled past wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at the given section.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Mobile hamburger menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a document click; clicks inside the header leave it alone.
    pub fn on_document_click(&mut self, inside_header: bool) {
        if !inside_header && self.open {
            self.open = false;
        }
    }
}
