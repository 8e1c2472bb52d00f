//! Browser glue: timers, downloads, scrolling.

use std::time::Duration;

use gloo_timers::callback::Interval;
use proconverter::{Download, Scheduler, SectionBounds};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// `setInterval`/`setTimeout` scheduler. Dropping the interval handle
/// clears the browser timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Interval = Interval;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period.as_millis() as u32, tick)
    }

    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Download via a temporary `<a download>` element.
pub fn trigger_download(download: &Download) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&download.url);
    anchor.set_download(&download.filename);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Smoothly scroll an element into view.
pub fn smooth_scroll_into_view(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll to the element an in-page `#id` link points at.
/// Returns false when there is no such element.
pub fn smooth_scroll_to_anchor(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        Some(target) => {
            smooth_scroll_into_view(&target);
            true
        }
        None => false,
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Offsets of every `section[id]` on the page, in document order.
pub fn page_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
        })
        .collect()
}

/// Text of a server-rendered `.modal-error`, if the page carries one.
pub fn server_modal_error() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".modal-error").ok().flatten())
        .and_then(|el| el.text_content())
}
