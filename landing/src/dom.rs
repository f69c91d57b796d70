//! Browser implementations of the controller's layout and viewport seams.

use nomofobia_core::{ScrollBehavior, SectionBounds, SectionLayout, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// The real browser window.
///
/// Holds nothing: every call looks the window and document up again, so a
/// missing window (tests, detached documents) just means nothing happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

fn web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    }
}

fn anchor(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl SectionLayout for DomViewport {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        let element = anchor(id)?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

impl Viewport for DomViewport {
    fn scroll_to_anchor(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(element) = anchor(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(web_behavior(behavior));
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_behavior(behavior));
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
}

/// Text of an inline element, e.g. `<script type="application/json">`.
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}
