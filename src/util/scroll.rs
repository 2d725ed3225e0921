//! Anchor navigation helpers.
//!
//! The site is a single page; nav links scroll to section anchors instead
//! of routing. Both helpers no-op when the document is unavailable.

/// Scroll the section with the given element id into view.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        element.scroll_into_view();
    }
}

/// Scroll back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
