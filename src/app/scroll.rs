use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::nav::Scroller;

/// Scrolls the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScroller;

impl Scroller for BrowserScroller {
    type Target = Element;

    fn find(&self, id: &str) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, target: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
