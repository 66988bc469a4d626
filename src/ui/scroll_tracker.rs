//! Window scroll tracking for the nav bar
//!
//! One scroll listener per page feeds [`ScrollState`]; components read the
//! active section and the solid-background flag from [`ScrollTracker`].

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::sections::{ScrollState, SectionId, SectionList};

#[cfg(not(feature = "ssr"))]
use crate::core::sections::SectionAnchors;

/// Reactive view of the page scroll state
#[derive(Clone, Copy)]
pub struct ScrollTracker {
    state: RwSignal<ScrollState>,
}

impl ScrollTracker {
    pub fn active_section(&self) -> SectionId {
        self.state.with(|state| state.active_section())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state.with(|state| state.is_active(id))
    }

    /// Past the threshold where the nav bar turns solid
    pub fn is_scrolled(&self) -> bool {
        self.state.with(|state| state.is_scrolled())
    }

    pub fn scroll_y(&self) -> u32 {
        self.state.with(|state| state.scroll_y())
    }
}

/// Section offsets read from the live document
#[cfg(not(feature = "ssr"))]
struct DomAnchors {
    document: web_sys::Document,
}

#[cfg(not(feature = "ssr"))]
impl SectionAnchors for DomAnchors {
    fn top_offset(&self, id: SectionId) -> Option<f64> {
        use leptos::wasm_bindgen::JsCast;

        let element = self.document.get_element_by_id(id)?;
        let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }
}

/// Track the window scroll position for the lifetime of the calling component
pub fn use_scroll_tracker(sections: SectionList) -> ScrollTracker {
    let state = RwSignal::new(ScrollState::new(sections));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle = window_event_listener(scroll, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let offset = window.scroll_y().unwrap_or_default();
            let anchors = DomAnchors { document };
            state.update(|state| {
                state.on_scroll(offset, &anchors);
            });
        });

        on_cleanup(move || handle.remove());
    }
    ScrollTracker { state }
}

/// Smooth-scroll the section with the given id into view. Unknown ids are
/// ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            tracing::debug!(id, "scroll target not rendered");
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
