//! Section tracking for the single-page layout
//!
//! The page is split into named sections (`home`, `about`, ...). This module
//! decides which section is "active" for nav highlighting given the current
//! scroll offset, and keeps the raw offset for the nav bar background.
//!
//! The DOM is abstracted behind [`SectionAnchors`] so the rules can be tested
//! without a browser.

use std::collections::HashMap;

use super::error::{SiteError, SiteResult};

/// Pixels subtracted from a section's top before comparing with the scroll
/// offset, so the highlight switches just before the boundary hits the top.
pub const ACTIVATION_MARGIN: f64 = 100.0;

/// Scroll offset past which the nav bar turns solid.
pub const SCROLLED_THRESHOLD: u32 = 50;

/// Identifier of a page section. Matches the DOM `id` of its element.
pub type SectionId = &'static str;

/// Source of section top offsets (pixels from the page top).
///
/// Returning `None` means the anchor is not rendered yet.
pub trait SectionAnchors {
    fn top_offset(&self, id: SectionId) -> Option<f64>;
}

impl SectionAnchors for HashMap<SectionId, f64> {
    fn top_offset(&self, id: SectionId) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Ordered, fixed list of tracked sections.
///
/// The order is both the navigation order and the activation precedence, so
/// it must match the visual top-to-bottom order of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    ids: Vec<SectionId>,
}

impl SectionList {
    /// Build a section list, rejecting empty or duplicated ids
    pub fn new(ids: &[SectionId]) -> SiteResult<Self> {
        if ids.is_empty() {
            return Err(SiteError::EmptySectionList);
        }
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(SiteError::DuplicateSection(id.to_string()));
            }
        }
        Ok(Self { ids: ids.to_vec() })
    }

    /// First configured section, the default active one
    pub fn first(&self) -> SectionId {
        self.ids[0]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| *s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Process-wide scroll state: raw offset and the active section.
///
/// Owns its section list, so the active section is always one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    sections: SectionList,
    scroll_y: u32,
    active_section: SectionId,
}

impl ScrollState {
    /// Initial state before any scroll event
    pub fn new(sections: SectionList) -> Self {
        Self {
            scroll_y: 0,
            active_section: sections.first(),
            sections,
        }
    }

    /// Recompute the state for a scroll event.
    ///
    /// Every section is checked in configured order and each match overwrites
    /// the previous one, so the last section whose `top - ACTIVATION_MARGIN`
    /// is at or above the offset wins. When nothing matches the active
    /// section is left untouched. Returns `true` if the active section changed.
    pub fn on_scroll(&mut self, offset: f64, anchors: &impl SectionAnchors) -> bool {
        self.scroll_y = clamp_offset(offset);
        let scroll_y = f64::from(self.scroll_y);
        let previous = self.active_section;

        for id in self.sections.iter() {
            let Some(top) = anchors.top_offset(id) else {
                continue;
            };
            if scroll_y >= top - ACTIVATION_MARGIN {
                self.active_section = id;
            }
        }

        if previous != self.active_section {
            tracing::debug!(
                from = previous,
                to = self.active_section,
                scroll_y = self.scroll_y,
                "active section changed"
            );
            true
        } else {
            false
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }

    /// Whether the page has scrolled far enough for a solid nav bar
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }
}

/// Platform offsets can be fractional or briefly negative (overscroll).
fn clamp_offset(offset: f64) -> u32 {
    if offset.is_nan() || offset <= 0.0 {
        0
    } else if offset >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        offset.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_sections() -> SectionList {
        SectionList::new(&["home", "about", "services", "contact"]).unwrap()
    }

    fn page_anchors() -> HashMap<SectionId, f64> {
        HashMap::from([
            ("home", 0.0),
            ("about", 800.0),
            ("services", 1600.0),
            ("contact", 2400.0),
        ])
    }

    #[test]
    fn test_section_list_rejects_empty() {
        assert_eq!(SectionList::new(&[]), Err(SiteError::EmptySectionList));
    }

    #[test]
    fn test_section_list_rejects_duplicates() {
        assert_eq!(
            SectionList::new(&["home", "about", "home"]),
            Err(SiteError::DuplicateSection("home".to_string()))
        );
    }

    #[test]
    fn test_section_list_preserves_order() {
        let sections = page_sections();
        assert_eq!(
            sections.iter().collect::<Vec<_>>(),
            vec!["home", "about", "services", "contact"]
        );
        assert_eq!(sections.first(), "home");
        assert_eq!(sections.len(), 4);
        assert!(sections.contains("services"));
        assert!(!sections.contains("sectors"));
    }

    #[test]
    fn test_initial_state() {
        let state = ScrollState::new(page_sections());
        assert_eq!(state.scroll_y(), 0);
        assert_eq!(state.active_section(), "home");
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_untracked_anchor_never_becomes_active() {
        // "sectors" is rendered but not in the list the state was built from
        let mut anchors = page_anchors();
        anchors.insert("sectors", 1200.0);
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(1250.0, &anchors);
        assert_eq!(state.active_section(), "about");
        assert!(state.sections().contains(state.active_section()));

        state.on_scroll(5000.0, &anchors);
        assert_eq!(state.active_section(), "contact");
    }

    #[test]
    fn test_early_activation_margin() {
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(750.0, &page_anchors());
        assert_eq!(state.active_section(), "about");

        state.on_scroll(699.0, &page_anchors());
        assert_eq!(state.active_section(), "home");

        state.on_scroll(700.0, &page_anchors());
        assert_eq!(state.active_section(), "about");
    }

    #[test]
    fn test_last_matching_section_wins() {
        let mut state = ScrollState::new(page_sections());

        // Every section qualifies; the bottom-most must win
        state.on_scroll(5000.0, &page_anchors());
        assert_eq!(state.active_section(), "contact");

        state.on_scroll(1550.0, &page_anchors());
        assert_eq!(state.active_section(), "services");
    }

    #[test]
    fn test_scan_does_not_stop_at_first_non_match() {
        // Out-of-order anchors: the scan must still reach later sections
        let anchors = HashMap::from([
            ("home", 0.0),
            ("about", 3000.0),
            ("services", 500.0),
            ("contact", 9000.0),
        ]);
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(600.0, &anchors);
        assert_eq!(state.active_section(), "services");
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let mut anchors = page_anchors();
        anchors.remove("services");
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(1700.0, &anchors);
        assert_eq!(state.active_section(), "about");
    }

    #[test]
    fn test_no_match_retains_previous_section() {
        let mut state = ScrollState::new(page_sections());
        state.on_scroll(900.0, &page_anchors());
        assert_eq!(state.active_section(), "about");

        // Nothing rendered at all: keep what we had
        let empty: HashMap<SectionId, f64> = HashMap::new();
        let changed = state.on_scroll(10.0, &empty);
        assert!(!changed);
        assert_eq!(state.active_section(), "about");
        assert_eq!(state.scroll_y(), 10);
    }

    #[test]
    fn test_on_scroll_is_idempotent() {
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(1650.0, &page_anchors());
        let first = state.clone();
        let changed = state.on_scroll(1650.0, &page_anchors());

        assert!(!changed);
        assert_eq!(state, first);
    }

    #[test]
    fn test_on_scroll_reports_changes() {
        let mut state = ScrollState::new(page_sections());

        assert!(!state.on_scroll(100.0, &page_anchors()));
        assert!(state.on_scroll(800.0, &page_anchors()));
        assert!(!state.on_scroll(850.0, &page_anchors()));
    }

    #[test]
    fn test_scroll_offset_clamping() {
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(-35.0, &page_anchors());
        assert_eq!(state.scroll_y(), 0);

        state.on_scroll(120.7, &page_anchors());
        assert_eq!(state.scroll_y(), 120);

        state.on_scroll(f64::NAN, &page_anchors());
        assert_eq!(state.scroll_y(), 0);
    }

    #[test]
    fn test_is_scrolled_threshold() {
        let mut state = ScrollState::new(page_sections());

        state.on_scroll(50.0, &page_anchors());
        assert!(!state.is_scrolled());

        state.on_scroll(51.0, &page_anchors());
        assert!(state.is_scrolled());
        assert!(state.is_active("home"));
    }
}
