use crate::tracker::NavOutcome;

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const SCROLLED_OFFSET: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// Navbar-owned chrome state: responsive class, overlay menu, and the
/// "page has been scrolled" compaction flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavChrome {
    class: ViewportClass,
    menu_open: bool,
    scrolled: bool,
}

impl NavChrome {
    pub fn new(width: f64) -> Self {
        Self {
            class: ViewportClass::from_width(width),
            menu_open: false,
            scrolled: false,
        }
    }

    pub fn on_resize(&mut self, width: f64) {
        let next = ViewportClass::from_width(width);
        if next != self.class || !next.is_mobile() {
            self.menu_open = false;
        }
        if next != self.class {
            tracing::debug!(class = next.as_str(), width, "viewport reclassified");
        }
        self.class = next;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLLED_OFFSET;
    }

    pub fn toggle_menu(&mut self) {
        if self.class.is_mobile() {
            self.menu_open = !self.menu_open;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navigation click dismisses the overlay whether or not its anchor
    /// was found.
    pub fn on_navigate(&mut self, outcome: NavOutcome) {
        if self.menu_open {
            tracing::debug!(?outcome, "overlay closed by navigation");
        }
        self.close_menu();
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_mobile(&self) -> bool {
        self.class.is_mobile()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn pointer_effects_enabled(&self) -> bool {
        !self.class.is_mobile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        signal::Rect,
        tracker::{ActiveSectionTracker, AnchorLayout, SectionId},
    };

    struct OnlyBiography;

    impl AnchorLayout for OnlyBiography {
        fn anchor_rect(&self, id: SectionId) -> Option<Rect> {
            (id == SectionId::Biography).then(|| Rect::new(0.0, 900.0, 390.0, 700.0))
        }
    }

    #[test]
    fn breakpoint_has_no_hysteresis() {
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Mobile);
    }

    #[test]
    fn shrinking_to_mobile_closes_overlay_and_growing_back_keeps_it_closed() {
        let mut chrome = NavChrome::new(1024.0);
        assert!(!chrome.is_mobile());

        chrome.on_resize(500.0);
        assert!(chrome.is_mobile());
        assert!(!chrome.menu_open());

        chrome.toggle_menu();
        assert!(chrome.menu_open());

        chrome.on_resize(1024.0);
        assert!(!chrome.is_mobile());
        assert!(!chrome.menu_open());

        chrome.on_resize(500.0);
        assert!(chrome.is_mobile());
        assert!(!chrome.menu_open(), "resizing must never reopen the overlay");
    }

    #[test]
    fn resizing_within_mobile_keeps_overlay_open() {
        let mut chrome = NavChrome::new(400.0);
        chrome.toggle_menu();
        chrome.on_resize(600.0);
        assert!(chrome.menu_open());
    }

    #[test]
    fn desktop_has_no_overlay_state() {
        let mut chrome = NavChrome::new(1280.0);
        chrome.toggle_menu();
        assert!(!chrome.menu_open());
        assert!(chrome.pointer_effects_enabled());
    }

    #[test]
    fn scrolled_flag_tracks_offset() {
        let mut chrome = NavChrome::new(1280.0);
        chrome.on_scroll(20.0);
        assert!(!chrome.scrolled());
        chrome.on_scroll(21.0);
        assert!(chrome.scrolled());
        chrome.on_scroll(0.0);
        assert!(!chrome.scrolled());
    }

    #[test]
    fn navigation_click_closes_overlay_for_found_and_missing_anchors() {
        let mut tracker = ActiveSectionTracker::default();

        let mut chrome = NavChrome::new(390.0);
        chrome.toggle_menu();
        assert!(chrome.menu_open());
        let outcome = tracker.navigate(SectionId::Biography, &OnlyBiography, 0.0);
        assert!(matches!(outcome, NavOutcome::ScrollTo { .. }));
        chrome.on_navigate(outcome);
        assert!(!chrome.menu_open());

        chrome.toggle_menu();
        assert!(chrome.menu_open());
        let outcome = tracker.navigate(SectionId::Collaboration, &OnlyBiography, 0.0);
        assert_eq!(outcome, NavOutcome::AnchorMissing);
        chrome.on_navigate(outcome);
        assert!(!chrome.menu_open());
        assert_eq!(tracker.active(), SectionId::Collaboration);
    }
}
