//! Which page section the navigation bar highlights, and where a click on a
//! navigation item scrolls to.
//!
//! Detection is geometric: the navbar re-measures every anchor on mount,
//! scroll and resize and feeds the rects to [`ActiveSectionTracker::observe`].
//! No intersection observer is involved.

use crate::signal::Rect;

pub const NAV_SCROLL_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Overview,
    Biography,
    Showcase,
    Capabilities,
    Collaboration,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Biography,
        Self::Showcase,
        Self::Capabilities,
        Self::Collaboration,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Biography => "biography",
            Self::Showcase => "showcase",
            Self::Capabilities => "capabilities",
            Self::Collaboration => "collaboration",
        }
    }

    pub fn from_anchor(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Biography => "Biography",
            Self::Showcase => "Showcase",
            Self::Capabilities => "Capabilities",
            Self::Collaboration => "Collaboration",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Overview => "◆",
            Self::Biography => "◈",
            Self::Showcase => "◇",
            Self::Capabilities => "◊",
            Self::Collaboration => "◉",
        }
    }
}

/// Top-weighted detection band inside the viewport. Margins are fractions of
/// the viewport height trimmed from the top and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionWindow {
    pub threshold: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl DetectionWindow {
    pub const NAVIGATION: Self = Self {
        threshold: 0.5,
        top_margin: 0.10,
        bottom_margin: 0.40,
    };

    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let top = viewport_height * self.top_margin;
        let bottom = viewport_height * (1.0 - self.bottom_margin);
        (top, bottom.max(top))
    }

    /// Overlap between the section and the band, relative to whichever of the
    /// two is shorter. Sections taller than the band reach 1.0 when they span
    /// it completely.
    pub fn coverage(&self, rect: Rect, viewport_height: f64) -> f64 {
        let (window_top, window_bottom) = self.bounds(viewport_height);
        let overlap = (rect.bottom().min(window_bottom) - rect.top.max(window_top)).max(0.0);
        let basis = rect.height.min(window_bottom - window_top);

        if basis <= 0.0 {
            return 0.0;
        }

        (overlap / basis).min(1.0)
    }

    pub fn detects(&self, rect: Rect, viewport_height: f64) -> bool {
        let coverage = self.coverage(rect, viewport_height);
        coverage > 0.0 && coverage >= self.threshold
    }
}

/// Lookup of section anchors in the current document. `None` means the anchor
/// element is not mounted.
pub trait AnchorLayout {
    fn anchor_rect(&self, id: SectionId) -> Option<Rect>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavOutcome {
    ScrollTo { top: f64 },
    AnchorMissing,
}

pub fn scroll_target(anchor: Rect, scroll_y: f64, offset: f64) -> f64 {
    (scroll_y + anchor.top - offset).max(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionId>,
    active: SectionId,
    window: DetectionWindow,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(SectionId::ALL)
    }
}

impl ActiveSectionTracker {
    pub fn new(sections: impl IntoIterator<Item = SectionId>) -> Self {
        let mut registered: Vec<SectionId> = Vec::new();
        for id in sections {
            if !registered.contains(&id) {
                registered.push(id);
            }
        }
        if registered.is_empty() {
            registered = SectionId::ALL.to_vec();
        }

        Self {
            active: registered[0],
            sections: registered,
            window: DetectionWindow::NAVIGATION,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn window(&self) -> DetectionWindow {
        self.window
    }

    /// Re-evaluates the detection band against the current layout. When
    /// several sections qualify the topmost one wins. Returns the new active
    /// section if it changed.
    pub fn observe(&mut self, layout: &impl AnchorLayout, viewport_height: f64) -> Option<SectionId> {
        let detected = self
            .sections
            .iter()
            .filter_map(|&id| layout.anchor_rect(id).map(|rect| (id, rect)))
            .filter(|(_, rect)| self.window.detects(*rect, viewport_height))
            .min_by(|(_, a), (_, b)| a.top.total_cmp(&b.top))
            .map(|(id, _)| id)?;

        if detected == self.active {
            return None;
        }

        tracing::debug!(section = detected.anchor(), "active section changed");
        self.active = detected;
        Some(detected)
    }

    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = id != self.active;
        self.active = id;
        changed
    }

    /// Click handling: the clicked item becomes active before any scrolling
    /// happens. A missing anchor leaves that optimistic selection in place.
    pub fn navigate(&mut self, id: SectionId, layout: &impl AnchorLayout, scroll_y: f64) -> NavOutcome {
        self.select(id);

        let Some(anchor) = layout.anchor_rect(id) else {
            tracing::debug!(section = id.anchor(), "navigation anchor missing");
            return NavOutcome::AnchorMissing;
        };

        NavOutcome::ScrollTo {
            top: scroll_target(anchor, scroll_y, NAV_SCROLL_OFFSET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StackedPage {
        sections: Vec<(SectionId, f64)>,
        scroll_y: f64,
    }

    impl StackedPage {
        fn uniform(ids: &[SectionId], height: f64) -> Self {
            Self {
                sections: ids.iter().map(|&id| (id, height)).collect(),
                scroll_y: 0.0,
            }
        }
    }

    impl AnchorLayout for StackedPage {
        fn anchor_rect(&self, id: SectionId) -> Option<Rect> {
            let mut document_top = 0.0;
            for &(candidate, height) in &self.sections {
                if candidate == id {
                    return Some(Rect::new(0.0, document_top - self.scroll_y, 1280.0, height));
                }
                document_top += height;
            }
            None
        }
    }

    #[test]
    fn active_section_defaults_to_first_registered() {
        let tracker = ActiveSectionTracker::default();
        assert_eq!(tracker.active(), SectionId::Overview);

        let tracker = ActiveSectionTracker::new([SectionId::Biography, SectionId::Showcase]);
        assert_eq!(tracker.active(), SectionId::Biography);

        let tracker = ActiveSectionTracker::new(Vec::new());
        assert_eq!(tracker.active(), SectionId::Overview);
    }

    #[test]
    fn mount_without_scrolling_keeps_overview() {
        let page = StackedPage::uniform(&SectionId::ALL, 1000.0);
        let mut tracker = ActiveSectionTracker::default();

        assert_eq!(tracker.observe(&page, 900.0), None);
        assert_eq!(tracker.active(), SectionId::Overview);
    }

    #[test]
    fn scrolling_third_section_into_view_activates_it() {
        let mut page = StackedPage::uniform(&SectionId::ALL, 1000.0);
        let mut tracker = ActiveSectionTracker::new(SectionId::ALL);

        page.scroll_y = 2000.0;
        assert_eq!(tracker.observe(&page, 900.0), Some(SectionId::Showcase));
        assert_eq!(tracker.active(), SectionId::Showcase);

        // Third section still fills the top of the band after a partial scroll.
        page.scroll_y = 2300.0;
        assert_eq!(tracker.observe(&page, 900.0), None);
        assert_eq!(tracker.active(), SectionId::Showcase);
    }

    #[test]
    fn section_below_band_is_not_detected() {
        let window = DetectionWindow::NAVIGATION;
        // Band for an 800px viewport is 80..480.
        let (top, bottom) = window.bounds(800.0);
        assert!((top - 80.0).abs() < 1e-9);
        assert!((bottom - 480.0).abs() < 1e-9);

        let below = Rect::new(0.0, 500.0, 1280.0, 600.0);
        assert_eq!(window.coverage(below, 800.0), 0.0);
        assert!(!window.detects(below, 800.0));

        let half_in = Rect::new(0.0, 280.0, 1280.0, 600.0);
        assert!((window.coverage(half_in, 800.0) - 0.5).abs() < 1e-9);
        assert!(window.detects(half_in, 800.0));
    }

    #[test]
    fn topmost_section_wins_when_several_qualify() {
        let ids = [SectionId::Overview, SectionId::Biography, SectionId::Showcase];
        let page = StackedPage::uniform(&ids, 150.0);
        let mut tracker = ActiveSectionTracker::new(ids);
        tracker.select(SectionId::Showcase);

        // Band 100..600: Overview covers 50/150, Biography and Showcase are fully inside.
        assert_eq!(tracker.observe(&page, 1000.0), Some(SectionId::Biography));
    }

    #[test]
    fn click_scrolls_below_navbar_offset() {
        let mut page = StackedPage::uniform(&SectionId::ALL, 1000.0);
        page.scroll_y = 500.0;
        let mut tracker = ActiveSectionTracker::default();

        let outcome = tracker.navigate(SectionId::Capabilities, &page, page.scroll_y);

        assert_eq!(tracker.active(), SectionId::Capabilities);
        assert_eq!(outcome, NavOutcome::ScrollTo { top: 3000.0 - NAV_SCROLL_OFFSET });
    }

    #[test]
    fn click_on_missing_anchor_keeps_optimistic_selection() {
        let page = StackedPage::uniform(
            &[SectionId::Overview, SectionId::Biography, SectionId::Showcase],
            1000.0,
        );
        let mut tracker = ActiveSectionTracker::default();

        let outcome = tracker.navigate(SectionId::Collaboration, &page, 0.0);

        assert_eq!(outcome, NavOutcome::AnchorMissing);
        assert_eq!(tracker.active(), SectionId::Collaboration);

        // The next scroll pass derives the highlight from layout again.
        assert_eq!(tracker.observe(&page, 900.0), Some(SectionId::Overview));
    }

    #[test]
    fn scroll_target_never_goes_negative() {
        let anchor = Rect::new(0.0, 10.0, 100.0, 100.0);
        assert_eq!(scroll_target(anchor, 0.0, NAV_SCROLL_OFFSET), 0.0);
    }

    #[test]
    fn anchors_round_trip_through_ids() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("contact"), None);
    }
}
