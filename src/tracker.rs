use crate::state::SectionId;

/// Distance added to the scroll offset to account for the fixed navigation bar.
pub const HEADER_OFFSET: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Source of rendered section geometry.
pub trait SectionLayout {
    /// `None` when the section is not mounted.
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionBounds>,
{
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self(section)
    }
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<SectionId>,
    offset: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), HEADER_OFFSET)
    }
}

impl ScrollTracker {
    pub fn new(sections: Vec<SectionId>, offset: f64) -> Self {
        Self { sections, offset }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// First section, in list order, whose range contains `scroll_y + offset`.
    pub fn section_at(&self, layout: &impl SectionLayout, scroll_y: f64) -> Option<SectionId> {
        let position = scroll_y + self.offset;
        self.sections.iter().copied().find(|&section| {
            layout
                .bounds(section)
                .is_some_and(|bounds| bounds.contains(position))
        })
    }

    /// Section that should be active after a scroll to `scroll_y`.
    /// Keeps `current` when no section matches.
    pub fn track(&self, layout: &impl SectionLayout, scroll_y: f64, current: SectionId) -> SectionId {
        self.section_at(layout, scroll_y).unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // hero 0..800, about 800..1400, skills 1400..2000, experience 2000..2600,
    // projects 2600..3400, contact 3400..4000
    fn page(section: SectionId) -> Option<SectionBounds> {
        let (top, height) = match section {
            SectionId::Hero => (0.0, 800.0),
            SectionId::About => (800.0, 600.0),
            SectionId::Skills => (1400.0, 600.0),
            SectionId::Experience => (2000.0, 600.0),
            SectionId::Projects => (2600.0, 800.0),
            SectionId::Contact => (3400.0, 600.0),
        };
        Some(SectionBounds::new(top, height))
    }

    #[test]
    fn test_selects_containing_section() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.section_at(&page, 0.0), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(&page, 599.0), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(&page, 600.0), Some(SectionId::About));
        assert_eq!(tracker.section_at(&page, 1900.0), Some(SectionId::Experience));
        assert_eq!(tracker.section_at(&page, 3300.0), Some(SectionId::Contact));
    }

    #[test]
    fn test_range_is_half_open() {
        let tracker = ScrollTracker::new(SectionId::ALL.to_vec(), 0.0);
        assert_eq!(tracker.section_at(&page, 799.9), Some(SectionId::Hero));
        assert_eq!(tracker.section_at(&page, 800.0), Some(SectionId::About));
        assert_eq!(tracker.section_at(&page, 4000.0), None);
    }

    #[test]
    fn test_no_match_keeps_current() {
        let tracker = ScrollTracker::default();
        assert_eq!(
            tracker.track(&page, 5000.0, SectionId::Projects),
            SectionId::Projects
        );
        let layout = |_: SectionId| -> Option<SectionBounds> { None };
        assert_eq!(tracker.track(&layout, 0.0, SectionId::Hero), SectionId::Hero);
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let tracker = ScrollTracker::default();
        let layout = |section: SectionId| match section {
            SectionId::About => None,
            other => page(other),
        };
        // would land in About; nothing else covers it
        assert_eq!(tracker.section_at(&layout, 800.0), None);
        assert_eq!(tracker.section_at(&layout, 1300.0), Some(SectionId::Skills));
    }

    #[test]
    fn test_overlap_prefers_list_order() {
        let tracker = ScrollTracker::default();
        let layout = |section: SectionId| match section {
            SectionId::Skills => Some(SectionBounds::new(0.0, 1000.0)),
            SectionId::Projects => Some(SectionBounds::new(0.0, 1000.0)),
            _ => None,
        };
        assert_eq!(tracker.section_at(&layout, 100.0), Some(SectionId::Skills));
    }

    #[test]
    fn test_before_first_section_keeps_default() {
        let tracker = ScrollTracker::default();
        let layout = |section: SectionId| match section {
            SectionId::Hero => Some(SectionBounds::new(500.0, 500.0)),
            _ => None,
        };
        assert_eq!(
            tracker.track(&layout, 0.0, SectionId::default()),
            SectionId::Hero
        );
        assert_eq!(tracker.section_at(&layout, 0.0), None);
    }
}
