//! Scroll-linked active section detection.

use tracing::trace;

use crate::config::PageConfig;
use crate::layout::SectionLayout;

/// Result of evaluating one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate<'a> {
    /// Section containing the probe position, if any
    pub active: Option<&'a str>,
    /// Whether the scroll-to-top button should be visible
    pub show_scroll_top: bool,
}

/// Maps a scroll offset to the section being read.
///
/// The probe position is `scroll_y + header_offset`: the fixed header covers
/// the top of the viewport, so the line just below it is what counts as "being
/// read". Work per call is linear in the number of tracked sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    header_offset: f64,
    scroll_top_threshold: f64,
}

impl ScrollTracker {
    pub fn new(header_offset: f64, scroll_top_threshold: f64) -> Self {
        Self {
            header_offset,
            scroll_top_threshold,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.header_offset, config.scroll_top_threshold)
    }

    /// First section, in the given order, whose range holds the probe position.
    ///
    /// Sections the layout does not know about are skipped.
    pub fn locate<'a, L>(&self, scroll_y: f64, sections: &[&'a str], layout: &L) -> Option<&'a str>
    where
        L: SectionLayout + ?Sized,
    {
        let position = scroll_y + self.header_offset;
        sections.iter().copied().find(|id| {
            layout
                .bounds(id)
                .is_some_and(|bounds| bounds.contains(position))
        })
    }

    /// Strictly greater than the threshold.
    pub fn shows_scroll_top(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_top_threshold
    }

    pub fn evaluate<'a, L>(&self, scroll_y: f64, sections: &[&'a str], layout: &L) -> ScrollUpdate<'a>
    where
        L: SectionLayout + ?Sized,
    {
        let update = ScrollUpdate {
            active: self.locate(scroll_y, sections, layout),
            show_scroll_top: self.shows_scroll_top(scroll_y),
        };
        trace!(scroll_y, active = ?update.active, show_scroll_top = update.show_scroll_top, "scroll evaluated");
        update
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutSnapshot, SectionRecord};

    const SECTIONS: [&str; 3] = ["inicio", "definicion", "sintomas"];

    fn layout() -> LayoutSnapshot {
        LayoutSnapshot::stacked([("inicio", 800.0), ("definicion", 800.0), ("sintomas", 800.0)])
    }

    #[test]
    fn locates_section_containing_probe() {
        let tracker = ScrollTracker::default();
        let layout = layout();
        assert_eq!(tracker.locate(750.0, &SECTIONS, &layout), Some("definicion"));
        assert_eq!(tracker.locate(50.0, &SECTIONS, &layout), Some("inicio"));
        assert_eq!(tracker.locate(1500.0, &SECTIONS, &layout), Some("sintomas"));
    }

    #[test]
    fn past_last_section_matches_nothing() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.locate(2500.0, &SECTIONS, &layout()), None);
    }

    #[test]
    fn range_end_belongs_to_next_section() {
        let tracker = ScrollTracker::default();
        // probe lands exactly on 800
        assert_eq!(tracker.locate(700.0, &SECTIONS, &layout()), Some("definicion"));
        assert_eq!(tracker.locate(699.0, &SECTIONS, &layout()), Some("inicio"));
    }

    #[test]
    fn above_first_section_matches_nothing() {
        let tracker = ScrollTracker::default();
        let layout = LayoutSnapshot {
            sections: vec![SectionRecord {
                id: "inicio".into(),
                top: 400.0,
                height: 800.0,
            }],
        };
        assert_eq!(tracker.locate(0.0, &["inicio"], &layout), None);
        assert_eq!(tracker.locate(299.0, &["inicio"], &layout), None);
        assert_eq!(tracker.locate(300.0, &["inicio"], &layout), Some("inicio"));
    }

    #[test]
    fn overlapping_ranges_prefer_document_order() {
        let tracker = ScrollTracker::new(0.0, 300.0);
        let layout = LayoutSnapshot {
            sections: vec![
                SectionRecord { id: "a".into(), top: 0.0, height: 500.0 },
                SectionRecord { id: "b".into(), top: 400.0, height: 500.0 },
            ],
        };
        assert_eq!(tracker.locate(450.0, &["a", "b"], &layout), Some("a"));
        assert_eq!(tracker.locate(450.0, &["b", "a"], &layout), Some("b"));
    }

    #[test]
    fn unrendered_sections_are_skipped() {
        let tracker = ScrollTracker::default();
        let sections = ["inicio", "evolucion", "definicion"];
        assert_eq!(tracker.locate(900.0, &sections, &layout()), Some("definicion"));
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        let tracker = ScrollTracker::default();
        assert!(!tracker.shows_scroll_top(0.0));
        assert!(!tracker.shows_scroll_top(300.0));
        assert!(tracker.shows_scroll_top(300.5));
        assert!(tracker.shows_scroll_top(2500.0));
    }

    #[test]
    fn evaluate_combines_both_answers() {
        let tracker = ScrollTracker::default();
        let update = tracker.evaluate(2500.0, &SECTIONS, &layout());
        assert_eq!(
            update,
            ScrollUpdate {
                active: None,
                show_scroll_top: true
            }
        );
    }
}
