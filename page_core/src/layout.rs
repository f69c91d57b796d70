//! Geometry of the rendered page and the viewport seam.
//!
//! The controller never touches the DOM. It asks a [`SectionLayout`] where
//! sections are and tells a [`Viewport`] where to scroll. The browser glue
//! implements both against `web_sys`; [`LayoutSnapshot`] and
//! [`SimulatedViewport`] implement them in memory for tests and `page-sim`.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Vertical extent of a rendered section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Answers where a section anchor currently sits on the page.
pub trait SectionLayout {
    /// Bounds of the anchor, or `None` when it is not rendered right now.
    fn bounds(&self, id: &str) -> Option<SectionBounds>;

    fn has_anchor(&self, id: &str) -> bool {
        self.bounds(id).is_some()
    }
}

/// How a programmatic scroll should move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The scrollable window the page lives in.
pub trait Viewport: SectionLayout {
    /// Align the anchor with the top of the viewport.
    ///
    /// Returns `false` without scrolling when the anchor is not rendered.
    fn scroll_to_anchor(&mut self, id: &str, behavior: ScrollBehavior) -> bool;

    /// Scroll to absolute offset 0.
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
}

/// A recorded section position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// In-memory layout, e.g. captured from a rendered page.
///
/// JSON shape: `{"sections": [{"id": "inicio", "top": 0, "height": 800}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
}

impl LayoutSnapshot {
    /// Sections placed back to back starting at offset 0.
    pub fn stacked<'a>(sections: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut top = 0.0;
        let sections = sections
            .into_iter()
            .map(|(id, height)| {
                let record = SectionRecord {
                    id: id.to_string(),
                    top,
                    height,
                };
                top += height;
                record
            })
            .collect();
        Self { sections }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let snapshot: LayoutSnapshot = serde_json::from_str(json)?;
        if let Some(bad) = snapshot
            .sections
            .iter()
            .find(|s| !s.top.is_finite() || !s.height.is_finite() || s.height < 0.0)
        {
            return Err(LayoutError::Section {
                id: bad.id.clone(),
                reason: "non-finite or negative geometry",
            });
        }
        Ok(snapshot)
    }

    /// Total document height covered by the recorded sections.
    pub fn document_height(&self) -> f64 {
        self.sections
            .iter()
            .map(|s| s.top + s.height)
            .fold(0.0, f64::max)
    }
}

impl SectionLayout for LayoutSnapshot {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| SectionBounds::new(s.top, s.height))
    }
}

/// Viewport over a [`LayoutSnapshot`]. Scrolls land instantly.
#[derive(Debug, Clone, Default)]
pub struct SimulatedViewport {
    layout: LayoutSnapshot,
    scroll_y: f64,
}

impl SimulatedViewport {
    pub fn new(layout: LayoutSnapshot) -> Self {
        Self {
            layout,
            scroll_y: 0.0,
        }
    }

    /// Simulates the user scrolling.
    pub fn set_scroll_y(&mut self, offset: f64) {
        self.scroll_y = offset.max(0.0);
    }

    /// Replaces the rendered sections, e.g. after a mode switch.
    pub fn set_layout(&mut self, layout: LayoutSnapshot) {
        self.layout = layout;
    }

    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }
}

impl SectionLayout for SimulatedViewport {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.layout.bounds(id)
    }
}

impl Viewport for SimulatedViewport {
    fn scroll_to_anchor(&mut self, id: &str, _behavior: ScrollBehavior) -> bool {
        match self.layout.bounds(id) {
            Some(bounds) => {
                self.scroll_y = bounds.top;
                true
            }
            None => false,
        }
    }

    fn scroll_to_top(&mut self, _behavior: ScrollBehavior) {
        self.scroll_y = 0.0;
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}
