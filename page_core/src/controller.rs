//! The page controller.
//!
//! Owns the only mutable state of the page. Every mutation goes through one of
//! the named handlers below (or [`PageController::dispatch`], which routes a
//! [`PageEvent`] to them), and each [`PageState`] field has exactly one writer:
//!
//! ```text
//! active_section_id       <- on_scroll
//! show_scroll_top_button  <- on_scroll
//! is_mobile_menu_open     <- toggle_mobile_menu / navigate_to (close)
//! current_main_section    <- switch_main_section
//! ```

use serde::Serialize;
use tracing::debug;

use crate::config::{PageConfig, PageVariant};
use crate::layout::{SectionLayout, Viewport};
use crate::mode::{MainSection, Theme};
use crate::nav::{self, NavigationGroup, NavigationItem};
use crate::tracker::ScrollTracker;

/// Read-only view of the page state handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    active_section_id: String,
    is_mobile_menu_open: bool,
    show_scroll_top_button: bool,
    current_main_section: Option<MainSection>,
}

impl PageState {
    /// Section currently considered in view.
    pub fn active_section_id(&self) -> &str {
        &self.active_section_id
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }

    pub fn show_scroll_top_button(&self) -> bool {
        self.show_scroll_top_button
    }

    /// Active mode. Always `Some` on the split page, `None` on the merged page.
    pub fn current_main_section(&self) -> Option<MainSection> {
        self.current_main_section
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section_id == section_id
    }
}

/// Everything the environment can ask the controller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The viewport scrolled to this vertical offset
    Scrolled { offset: f64 },
    /// A navigation control for this section was clicked
    NavigateTo(String),
    /// The mobile menu button was clicked
    ToggleMobileMenu,
    /// A mode switch button was clicked
    SwitchMainSection(MainSection),
    /// The scroll-to-top button was clicked
    ScrollToTop,
}

/// What a section navigation request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The viewport is scrolling to the anchor
    Scrolling,
    /// The anchor is not rendered; nothing moved
    MissingAnchor,
}

/// Single owner of [`PageState`].
#[derive(Debug, Clone)]
pub struct PageController {
    config: PageConfig,
    tracker: ScrollTracker,
    state: PageState,
    sections: Vec<&'static str>,
}

impl PageController {
    pub fn new(config: PageConfig) -> Self {
        let current_main_section = match config.variant {
            PageVariant::Split => Some(config.initial_mode),
            PageVariant::Merged => None,
        };
        let state = PageState {
            active_section_id: config.initial_section.clone(),
            is_mobile_menu_open: false,
            show_scroll_top_button: false,
            current_main_section,
        };
        let mut controller = Self {
            tracker: ScrollTracker::from_config(&config),
            config,
            state,
            sections: Vec::new(),
        };
        controller.sections = controller.navigation().iter().map(|item| item.id).collect();
        controller
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn variant(&self) -> PageVariant {
        self.config.variant
    }

    /// Navigation of the current mode, or of the whole merged page.
    pub fn navigation(&self) -> Vec<NavigationItem> {
        match self.state.current_main_section {
            Some(mode) => nav::nav_items(mode).to_vec(),
            None => nav::merged_items(),
        }
    }

    /// Navigation split by mode. The split page has a single group.
    pub fn navigation_groups(&self) -> Vec<NavigationGroup> {
        match self.state.current_main_section {
            Some(mode) => vec![NavigationGroup {
                mode,
                items: nav::nav_items(mode).to_vec(),
            }],
            None => nav::merged_groups(),
        }
    }

    /// Palette of the active mode. The merged page uses the first mode's palette.
    pub fn theme(&self) -> &'static Theme {
        self.state.current_main_section.unwrap_or_default().theme()
    }

    /// Section anchors the scroll tracker walks, in document order.
    pub fn tracked_sections(&self) -> &[&'static str] {
        &self.sections
    }

    /// Scroll handler.
    ///
    /// Returns `true` when the active section changed. When no tracked section
    /// holds the probe position the previous active section is kept.
    pub fn on_scroll<L>(&mut self, offset: f64, layout: &L) -> bool
    where
        L: SectionLayout + ?Sized,
    {
        let update = self.tracker.evaluate(offset, &self.sections, layout);
        self.state.show_scroll_top_button = update.show_scroll_top;

        match update.active {
            Some(id) if id != self.state.active_section_id => {
                debug!(from = %self.state.active_section_id, to = id, offset, "active section changed");
                self.state.active_section_id = id.to_string();
                true
            }
            _ => false,
        }
    }

    /// Section navigator.
    ///
    /// Closes the mobile menu whatever happens. The active section is left to
    /// the scroll handler, which catches up as the viewport moves.
    pub fn navigate_to<V>(&mut self, section_id: &str, viewport: &mut V) -> NavigationOutcome
    where
        V: Viewport + ?Sized,
    {
        let outcome = if viewport.scroll_to_anchor(section_id, self.config.scroll_behavior()) {
            debug!(section = section_id, "navigating to section");
            NavigationOutcome::Scrolling
        } else {
            debug!(section = section_id, "section not rendered, navigation skipped");
            NavigationOutcome::MissingAnchor
        };
        self.close_mobile_menu();
        outcome
    }

    /// Flips the mobile menu and returns the new value.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.state.is_mobile_menu_open = !self.state.is_mobile_menu_open;
        debug!(open = self.state.is_mobile_menu_open, "mobile menu toggled");
        self.state.is_mobile_menu_open
    }

    /// No-op when already closed.
    pub fn close_mobile_menu(&mut self) {
        if self.state.is_mobile_menu_open {
            self.state.is_mobile_menu_open = false;
            debug!("mobile menu closed");
        }
    }

    /// Main-section switcher.
    ///
    /// Replaces the navigation set and always scrolls back to the top, even
    /// when `mode` is already active. Returns `false` on the merged page, where
    /// every mode is already on screen and nothing changes.
    pub fn switch_main_section<V>(&mut self, mode: MainSection, viewport: &mut V) -> bool
    where
        V: Viewport + ?Sized,
    {
        let Some(previous) = self.state.current_main_section else {
            debug!(%mode, "merged page has no main sections to switch");
            return false;
        };

        self.state.current_main_section = Some(mode);
        self.sections = nav::nav_items(mode).iter().map(|item| item.id).collect();
        debug!(from = %previous, to = %mode, "main section switched");

        viewport.scroll_to_top(self.config.scroll_behavior());
        true
    }

    /// Scroll-to-top button.
    pub fn scroll_to_top<V>(&mut self, viewport: &mut V)
    where
        V: Viewport + ?Sized,
    {
        viewport.scroll_to_top(self.config.scroll_behavior());
    }

    /// Routes an event to its handler.
    pub fn dispatch<V>(&mut self, event: PageEvent, viewport: &mut V)
    where
        V: Viewport + ?Sized,
    {
        match event {
            PageEvent::Scrolled { offset } => {
                self.on_scroll(offset, &*viewport);
            }
            PageEvent::NavigateTo(section_id) => {
                self.navigate_to(&section_id, viewport);
            }
            PageEvent::ToggleMobileMenu => {
                self.toggle_mobile_menu();
            }
            PageEvent::SwitchMainSection(mode) => {
                self.switch_main_section(mode, viewport);
            }
            PageEvent::ScrollToTop => self.scroll_to_top(viewport),
        }
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}
