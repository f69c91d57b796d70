//! Reactive handle around the page controller.
//!
//! The controller lives in one signal owned by the root component. Components
//! receive a [`PageHandle`] as a prop and read the memos below, which only
//! notify when the value they carry actually changes. A scroll event that
//! leaves the active section alone re-renders nothing.

use leptos::prelude::*;
use nomofobia_core::{
    MainSection, NavigationGroup, PageConfig, PageController, PageEvent, PageVariant, Theme,
    Viewport,
};

use crate::dom::DomViewport;

#[derive(Clone, Copy)]
pub struct PageHandle {
    controller: RwSignal<PageController>,
    pub variant: PageVariant,
    pub active_section: Memo<String>,
    pub menu_open: Memo<bool>,
    pub show_scroll_top: Memo<bool>,
    pub mode: Memo<Option<MainSection>>,
    pub theme: Memo<&'static Theme>,
    pub navigation: Memo<Vec<NavigationGroup>>,
}

impl PageHandle {
    pub fn new(config: PageConfig) -> Self {
        let variant = config.variant;
        let controller = RwSignal::new(PageController::new(config));

        Self {
            controller,
            variant,
            active_section: Memo::new(move |_| {
                controller.with(|c| c.state().active_section_id().to_string())
            }),
            menu_open: Memo::new(move |_| controller.with(|c| c.state().is_mobile_menu_open())),
            show_scroll_top: Memo::new(move |_| {
                controller.with(|c| c.state().show_scroll_top_button())
            }),
            mode: Memo::new(move |_| controller.with(|c| c.state().current_main_section())),
            theme: Memo::new(move |_| controller.with(|c| c.theme())),
            navigation: Memo::new(move |_| controller.with(|c| c.navigation_groups())),
        }
    }

    /// Runs an event through the controller against the live DOM.
    pub fn dispatch(&self, event: PageEvent) {
        self.controller
            .update(|controller| controller.dispatch(event, &mut DomViewport));
    }

    pub fn navigate(&self, section_id: &str) {
        self.dispatch(PageEvent::NavigateTo(section_id.to_string()));
    }

    /// Window scroll listener body.
    pub fn on_window_scroll(&self) {
        let offset = DomViewport.scroll_y();
        self.dispatch(PageEvent::Scrolled { offset });
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.with(|active| active == section_id)
    }

    pub fn is_split(&self) -> bool {
        self.variant == PageVariant::Split
    }
}
