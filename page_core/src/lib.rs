//! # nomofobia-core
//!
//! Page controller for the Nomofobia informational site.
//!
//! The site is static content plus one piece of behaviour: a navigation bar
//! that follows the reader. This crate holds that behaviour, free of any
//! browser dependency, so it can be tested natively and driven by whatever
//! renders the page (the Leptos landing crate, or `page-sim` on the terminal).
//!
//! ## Architecture
//!
//! - [`controller`] - [`PageController`], the single owner of [`PageState`]
//! - [`tracker`] - scroll offset to active section
//! - [`layout`] - the [`SectionLayout`] / [`Viewport`] seam plus in-memory impls
//! - [`nav`] - navigation catalogs per mode
//! - [`mode`] - [`MainSection`] and its [`Theme`]
//! - [`config`] - [`PageConfig`]
//!
//! ## Example
//!
//! ```rust
//! use nomofobia_core::{LayoutSnapshot, PageController, PageEvent, SimulatedViewport};
//!
//! let mut viewport = SimulatedViewport::new(LayoutSnapshot::stacked([
//!     ("inicio", 800.0),
//!     ("definicion", 800.0),
//!     ("sintomas", 800.0),
//! ]));
//! let mut page = PageController::default();
//!
//! page.dispatch(PageEvent::Scrolled { offset: 750.0 }, &mut viewport);
//! assert_eq!(page.state().active_section_id(), "definicion");
//! assert!(page.state().show_scroll_top_button());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod mode;
pub mod nav;
pub mod tracker;

pub use config::{PageConfig, PageVariant};
pub use controller::{NavigationOutcome, PageController, PageEvent, PageState};
pub use error::{ConfigError, LayoutError, ParseModeError};
pub use layout::{
    LayoutSnapshot, ScrollBehavior, SectionBounds, SectionLayout, SectionRecord,
    SimulatedViewport, Viewport,
};
pub use mode::{MainSection, Theme};
pub use nav::{HOME_SECTION, IconKind, NavigationGroup, NavigationItem};
pub use tracker::{ScrollTracker, ScrollUpdate};
