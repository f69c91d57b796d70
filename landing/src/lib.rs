//! Nomofobia site, Leptos 0.8 CSR edition.
//!
//! All page behaviour lives in `nomofobia-core`; this crate renders it and
//! wires browser events to [`nomofobia_core::PageController`] through
//! [`page::PageHandle`].

pub mod console_log;
pub mod dom;
mod icons;
pub mod page;
pub mod reveal;
mod sections;

use leptos::ev;
use leptos::prelude::*;
use nomofobia_core::{ConfigError, MainSection, PageConfig};
use tracing::{Level, debug, info, warn};

use page::PageHandle;
use sections::*;

/// Id of the inline `<script type="application/json">` holding the page config.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Reads the inline page config. A missing element means defaults.
pub fn load_config() -> Result<PageConfig, ConfigError> {
    match dom::element_text(CONFIG_ELEMENT_ID) {
        Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw),
        _ => Ok(PageConfig::default()),
    }
}

/// Entry point: logging, panic hook, config, then mount.
pub fn run() {
    console_error_panic_hook::set_once();

    let loaded = load_config();
    let level = loaded
        .as_ref()
        .map(PageConfig::max_level)
        .unwrap_or(Level::INFO);
    console_log::init(level);

    let config = loaded.unwrap_or_else(|err| {
        warn!(error = %err, "invalid page config, using defaults");
        PageConfig::default()
    });
    info!(variant = ?config.variant, mode = %config.initial_mode, "mounting page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let page = PageHandle::new(config);

    let _scroll = window_event_listener(ev::scroll, move |_| page.on_window_scroll());

    // Sync with the position the browser restored on reload
    Effect::new(move || {
        page.on_window_scroll();
        debug!(active = %page.active_section.get_untracked(), "initial scroll state");
    });

    view! {
        <div class=move || format!("page theme-{}", page.theme.get().accent)>
            <Header page=page />
            <main>
                {move || match page.mode.get() {
                    Some(MainSection::Nomofobia) => {
                        view! { <NomofobiaContent page=page home_anchor=true /> }.into_any()
                    }
                    Some(MainSection::Almacenamiento) => {
                        view! { <AlmacenamientoContent page=page home_anchor=true /> }.into_any()
                    }
                    Some(MainSection::Multimedia) => {
                        view! { <MultimediaContent page=page home_anchor=true /> }.into_any()
                    }
                    None => {
                        view! {
                            <NomofobiaContent page=page home_anchor=true />
                            <AlmacenamientoContent page=page home_anchor=false />
                            <MultimediaContent page=page home_anchor=false />
                        }
                            .into_any()
                    }
                }}
            </main>
            <Footer page=page />
            <ScrollTopButton page=page />
        </div>
    }
}
