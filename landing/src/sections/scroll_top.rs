use leptos::prelude::*;
use nomofobia_core::{IconKind, PageEvent};

use crate::icons::Icon;
use crate::page::PageHandle;

/// Floating button, rendered only while the page is scrolled past the threshold.
#[component]
pub fn ScrollTopButton(page: PageHandle) -> impl IntoView {
    view! {
        <Show when=move || page.show_scroll_top.get()>
            <button
                class=move || format!("scroll-top gradient-{}", page.theme.get().gradient)
                aria-label="Volver arriba"
                on:click=move |_| page.dispatch(PageEvent::ScrollToTop)
            >
                <Icon kind=IconKind::ArrowUp />
            </button>
        </Show>
    }
}
