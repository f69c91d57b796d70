use leptos::prelude::*;
use nomofobia_core::{HOME_SECTION, MainSection, nav};

use crate::page::PageHandle;

/// Fixed copy of a mode's hero block.
pub struct HeroCopy {
    pub mode: MainSection,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub subtitle: &'static str,
    pub call_to_action: &'static str,
}

/// Hero block of a mode.
///
/// Only the hero that owns the shared home anchor gets `id="inicio"`; on the
/// merged page the later heroes render without an anchor.
#[component]
pub fn Hero(page: PageHandle, copy: &'static HeroCopy, home_anchor: bool) -> impl IntoView {
    let theme = copy.mode.theme();
    let target = nav::hero_target(copy.mode);

    view! {
        <section
            id={home_anchor.then_some(HOME_SECTION)}
            class=format!("hero theme-{}", copy.mode)
        >
            <div class="container hero-inner">
                <div class="hero-image">
                    <img src=copy.image alt=copy.image_alt />
                </div>
                <h1 class="hero-title">
                    <span class=format!("gradient-text gradient-{}", theme.gradient)>
                        {theme.title}
                    </span>
                </h1>
                <p class="hero-description">{copy.subtitle}</p>
                <button
                    class=format!("btn btn-primary gradient-{}", theme.gradient)
                    on:click=move |_| page.navigate(target)
                >
                    {copy.call_to_action}
                </button>
            </div>
        </section>
    }
}
