//! Small building blocks shared by the content sections.

use leptos::prelude::*;
use nomofobia_core::MainSection;

use crate::reveal::Reveal;

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <Reveal class="section-heading">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </Reveal>
    }
}

/// Bullet list with accent-coloured markers.
#[component]
pub fn BulletList(mode: MainSection, items: &'static [&'static str]) -> impl IntoView {
    let accent = mode.theme().accent;
    view! {
        <ul class="bullet-list">
            {items
                .iter()
                .map(|&item| {
                    view! {
                        <li>
                            <span class=format!("bullet accent-bg-{accent}")></span>
                            {item}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Responsive 16:9 YouTube embed.
#[component]
pub fn VideoEmbed(video_id: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <Reveal class="container video">
            <div class="video-frame">
                <iframe
                    src=format!("https://www.youtube.com/embed/{video_id}")
                    title={title}
                    {..leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    referrerpolicy="strict-origin-when-cross-origin"
                    allowfullscreen=true
                ></iframe>
            </div>
        </Reveal>
    }
}
