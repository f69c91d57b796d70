use leptos::prelude::*;
use nomofobia_core::HOME_SECTION;

use crate::icons::Icon;
use crate::page::PageHandle;

#[component]
pub fn Footer(page: PageHandle) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                {move || {
                    let theme = page.theme.get();
                    view! {
                        <div class="footer-brand">
                            <span class=format!("footer-logo accent-{}", theme.accent)>
                                <Icon kind=theme.icon size="28" />
                            </span>
                            <h3 class="footer-title">{theme.footer_title}</h3>
                        </div>
                        <p class="footer-tagline">{theme.tagline}</p>
                    }
                }}
                <button class="footer-link" on:click=move |_| page.navigate(HOME_SECTION)>
                    "Volver al inicio"
                </button>
            </div>
        </footer>
    }
}
