use leptos::prelude::*;
use nomofobia_core::{IconKind, MainSection, NavigationItem, PageEvent};

use crate::icons::Icon;
use crate::page::PageHandle;

/// Fixed header: brand, mode switcher, section links and the mobile menu.
#[component]
pub fn Header(page: PageHandle) -> impl IntoView {
    let accent = move || page.theme.get().accent;

    view! {
        <header class="header">
            <div class="container header-inner">
                <div class="brand">
                    {move || {
                        let theme = page.theme.get();
                        view! {
                            <span class=format!("brand-icon accent-{}", theme.accent)>
                                <Icon kind=theme.icon size="32" />
                            </span>
                            <span class="brand-title">{theme.title}</span>
                        }
                    }}
                </div>

                <Show when=move || page.is_split()>
                    <ModeSwitcher page=page class="mode-switcher desktop-only" />
                </Show>

                <nav class="nav-links desktop-only" aria-label="Secciones">
                    <NavLinks page=page />
                </nav>

                <button
                    class=move || format!("menu-toggle mobile-only accent-{}", accent())
                    aria-label="Menú"
                    aria-expanded=move || page.menu_open.get().to_string()
                    on:click=move |_| page.dispatch(PageEvent::ToggleMobileMenu)
                >
                    {move || {
                        let kind = if page.menu_open.get() { IconKind::Close } else { IconKind::Menu };
                        view! { <Icon kind=kind /> }
                    }}
                </button>
            </div>

            <Show when=move || page.menu_open.get()>
                <div class="mobile-menu mobile-only">
                    <Show when=move || page.is_split()>
                        <ModeSwitcher page=page class="mode-switcher stacked" />
                    </Show>
                    <nav class="nav-links stacked" aria-label="Secciones">
                        <NavLinks page=page />
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// One button per mode. Switching keeps the mobile menu as it is.
#[component]
fn ModeSwitcher(page: PageHandle, class: &'static str) -> impl IntoView {
    view! {
        <div class=class role="group" aria-label="Temas">
            {MainSection::ALL
                .into_iter()
                .map(|mode| {
                    let accent = mode.theme().accent;
                    let selected = move || page.mode.get() == Some(mode);
                    view! {
                        <button
                            class=move || {
                                if selected() {
                                    format!("mode-button active accent-bg-{accent}")
                                } else {
                                    "mode-button".to_string()
                                }
                            }
                            aria-pressed=move || selected().to_string()
                            on:click=move |_| page.dispatch(PageEvent::SwitchMainSection(mode))
                        >
                            {mode.switcher_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Section links of the current navigation.
///
/// The merged page prefixes each mode's links with a heading that jumps to the
/// first section of that mode.
#[component]
fn NavLinks(page: PageHandle) -> impl IntoView {
    move || {
        let merged = !page.is_split();
        page.navigation
            .get()
            .into_iter()
            .map(|group| {
                let heading = group.items.first().filter(|_| merged).map(|first| {
                    let target = first.id;
                    let theme = group.mode.theme();
                    view! {
                        <button
                            class=format!("nav-group-title accent-{}", theme.accent)
                            on:click=move |_| page.navigate(target)
                        >
                            {theme.title}
                        </button>
                    }
                });
                let links = group
                    .items
                    .into_iter()
                    .map(|item| view! { <NavLink page=page item=item /> })
                    .collect_view();
                view! {
                    <div class="nav-group">
                        {heading}
                        {links}
                    </div>
                }
            })
            .collect_view()
    }
}

#[component]
fn NavLink(page: PageHandle, item: NavigationItem) -> impl IntoView {
    let id = item.id;
    view! {
        <button
            class=move || {
                if page.is_active(id) {
                    format!("nav-link active accent-{}", page.theme.get().accent)
                } else {
                    "nav-link".to_string()
                }
            }
            aria-current=move || page.is_active(id).then_some("location")
            on:click=move |_| page.navigate(id)
        >
            <Icon kind=item.icon size="16" />
            <span>{item.label}</span>
        </button>
    }
}
