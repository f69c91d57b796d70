//! Fade-in on first appearance.
//!
//! One `IntersectionObserver` is shared by every [`Reveal`] on the page. When
//! an element enters the viewport it gets the `revealed` class and is no longer
//! observed, so each block animates once. Browsers without the observer API get
//! the class immediately.
//!
//! A [`Reveal`] that unmounts before it was ever scrolled into view drops its
//! registration, so switching modes does not pile up detached targets.

use std::cell::{Cell, OnceCell, RefCell};
use std::collections::HashMap;

use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEALED_CLASS: &str = "revealed";
/// Elements start animating 100px before they reach the bottom edge.
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

thread_local! {
    static OBSERVER: OnceCell<Option<IntersectionObserver>> = const { OnceCell::new() };
    static WATCHED: RefCell<HashMap<u32, Element>> = RefCell::new(HashMap::new());
    static NEXT_KEY: Cell<u32> = const { Cell::new(0) };
}

/// Registration of one element with the shared observer.
///
/// Plain data so it can be moved into `on_cleanup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watch(u32);

pub fn mark_revealed(element: &Element) {
    let _ = element.class_list().add_1(REVEALED_CLASS);
}

pub fn is_revealed(element: &Element) -> bool {
    element.class_list().contains(REVEALED_CLASS)
}

/// Whether `element` is still waiting to enter the viewport.
pub fn is_observed(element: &Element) -> bool {
    WATCHED.with(|watched| watched.borrow().values().any(|e| e == element))
}

/// Number of elements still waiting to enter the viewport.
pub fn observed_count() -> usize {
    WATCHED.with(|watched| watched.borrow().len())
}

fn forget(element: &Element) {
    WATCHED.with(|watched| watched.borrow_mut().retain(|_, e| e != element));
}

fn build_observer() -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    mark_revealed(&target);
                    observer.unobserve(&target);
                    forget(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            // Lives as long as the page
            callback.forget();
            Some(observer)
        }
        Err(err) => {
            warn!(error = ?err, "IntersectionObserver unavailable, revealing content immediately");
            None
        }
    }
}

/// Registers `element` with the shared observer.
///
/// Returns `None` when the element was revealed on the spot because the
/// observer API is missing.
pub fn observe(element: &Element) -> Option<Watch> {
    OBSERVER.with(|cell| match cell.get_or_init(build_observer) {
        Some(observer) => {
            observer.observe(element);
            let key = NEXT_KEY.with(|next| {
                let key = next.get();
                next.set(key.wrapping_add(1));
                key
            });
            WATCHED.with(|watched| watched.borrow_mut().insert(key, element.clone()));
            Some(Watch(key))
        }
        None => {
            mark_revealed(element);
            None
        }
    })
}

/// Drops a registration. A no-op once the element has been revealed.
pub fn unobserve(watch: Watch) {
    let Some(element) = WATCHED.with(|watched| watched.borrow_mut().remove(&watch.0)) else {
        return;
    };
    OBSERVER.with(|cell| {
        if let Some(Some(observer)) = cell.get() {
            observer.unobserve(&element);
        }
    });
    trace!(remaining = observed_count(), "dropped unrevealed block");
}

/// Wraps `children` in a block that fades in the first time it is scrolled into view.
#[component]
pub fn Reveal(
    /// Extra delay before the transition starts, for staggered grids
    #[prop(default = 0)]
    delay_ms: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();

    Effect::new(move || {
        if let Some(element) = node.get() {
            if let Some(watch) = observe(&element) {
                on_cleanup(move || unobserve(watch));
            }
        }
    });

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            style=format!("--reveal-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
